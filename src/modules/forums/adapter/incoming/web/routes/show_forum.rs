use actix_web::{get, web, Responder};

use crate::{
    forums::adapter::incoming::web::views::ForumShowPage,
    forums::application::ports::incoming::use_cases::ViewForumError, shared::web::pages, AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[get("/forums/{slug}")]
pub async fn show_forum_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.forum_use_cases.view.execute(&slug).await {
        Ok(page) => pages::render(&ForumShowPage::from_page(&page)),
        Err(err) => map_view_forum_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_view_forum_error(err: ViewForumError) -> actix_web::HttpResponse {
    match err {
        ViewForumError::NotFound => pages::not_found("Forum not found"),
        ViewForumError::RepositoryError(msg) => {
            tracing::error!("Failed to load forum page: {}", msg);
            pages::server_error()
        }
    }
}
