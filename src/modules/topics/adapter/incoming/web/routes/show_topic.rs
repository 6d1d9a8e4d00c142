use actix_web::{get, web, Responder};

use crate::{
    shared::web::pages,
    topics::adapter::incoming::web::views::TopicShowPage,
    topics::application::ports::incoming::use_cases::ShowTopicError,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[get("/topics/{slug}")]
pub async fn show_topic_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.topic_use_cases.show.execute(&slug).await {
        Ok(page) => pages::render(&TopicShowPage::from_page(&page)),
        Err(err) => map_show_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_show_topic_error(err: ShowTopicError) -> actix_web::HttpResponse {
    match err {
        ShowTopicError::NotFound => pages::not_found("Topic not found"),
        ShowTopicError::RepositoryError(msg) => {
            tracing::error!("Failed to load topic page: {}", msg);
            pages::server_error()
        }
    }
}
