use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{
    shared::web::pages,
    topics::adapter::incoming::web::views::CreateFormPage,
    topics::application::ports::incoming::use_cases::CreateFormError,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[get("/topics/create/{forum_id}")]
pub async fn create_form_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let forum_id = path.into_inner();

    match data.topic_use_cases.create_form.execute(forum_id).await {
        Ok(forum) => pages::render(&CreateFormPage::for_forum(&forum)),
        Err(err) => map_create_form_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_form_error(err: CreateFormError) -> actix_web::HttpResponse {
    match err {
        CreateFormError::NotFound => pages::not_found("Forum not found"),
        CreateFormError::RepositoryError(msg) => {
            tracing::error!("Failed to open topic composer: {}", msg);
            pages::server_error()
        }
    }
}
