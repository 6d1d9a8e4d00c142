use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{
    shared::web::pages,
    topics::adapter::incoming::web::views::EditFormPage,
    topics::application::ports::incoming::use_cases::EditFormError,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[get("/topics/{slug}/edit/{post_id}")]
pub async fn edit_form_handler(
    path: web::Path<(String, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (slug, post_id) = path.into_inner();

    match data.topic_use_cases.edit_form.execute(&slug, post_id).await {
        Ok(form) => pages::render(&EditFormPage::from_data(&form)),
        Err(err) => map_edit_form_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_edit_form_error(err: EditFormError) -> actix_web::HttpResponse {
    match err {
        EditFormError::NotFound => pages::not_found("Post not found"),
        EditFormError::RepositoryError(msg) => {
            tracing::error!("Failed to open edit form: {}", msg);
            pages::server_error()
        }
    }
}
