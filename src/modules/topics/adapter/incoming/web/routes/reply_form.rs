use actix_web::{get, web, Responder};

use crate::{
    shared::web::pages,
    topics::adapter::incoming::web::views::ReplyFormPage,
    topics::application::ports::incoming::use_cases::ReplyFormError,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[get("/topics/{slug}/reply")]
pub async fn reply_form_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.topic_use_cases.reply_form.execute(&slug).await {
        Ok(topic) => pages::render(&ReplyFormPage::for_topic(&topic)),
        Err(err) => map_reply_form_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_reply_form_error(err: ReplyFormError) -> actix_web::HttpResponse {
    match err {
        ReplyFormError::NotFound => pages::not_found("Topic not found"),
        ReplyFormError::RepositoryError(msg) => {
            tracing::error!("Failed to open reply form: {}", msg);
            pages::server_error()
        }
    }
}
