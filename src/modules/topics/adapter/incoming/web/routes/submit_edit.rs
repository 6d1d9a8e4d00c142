use actix_web::{post, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    shared::web::{pages, paths},
    topics::application::ports::incoming::use_cases::{EditPostCommand, SubmitEditError},
    AppState,
};

/// Edit submission. `title` only arrives from the first-post form.
#[derive(Debug, Deserialize)]
#[cfg_attr(test, derive(serde::Serialize))]
pub struct EditForm {
    pub content: String,
    pub title: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/topics/{slug}/edit/{post_id}")]
pub async fn submit_edit_handler(
    path: web::Path<(String, Uuid)>,
    form: web::Form<EditForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (slug, post_id) = path.into_inner();

    let command = match EditPostCommand::new(&form.content, form.title.as_deref()) {
        Ok(command) => command,
        Err(err) => return pages::bad_request(&err.to_string()),
    };

    match data
        .topic_use_cases
        .submit_edit
        .execute(&slug, post_id, command)
        .await
    {
        Ok(edited) => pages::see_other(paths::topic_path(&edited.slug)),
        Err(err) => map_submit_edit_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_submit_edit_error(err: SubmitEditError) -> actix_web::HttpResponse {
    match err {
        SubmitEditError::NotFound => pages::not_found("Post not found"),
        SubmitEditError::RepositoryError(msg) => {
            tracing::error!("Failed to save edited post: {}", msg);
            pages::server_error()
        }
    }
}
