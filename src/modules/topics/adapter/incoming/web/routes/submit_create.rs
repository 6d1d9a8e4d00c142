use actix_web::{post, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::current_member::CurrentMember,
    shared::web::{pages, paths},
    topics::application::ports::incoming::use_cases::{CreateTopicCommand, CreateTopicError},
    AppState,
};

#[derive(Debug, Deserialize)]
#[cfg_attr(test, derive(serde::Serialize))]
pub struct CreateTopicForm {
    pub title: String,
    pub content: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/topics/create/{forum_id}")]
pub async fn submit_create_handler(
    path: web::Path<Uuid>,
    form: web::Form<CreateTopicForm>,
    member: CurrentMember,
    data: web::Data<AppState>,
) -> impl Responder {
    let forum_id = path.into_inner();

    let command =
        match CreateTopicCommand::new(forum_id, member.member_id, &form.title, &form.content) {
            Ok(command) => command,
            Err(err) => return pages::bad_request(&err.to_string()),
        };

    match data.topic_use_cases.create.execute(command).await {
        Ok(created) => pages::see_other(paths::topic_path(&created.slug)),
        Err(err) => map_create_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_topic_error(err: CreateTopicError) -> actix_web::HttpResponse {
    match err {
        CreateTopicError::ForumNotFound => pages::not_found("Forum not found"),
        CreateTopicError::RepositoryError(msg) => {
            tracing::error!("Failed to create topic: {}", msg);
            pages::server_error()
        }
    }
}
