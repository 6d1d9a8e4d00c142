use actix_web::{post, web, Responder};
use uuid::Uuid;

use crate::{
    shared::web::{pages, paths},
    topics::application::ports::incoming::use_cases::{DeleteOutcome, DeletePostError},
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/topics/{slug}/delete/{post_id}")]
pub async fn delete_post_handler(
    path: web::Path<(String, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (slug, post_id) = path.into_inner();

    match data.topic_use_cases.delete.execute(&slug, post_id).await {
        // Deleting the opening post removed the whole topic, so the
        // topic page no longer exists to land on.
        Ok(DeleteOutcome::TopicDeleted { forum_slug }) => {
            pages::see_other(paths::forum_path(&forum_slug))
        }
        Ok(DeleteOutcome::PostDeleted { topic_slug }) => {
            pages::see_other(paths::topic_path(&topic_slug))
        }
        Err(err) => map_delete_post_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_delete_post_error(err: DeletePostError) -> actix_web::HttpResponse {
    match err {
        DeletePostError::NotFound => pages::not_found("Post not found"),
        DeletePostError::RepositoryError(msg) => {
            tracing::error!("Failed to delete post: {}", msg);
            pages::server_error()
        }
    }
}
