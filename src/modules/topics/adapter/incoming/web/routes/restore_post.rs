use actix_web::{post, web, Responder};
use uuid::Uuid;

use crate::{
    shared::web::{pages, paths},
    topics::application::ports::incoming::use_cases::RestorePostError,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/topics/{slug}/restore/{post_id}")]
pub async fn restore_post_handler(
    path: web::Path<(String, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (slug, post_id) = path.into_inner();

    match data.topic_use_cases.restore.execute(&slug, post_id).await {
        Ok(restored) => pages::see_other(paths::topic_path(&restored.slug)),
        Err(err) => map_restore_post_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_restore_post_error(err: RestorePostError) -> actix_web::HttpResponse {
    match err {
        RestorePostError::NotFound => pages::not_found("Post not found"),
        RestorePostError::RepositoryError(msg) => {
            tracing::error!("Failed to restore post: {}", msg);
            pages::server_error()
        }
    }
}
