use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::auth::application::domain::entities::MemberId;

/// Where "jump to last post" should land: the topic's final page,
/// anchored at its last post when the topic has one.
#[derive(Debug, Clone, PartialEq)]
pub struct LastPageTarget {
    pub slug: String,
    pub page: u64,
    pub last_post_id: Option<Uuid>,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum LastPageError {
    #[error("Topic not found")]
    NotFound,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait LastPageUseCase {
    async fn execute(
        &self,
        slug: &str,
        viewer: Option<MemberId>,
    ) -> Result<LastPageTarget, LastPageError>;
}
