use async_trait::async_trait;
use thiserror::Error;

use crate::auth::application::domain::entities::MemberId;

/// Per-member display and pagination settings, read alongside the
/// identity when a signed-in request needs them.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberSettings {
    pub id: MemberId,
    pub username: String,
    /// Preferred posts-per-page. `None` means the member never picked
    /// one and the board default applies.
    pub posts_per_page: Option<i32>,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum MemberQueryError {
    #[error("Member not found")]
    NotFound,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MemberQuery {
    async fn find_settings(&self, id: MemberId) -> Result<MemberSettings, MemberQueryError>;
}
