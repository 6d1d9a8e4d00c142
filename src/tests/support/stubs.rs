//! Neutral stand-ins for every use case the routes can reach.
//!
//! Each stub answers with a repository error so a test that forgets to
//! wire its own mock fails loudly instead of passing by accident.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::MemberId;
use crate::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenProvider};
use crate::forums::application::ports::incoming::use_cases::{
    ForumPage, ViewForumError, ViewForumUseCase,
};
use crate::forums::application::ports::outgoing::ForumRecord;
use crate::topics::application::ports::incoming::use_cases::{
    CreateFormError, CreateFormUseCase, CreateTopicCommand, CreateTopicError, CreateTopicUseCase,
    CreatedTopic, DeleteOutcome, DeletePostError, DeletePostUseCase, EditFormData, EditFormError,
    EditFormUseCase, EditPostCommand, EditedPost, LastPageError, LastPageTarget, LastPageUseCase,
    PostedReply, ReplyCommand, ReplyFormError, ReplyFormUseCase, RestorePostError,
    RestorePostUseCase, RestoredPost, ShowTopicError, ShowTopicUseCase, SubmitEditError,
    SubmitEditUseCase, SubmitReplyError, SubmitReplyUseCase, TopicPage,
};
use crate::topics::application::ports::outgoing::TopicRecord;

const NOT_WIRED: &str = "not wired in this test";

pub struct StubShowTopicUseCase;

#[async_trait]
impl ShowTopicUseCase for StubShowTopicUseCase {
    async fn execute(&self, _slug: &str) -> Result<TopicPage, ShowTopicError> {
        Err(ShowTopicError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubLastPageUseCase;

#[async_trait]
impl LastPageUseCase for StubLastPageUseCase {
    async fn execute(
        &self,
        _slug: &str,
        _viewer: Option<MemberId>,
    ) -> Result<LastPageTarget, LastPageError> {
        Err(LastPageError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubReplyFormUseCase;

#[async_trait]
impl ReplyFormUseCase for StubReplyFormUseCase {
    async fn execute(&self, _slug: &str) -> Result<TopicRecord, ReplyFormError> {
        Err(ReplyFormError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubSubmitReplyUseCase;

#[async_trait]
impl SubmitReplyUseCase for StubSubmitReplyUseCase {
    async fn execute(
        &self,
        _slug: &str,
        _command: ReplyCommand,
    ) -> Result<PostedReply, SubmitReplyError> {
        Err(SubmitReplyError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubEditFormUseCase;

#[async_trait]
impl EditFormUseCase for StubEditFormUseCase {
    async fn execute(&self, _slug: &str, _post_id: Uuid) -> Result<EditFormData, EditFormError> {
        Err(EditFormError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubSubmitEditUseCase;

#[async_trait]
impl SubmitEditUseCase for StubSubmitEditUseCase {
    async fn execute(
        &self,
        _slug: &str,
        _post_id: Uuid,
        _command: EditPostCommand,
    ) -> Result<EditedPost, SubmitEditError> {
        Err(SubmitEditError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubCreateFormUseCase;

#[async_trait]
impl CreateFormUseCase for StubCreateFormUseCase {
    async fn execute(&self, _forum_id: Uuid) -> Result<ForumRecord, CreateFormError> {
        Err(CreateFormError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubCreateTopicUseCase;

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(&self, _command: CreateTopicCommand) -> Result<CreatedTopic, CreateTopicError> {
        Err(CreateTopicError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubRestorePostUseCase;

#[async_trait]
impl RestorePostUseCase for StubRestorePostUseCase {
    async fn execute(&self, _slug: &str, _post_id: Uuid) -> Result<RestoredPost, RestorePostError> {
        Err(RestorePostError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubDeletePostUseCase;

#[async_trait]
impl DeletePostUseCase for StubDeletePostUseCase {
    async fn execute(&self, _slug: &str, _post_id: Uuid) -> Result<DeleteOutcome, DeletePostError> {
        Err(DeletePostError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubViewForumUseCase;

#[async_trait]
impl ViewForumUseCase for StubViewForumUseCase {
    async fn execute(&self, _slug: &str) -> Result<ForumPage, ViewForumError> {
        Err(ViewForumError::RepositoryError(NOT_WIRED.to_string()))
    }
}

/// Token provider for extractor tests: either resolves every token to
/// one member id or rejects every token.
pub struct StubTokenProvider {
    member: Option<Uuid>,
}

impl StubTokenProvider {
    pub fn accepting(member_id: Uuid) -> Self {
        Self {
            member: Some(member_id),
        }
    }

    pub fn rejecting() -> Self {
        Self { member: None }
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, _member_id: Uuid) -> Result<String, TokenError> {
        Ok("stub-token".to_string())
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        let sub = self.member.ok_or(TokenError::InvalidSignature)?;
        let now = Utc::now().timestamp();

        Ok(TokenClaims {
            sub,
            exp: now + 1800,
            iat: now,
            nbf: now,
            token_type: "access".to_string(),
        })
    }
}
