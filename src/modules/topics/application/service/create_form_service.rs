use async_trait::async_trait;
use uuid::Uuid;

use crate::forums::application::ports::outgoing::{ForumQuery, ForumQueryError, ForumRecord};
use crate::topics::application::ports::incoming::use_cases::{CreateFormError, CreateFormUseCase};

pub struct CreateFormService<FQ>
where
    FQ: ForumQuery,
{
    forums: FQ,
}

impl<FQ> CreateFormService<FQ>
where
    FQ: ForumQuery,
{
    pub fn new(forums: FQ) -> Self {
        Self { forums }
    }
}

#[async_trait]
impl<FQ> CreateFormUseCase for CreateFormService<FQ>
where
    FQ: ForumQuery + Send + Sync,
{
    async fn execute(&self, forum_id: Uuid) -> Result<ForumRecord, CreateFormError> {
        self.forums.find(forum_id).await.map_err(|e| match e {
            ForumQueryError::NotFound => CreateFormError::NotFound,
            ForumQueryError::DatabaseError(msg) => CreateFormError::RepositoryError(msg),
        })
    }
}
