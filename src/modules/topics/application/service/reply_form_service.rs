use async_trait::async_trait;

use crate::topics::application::ports::incoming::use_cases::{ReplyFormError, ReplyFormUseCase};
use crate::topics::application::ports::outgoing::{TopicQuery, TopicQueryError, TopicRecord};

pub struct ReplyFormService<TQ>
where
    TQ: TopicQuery,
{
    topics: TQ,
}

impl<TQ> ReplyFormService<TQ>
where
    TQ: TopicQuery,
{
    pub fn new(topics: TQ) -> Self {
        Self { topics }
    }
}

#[async_trait]
impl<TQ> ReplyFormUseCase for ReplyFormService<TQ>
where
    TQ: TopicQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<TopicRecord, ReplyFormError> {
        self.topics.find_by_slug(slug).await.map_err(|e| match e {
            TopicQueryError::NotFound => ReplyFormError::NotFound,
            TopicQueryError::DatabaseError(msg) => ReplyFormError::RepositoryError(msg),
        })
    }
}
