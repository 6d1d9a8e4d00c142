use async_trait::async_trait;

use crate::auth::application::domain::entities::MemberId;
use crate::auth::application::ports::outgoing::MemberQuery;
use crate::topics::application::domain::pagination;
use crate::topics::application::ports::incoming::use_cases::{
    LastPageError, LastPageTarget, LastPageUseCase,
};
use crate::topics::application::ports::outgoing::{TopicQuery, TopicQueryError};

pub struct LastPageService<TQ, MQ>
where
    TQ: TopicQuery,
    MQ: MemberQuery,
{
    topics: TQ,
    members: MQ,
}

impl<TQ, MQ> LastPageService<TQ, MQ>
where
    TQ: TopicQuery,
    MQ: MemberQuery,
{
    pub fn new(topics: TQ, members: MQ) -> Self {
        Self { topics, members }
    }
}

#[async_trait]
impl<TQ, MQ> LastPageUseCase for LastPageService<TQ, MQ>
where
    TQ: TopicQuery + Send + Sync,
    MQ: MemberQuery + Send + Sync,
{
    async fn execute(
        &self,
        slug: &str,
        viewer: Option<MemberId>,
    ) -> Result<LastPageTarget, LastPageError> {
        let topic = self.topics.find_by_slug(slug).await.map_err(|e| match e {
            TopicQueryError::NotFound => LastPageError::NotFound,
            TopicQueryError::DatabaseError(msg) => LastPageError::RepositoryError(msg),
        })?;

        let posts_per_page = pagination::effective_posts_per_page(&self.members, viewer)
            .await
            .map_err(|e| LastPageError::RepositoryError(e.to_string()))?;

        let page = pagination::last_page(topic.num_posts, posts_per_page);

        Ok(LastPageTarget {
            slug: topic.slug,
            page,
            last_post_id: topic.last_post_id,
        })
    }
}
