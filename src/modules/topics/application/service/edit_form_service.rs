use async_trait::async_trait;
use uuid::Uuid;

use crate::topics::application::ports::incoming::use_cases::{
    EditFormData, EditFormError, EditFormUseCase,
};
use crate::topics::application::ports::outgoing::{
    PostQuery, PostQueryError, TopicQuery, TopicQueryError,
};

pub struct EditFormService<TQ, PQ>
where
    TQ: TopicQuery,
    PQ: PostQuery,
{
    topics: TQ,
    posts: PQ,
}

impl<TQ, PQ> EditFormService<TQ, PQ>
where
    TQ: TopicQuery,
    PQ: PostQuery,
{
    pub fn new(topics: TQ, posts: PQ) -> Self {
        Self { topics, posts }
    }
}

#[async_trait]
impl<TQ, PQ> EditFormUseCase for EditFormService<TQ, PQ>
where
    TQ: TopicQuery + Send + Sync,
    PQ: PostQuery + Send + Sync,
{
    async fn execute(&self, slug: &str, post_id: Uuid) -> Result<EditFormData, EditFormError> {
        let topic = self.topics.find_by_slug(slug).await.map_err(|e| match e {
            TopicQueryError::NotFound => EditFormError::NotFound,
            TopicQueryError::DatabaseError(msg) => EditFormError::RepositoryError(msg),
        })?;

        let post = self.posts.find(post_id).await.map_err(|e| match e {
            PostQueryError::NotFound => EditFormError::NotFound,
            PostQueryError::DatabaseError(msg) => EditFormError::RepositoryError(msg),
        })?;

        // A post id under the wrong topic slug reveals nothing.
        if post.topic_id != topic.id {
            return Err(EditFormError::NotFound);
        }

        let is_first_post = topic.first_post_id == Some(post.id);

        Ok(EditFormData {
            topic,
            post,
            is_first_post,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::topics::application::ports::outgoing::{PostRecord, TopicRecord, TopicSummary};

    struct MockTopicQuery {
        result: Result<TopicRecord, TopicQueryError>,
    }

    #[async_trait]
    impl TopicQuery for MockTopicQuery {
        async fn find(&self, _topic_id: Uuid) -> Result<TopicRecord, TopicQueryError> {
            unimplemented!("not used in EditFormService tests")
        }

        async fn find_by_slug(&self, _slug: &str) -> Result<TopicRecord, TopicQueryError> {
            self.result.clone()
        }

        async fn list_for_forum(
            &self,
            _forum_id: Uuid,
        ) -> Result<Vec<TopicSummary>, TopicQueryError> {
            unimplemented!("not used in EditFormService tests")
        }

        async fn slug_exists(&self, _slug: &str) -> Result<bool, TopicQueryError> {
            unimplemented!("not used in EditFormService tests")
        }
    }

    struct MockPostQuery {
        result: Result<PostRecord, PostQueryError>,
    }

    #[async_trait]
    impl PostQuery for MockPostQuery {
        async fn find(&self, _post_id: Uuid) -> Result<PostRecord, PostQueryError> {
            self.result.clone()
        }

        async fn all_for_topic(
            &self,
            _topic_id: Uuid,
            _include_deleted: bool,
        ) -> Result<Vec<PostRecord>, PostQueryError> {
            unimplemented!("not used in EditFormService tests")
        }
    }

    fn sample_topic(first_post_id: Uuid) -> TopicRecord {
        let now = Utc::now().fixed_offset();
        TopicRecord {
            id: Uuid::new_v4(),
            forum_id: Uuid::new_v4(),
            author: None,
            title: "Editable thread".to_string(),
            slug: "editable-thread".to_string(),
            views: 5,
            num_posts: 2,
            first_post_id: Some(first_post_id),
            last_post_id: Some(Uuid::new_v4()),
            created_at: now,
            updated_at: now,
        }
    }

    fn post_in(topic_id: Uuid, post_id: Uuid) -> PostRecord {
        let now = Utc::now().fixed_offset();
        PostRecord {
            id: post_id,
            topic_id,
            author: None,
            author_name: "Guest".to_string(),
            content: "original words".to_string(),
            deleted_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn first_post_is_flagged_so_the_form_offers_a_title_field() {
        let post_id = Uuid::new_v4();
        let topic = sample_topic(post_id);
        let post = post_in(topic.id, post_id);

        let service = EditFormService::new(
            MockTopicQuery {
                result: Ok(topic.clone()),
            },
            MockPostQuery {
                result: Ok(post.clone()),
            },
        );

        let data = service.execute("editable-thread", post_id).await.unwrap();

        assert_eq!(data.topic, topic);
        assert_eq!(data.post, post);
        assert!(data.is_first_post);
    }

    #[tokio::test]
    async fn later_posts_are_not_flagged() {
        let topic = sample_topic(Uuid::new_v4());
        let post_id = Uuid::new_v4();
        let post = post_in(topic.id, post_id);

        let service = EditFormService::new(
            MockTopicQuery { result: Ok(topic) },
            MockPostQuery { result: Ok(post) },
        );

        let data = service.execute("editable-thread", post_id).await.unwrap();

        assert!(!data.is_first_post);
    }

    #[tokio::test]
    async fn post_from_another_topic_is_not_found() {
        let topic = sample_topic(Uuid::new_v4());
        let post_id = Uuid::new_v4();
        let foreign_post = post_in(Uuid::new_v4(), post_id);

        let service = EditFormService::new(
            MockTopicQuery { result: Ok(topic) },
            MockPostQuery {
                result: Ok(foreign_post),
            },
        );

        let result = service.execute("editable-thread", post_id).await;

        assert_eq!(result, Err(EditFormError::NotFound));
    }

    #[tokio::test]
    async fn missing_post_is_not_found() {
        let topic = sample_topic(Uuid::new_v4());
        let service = EditFormService::new(
            MockTopicQuery { result: Ok(topic) },
            MockPostQuery {
                result: Err(PostQueryError::NotFound),
            },
        );

        let result = service.execute("editable-thread", Uuid::new_v4()).await;

        assert_eq!(result, Err(EditFormError::NotFound));
    }

    #[tokio::test]
    async fn missing_topic_is_not_found() {
        let service = EditFormService::new(
            MockTopicQuery {
                result: Err(TopicQueryError::NotFound),
            },
            MockPostQuery {
                result: Err(PostQueryError::NotFound),
            },
        );

        let result = service.execute("missing", Uuid::new_v4()).await;

        assert_eq!(result, Err(EditFormError::NotFound));
    }
}
