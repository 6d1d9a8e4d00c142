use async_trait::async_trait;
use uuid::Uuid;

use crate::forums::application::ports::outgoing::{ForumQuery, ForumQueryError};
use crate::topics::application::domain::slug::slugify;
use crate::topics::application::ports::incoming::use_cases::{
    CreateTopicCommand, CreateTopicError, CreateTopicUseCase, CreatedTopic,
};
use crate::topics::application::ports::outgoing::{
    NewPost, NewTopic, PostRepository, TopicQuery, TopicQueryError, TopicRepository,
    TopicRepositoryError,
};

/// How many numbered slug variants to try before giving up on pretty
/// slugs and appending a uuid.
const MAX_SLUG_PROBES: u32 = 50;

pub struct CreateTopicService<FQ, TQ, TR, PR>
where
    FQ: ForumQuery,
    TQ: TopicQuery,
    TR: TopicRepository,
    PR: PostRepository,
{
    forums: FQ,
    topics: TQ,
    topic_repository: TR,
    post_repository: PR,
}

impl<FQ, TQ, TR, PR> CreateTopicService<FQ, TQ, TR, PR>
where
    FQ: ForumQuery,
    TQ: TopicQuery,
    TR: TopicRepository,
    PR: PostRepository,
{
    pub fn new(forums: FQ, topics: TQ, topic_repository: TR, post_repository: PR) -> Self {
        Self {
            forums,
            topics,
            topic_repository,
            post_repository,
        }
    }

    async fn unique_slug(&self, title: &str) -> Result<String, TopicQueryError> {
        let mut base = slugify(title);
        if base.is_empty() {
            base = "topic".to_string();
        }

        if !self.topics.slug_exists(&base).await? {
            return Ok(base);
        }

        for n in 2..=MAX_SLUG_PROBES {
            let candidate = format!("{base}-{n}");
            if !self.topics.slug_exists(&candidate).await? {
                return Ok(candidate);
            }
        }

        Ok(format!("{base}-{}", Uuid::new_v4()))
    }
}

#[async_trait]
impl<FQ, TQ, TR, PR> CreateTopicUseCase for CreateTopicService<FQ, TQ, TR, PR>
where
    FQ: ForumQuery + Send + Sync,
    TQ: TopicQuery + Send + Sync,
    TR: TopicRepository + Send + Sync,
    PR: PostRepository + Send + Sync,
{
    async fn execute(&self, command: CreateTopicCommand) -> Result<CreatedTopic, CreateTopicError> {
        let forum = self
            .forums
            .find(command.forum_id)
            .await
            .map_err(|e| match e {
                ForumQueryError::NotFound => CreateTopicError::ForumNotFound,
                ForumQueryError::DatabaseError(msg) => CreateTopicError::RepositoryError(msg),
            })?;

        let slug = self
            .unique_slug(&command.title)
            .await
            .map_err(|e| match e {
                TopicQueryError::NotFound => CreateTopicError::RepositoryError(e.to_string()),
                TopicQueryError::DatabaseError(msg) => CreateTopicError::RepositoryError(msg),
            })?;

        let topic = self
            .topic_repository
            .create(NewTopic {
                forum_id: forum.id,
                author: command.author,
                title: command.title,
                slug,
            })
            .await
            .map_err(|e| match e {
                TopicRepositoryError::NotFound => CreateTopicError::RepositoryError(e.to_string()),
                TopicRepositoryError::DatabaseError(msg) => CreateTopicError::RepositoryError(msg),
            })?;

        // The opening post; the insert also wires up the topic's
        // first/last post pointers and its post count.
        self.post_repository
            .add_to_topic(NewPost {
                topic_id: topic.id,
                author: command.author,
                content: command.content,
            })
            .await
            .map_err(|e| CreateTopicError::RepositoryError(e.to_string()))?;

        Ok(CreatedTopic { slug: topic.slug })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::HashSet;
    use std::sync::Mutex;

    use crate::auth::application::domain::entities::MemberId;
    use crate::forums::application::ports::outgoing::ForumRecord;
    use crate::topics::application::ports::outgoing::{
        PostAdded, PostRepositoryError, TopicRecord, TopicSummary,
    };

    struct MockForumQuery {
        result: Result<ForumRecord, ForumQueryError>,
    }

    #[async_trait]
    impl ForumQuery for MockForumQuery {
        async fn find(&self, _forum_id: Uuid) -> Result<ForumRecord, ForumQueryError> {
            self.result.clone()
        }

        async fn find_by_slug(&self, _slug: &str) -> Result<ForumRecord, ForumQueryError> {
            unimplemented!("not used in CreateTopicService tests")
        }
    }

    struct MockTopicQuery {
        taken_slugs: HashSet<String>,
    }

    impl MockTopicQuery {
        fn with_taken(slugs: &[&str]) -> Self {
            Self {
                taken_slugs: slugs.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    #[async_trait]
    impl TopicQuery for MockTopicQuery {
        async fn find(&self, _topic_id: Uuid) -> Result<TopicRecord, TopicQueryError> {
            unimplemented!("not used in CreateTopicService tests")
        }

        async fn find_by_slug(&self, _slug: &str) -> Result<TopicRecord, TopicQueryError> {
            unimplemented!("not used in CreateTopicService tests")
        }

        async fn list_for_forum(
            &self,
            _forum_id: Uuid,
        ) -> Result<Vec<TopicSummary>, TopicQueryError> {
            unimplemented!("not used in CreateTopicService tests")
        }

        async fn slug_exists(&self, slug: &str) -> Result<bool, TopicQueryError> {
            Ok(self.taken_slugs.contains(slug))
        }
    }

    struct RecordingTopicRepository {
        created: Mutex<Vec<NewTopic>>,
        fail: Option<TopicRepositoryError>,
    }

    impl RecordingTopicRepository {
        fn succeeding() -> Self {
            Self {
                created: Mutex::new(Vec::new()),
                fail: None,
            }
        }

        fn failing(err: TopicRepositoryError) -> Self {
            Self {
                created: Mutex::new(Vec::new()),
                fail: Some(err),
            }
        }
    }

    #[async_trait]
    impl TopicRepository for RecordingTopicRepository {
        async fn create(&self, data: NewTopic) -> Result<TopicRecord, TopicRepositoryError> {
            if let Some(err) = &self.fail {
                return Err(err.clone());
            }

            let now = Utc::now().fixed_offset();
            let record = TopicRecord {
                id: Uuid::new_v4(),
                forum_id: data.forum_id,
                author: data.author,
                title: data.title.clone(),
                slug: data.slug.clone(),
                views: 0,
                num_posts: 0,
                first_post_id: None,
                last_post_id: None,
                created_at: now,
                updated_at: now,
            };
            self.created.lock().unwrap().push(data);
            Ok(record)
        }

        async fn edit(
            &self,
            _topic_id: Uuid,
            _changes: crate::topics::application::ports::outgoing::TopicChanges,
        ) -> Result<(), TopicRepositoryError> {
            unimplemented!("not used in CreateTopicService tests")
        }

        async fn increment_views(&self, _topic_id: Uuid) -> Result<(), TopicRepositoryError> {
            unimplemented!("not used in CreateTopicService tests")
        }

        async fn soft_delete(&self, _topic_id: Uuid) -> Result<(), TopicRepositoryError> {
            unimplemented!("not used in CreateTopicService tests")
        }
    }

    struct RecordingPostRepository {
        inserted: Mutex<Vec<NewPost>>,
        result: Result<PostAdded, PostRepositoryError>,
    }

    impl RecordingPostRepository {
        fn returning(result: Result<PostAdded, PostRepositoryError>) -> Self {
            Self {
                inserted: Mutex::new(Vec::new()),
                result,
            }
        }
    }

    #[async_trait]
    impl PostRepository for RecordingPostRepository {
        async fn add_to_topic(&self, data: NewPost) -> Result<PostAdded, PostRepositoryError> {
            self.inserted.lock().unwrap().push(data);
            self.result.clone()
        }

        async fn edit_content(
            &self,
            _post_id: Uuid,
            _content: &str,
        ) -> Result<(), PostRepositoryError> {
            unimplemented!("not used in CreateTopicService tests")
        }

        async fn soft_delete(&self, _post_id: Uuid) -> Result<(), PostRepositoryError> {
            unimplemented!("not used in CreateTopicService tests")
        }

        async fn restore(&self, _post_id: Uuid) -> Result<(), PostRepositoryError> {
            unimplemented!("not used in CreateTopicService tests")
        }
    }

    fn sample_forum() -> ForumRecord {
        ForumRecord {
            id: Uuid::new_v4(),
            title: "General".to_string(),
            slug: "general".to_string(),
            description: None,
        }
    }

    fn added() -> PostAdded {
        PostAdded {
            post_id: Uuid::new_v4(),
            topic_num_posts: 1,
        }
    }

    #[tokio::test]
    async fn creates_the_topic_and_its_opening_post() {
        let forum = sample_forum();
        let author = MemberId::from(Uuid::new_v4());
        let service = CreateTopicService::new(
            MockForumQuery {
                result: Ok(forum.clone()),
            },
            MockTopicQuery::with_taken(&[]),
            RecordingTopicRepository::succeeding(),
            RecordingPostRepository::returning(Ok(added())),
        );

        let command = CreateTopicCommand::new(
            forum.id,
            Some(author),
            "Hello World!",
            "first words",
        )
        .unwrap();
        let created = service.execute(command).await.unwrap();

        assert_eq!(created.slug, "hello-world");

        let topics = service.topic_repository.created.lock().unwrap();
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].forum_id, forum.id);
        assert_eq!(topics[0].author, Some(author));
        assert_eq!(topics[0].title, "Hello World!");
        assert_eq!(topics[0].slug, "hello-world");

        let posts = service.post_repository.inserted.lock().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].author, Some(author));
        assert_eq!(posts[0].content, "first words");
    }

    #[tokio::test]
    async fn taken_slugs_get_a_numeric_suffix() {
        let forum = sample_forum();
        let service = CreateTopicService::new(
            MockForumQuery {
                result: Ok(forum.clone()),
            },
            MockTopicQuery::with_taken(&["hello-world", "hello-world-2"]),
            RecordingTopicRepository::succeeding(),
            RecordingPostRepository::returning(Ok(added())),
        );

        let command = CreateTopicCommand::new(forum.id, None, "Hello World", "body").unwrap();
        let created = service.execute(command).await.unwrap();

        assert_eq!(created.slug, "hello-world-3");
    }

    #[tokio::test]
    async fn a_title_with_no_slug_material_still_gets_one() {
        let forum = sample_forum();
        let service = CreateTopicService::new(
            MockForumQuery {
                result: Ok(forum.clone()),
            },
            MockTopicQuery::with_taken(&[]),
            RecordingTopicRepository::succeeding(),
            RecordingPostRepository::returning(Ok(added())),
        );

        let command = CreateTopicCommand::new(forum.id, None, "!!!", "body").unwrap();
        let created = service.execute(command).await.unwrap();

        assert_eq!(created.slug, "topic");
    }

    #[tokio::test]
    async fn unknown_forum_is_rejected_before_anything_is_written() {
        let service = CreateTopicService::new(
            MockForumQuery {
                result: Err(ForumQueryError::NotFound),
            },
            MockTopicQuery::with_taken(&[]),
            RecordingTopicRepository::succeeding(),
            RecordingPostRepository::returning(Ok(added())),
        );

        let command =
            CreateTopicCommand::new(Uuid::new_v4(), None, "Hello World", "body").unwrap();
        let result = service.execute(command).await;

        assert_eq!(result, Err(CreateTopicError::ForumNotFound));
        assert!(service.topic_repository.created.lock().unwrap().is_empty());
        assert!(service.post_repository.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn topic_insert_failure_surfaces_as_repository_error() {
        let forum = sample_forum();
        let service = CreateTopicService::new(
            MockForumQuery {
                result: Ok(forum.clone()),
            },
            MockTopicQuery::with_taken(&[]),
            RecordingTopicRepository::failing(TopicRepositoryError::DatabaseError(
                "unique violation".to_string(),
            )),
            RecordingPostRepository::returning(Ok(added())),
        );

        let command = CreateTopicCommand::new(forum.id, None, "Hello World", "body").unwrap();
        let result = service.execute(command).await;

        assert!(matches!(result, Err(CreateTopicError::RepositoryError(_))));
        assert!(service.post_repository.inserted.lock().unwrap().is_empty());
    }
}
