mod post_query;
mod post_repository;
mod topic_query;
mod topic_repository;

pub use post_query::{PostQuery, PostQueryError, PostRecord};
pub use post_repository::{NewPost, PostAdded, PostRepository, PostRepositoryError};
pub use topic_query::{TopicQuery, TopicQueryError, TopicRecord, TopicSummary};
pub use topic_repository::{NewTopic, TopicChanges, TopicRepository, TopicRepositoryError};
