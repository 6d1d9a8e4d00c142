mod forum_query;

pub use forum_query::{ForumQuery, ForumQueryError, ForumRecord};
