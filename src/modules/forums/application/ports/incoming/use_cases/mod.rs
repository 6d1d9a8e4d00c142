mod view_forum;

pub use view_forum::{ForumPage, ViewForumError, ViewForumUseCase};
