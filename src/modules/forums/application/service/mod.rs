mod view_forum_service;

pub use view_forum_service::ViewForumService;
