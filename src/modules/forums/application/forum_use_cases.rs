use std::sync::Arc;

use crate::forums::application::ports::incoming::use_cases::ViewForumUseCase;

#[derive(Clone)]
pub struct ForumUseCases {
    pub view: Arc<dyn ViewForumUseCase + Send + Sync>,
}
