use std::sync::Arc;

use crate::topics::application::ports::incoming::use_cases::{
    CreateFormUseCase, CreateTopicUseCase, DeletePostUseCase, EditFormUseCase, LastPageUseCase,
    ReplyFormUseCase, RestorePostUseCase, ShowTopicUseCase, SubmitEditUseCase, SubmitReplyUseCase,
};

/// Everything the topic routes can do, bundled for app wiring.
#[derive(Clone)]
pub struct TopicUseCases {
    pub show: Arc<dyn ShowTopicUseCase + Send + Sync>,
    pub last: Arc<dyn LastPageUseCase + Send + Sync>,
    pub reply_form: Arc<dyn ReplyFormUseCase + Send + Sync>,
    pub submit_reply: Arc<dyn SubmitReplyUseCase + Send + Sync>,
    pub edit_form: Arc<dyn EditFormUseCase + Send + Sync>,
    pub submit_edit: Arc<dyn SubmitEditUseCase + Send + Sync>,
    pub create_form: Arc<dyn CreateFormUseCase + Send + Sync>,
    pub create: Arc<dyn CreateTopicUseCase + Send + Sync>,
    pub restore: Arc<dyn RestorePostUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePostUseCase + Send + Sync>,
}
