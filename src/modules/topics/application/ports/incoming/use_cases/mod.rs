mod create_form;
mod create_topic;
mod delete_post;
mod edit_form;
mod last_page;
mod reply_form;
mod restore_post;
mod show_topic;
mod submit_edit;
mod submit_reply;

pub use create_form::{CreateFormError, CreateFormUseCase};
pub use create_topic::{
    CreateTopicCommand, CreateTopicCommandError, CreateTopicError, CreateTopicUseCase,
    CreatedTopic, MAX_TITLE_LENGTH,
};
pub use delete_post::{DeleteOutcome, DeletePostError, DeletePostUseCase};
pub use edit_form::{EditFormData, EditFormError, EditFormUseCase};
pub use last_page::{LastPageError, LastPageTarget, LastPageUseCase};
pub use reply_form::{ReplyFormError, ReplyFormUseCase};
pub use restore_post::{RestorePostError, RestorePostUseCase, RestoredPost};
pub use show_topic::{ShowTopicError, ShowTopicUseCase, TopicPage};
pub use submit_edit::{
    EditPostCommand, EditPostCommandError, EditedPost, SubmitEditError, SubmitEditUseCase,
};
pub use submit_reply::{
    PostedReply, ReplyCommand, ReplyCommandError, SubmitReplyError, SubmitReplyUseCase,
};
