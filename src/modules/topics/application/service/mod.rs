mod create_form_service;
mod create_topic_service;
mod delete_post_service;
mod edit_form_service;
mod last_page_service;
mod reply_form_service;
mod restore_post_service;
mod show_topic_service;
mod submit_edit_service;
mod submit_reply_service;

pub use create_form_service::CreateFormService;
pub use create_topic_service::CreateTopicService;
pub use delete_post_service::DeletePostService;
pub use edit_form_service::EditFormService;
pub use last_page_service::LastPageService;
pub use reply_form_service::ReplyFormService;
pub use restore_post_service::RestorePostService;
pub use show_topic_service::ShowTopicService;
pub use submit_edit_service::SubmitEditService;
pub use submit_reply_service::SubmitReplyService;
