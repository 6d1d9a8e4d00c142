pub mod create_form;
pub mod delete_post;
pub mod edit_form;
pub mod last_page;
pub mod reply_form;
pub mod restore_post;
pub mod show_topic;
pub mod submit_create;
pub mod submit_edit;
pub mod submit_reply;
