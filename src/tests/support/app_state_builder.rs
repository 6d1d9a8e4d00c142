use std::sync::Arc;

use actix_web::web;

use crate::forums::application::forum_use_cases::ForumUseCases;
use crate::forums::application::ports::incoming::use_cases::ViewForumUseCase;
use crate::tests::support::stubs::*;
use crate::topics::application::ports::incoming::use_cases::{
    CreateFormUseCase, CreateTopicUseCase, DeletePostUseCase, EditFormUseCase, LastPageUseCase,
    ReplyFormUseCase, RestorePostUseCase, ShowTopicUseCase, SubmitEditUseCase, SubmitReplyUseCase,
};
use crate::AppState;

/// App state for route tests. Every use case starts as a stub that
/// fails on contact; tests swap in a mock for the one route under
/// test.
pub struct TestAppStateBuilder {
    show_topic: Arc<dyn ShowTopicUseCase + Send + Sync>,
    last_page: Arc<dyn LastPageUseCase + Send + Sync>,
    reply_form: Arc<dyn ReplyFormUseCase + Send + Sync>,
    submit_reply: Arc<dyn SubmitReplyUseCase + Send + Sync>,
    edit_form: Arc<dyn EditFormUseCase + Send + Sync>,
    submit_edit: Arc<dyn SubmitEditUseCase + Send + Sync>,
    create_form: Arc<dyn CreateFormUseCase + Send + Sync>,
    create_topic: Arc<dyn CreateTopicUseCase + Send + Sync>,
    restore_post: Arc<dyn RestorePostUseCase + Send + Sync>,
    delete_post: Arc<dyn DeletePostUseCase + Send + Sync>,
    view_forum: Arc<dyn ViewForumUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            show_topic: Arc::new(StubShowTopicUseCase),
            last_page: Arc::new(StubLastPageUseCase),
            reply_form: Arc::new(StubReplyFormUseCase),
            submit_reply: Arc::new(StubSubmitReplyUseCase),
            edit_form: Arc::new(StubEditFormUseCase),
            submit_edit: Arc::new(StubSubmitEditUseCase),
            create_form: Arc::new(StubCreateFormUseCase),
            create_topic: Arc::new(StubCreateTopicUseCase),
            restore_post: Arc::new(StubRestorePostUseCase),
            delete_post: Arc::new(StubDeletePostUseCase),
            view_forum: Arc::new(StubViewForumUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_show_topic(mut self, uc: impl ShowTopicUseCase + Send + Sync + 'static) -> Self {
        self.show_topic = Arc::new(uc);
        self
    }

    pub fn with_last_page(mut self, uc: impl LastPageUseCase + Send + Sync + 'static) -> Self {
        self.last_page = Arc::new(uc);
        self
    }

    pub fn with_reply_form(mut self, uc: impl ReplyFormUseCase + Send + Sync + 'static) -> Self {
        self.reply_form = Arc::new(uc);
        self
    }

    pub fn with_submit_reply(
        mut self,
        uc: impl SubmitReplyUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_reply = Arc::new(uc);
        self
    }

    pub fn with_edit_form(mut self, uc: impl EditFormUseCase + Send + Sync + 'static) -> Self {
        self.edit_form = Arc::new(uc);
        self
    }

    pub fn with_submit_edit(mut self, uc: impl SubmitEditUseCase + Send + Sync + 'static) -> Self {
        self.submit_edit = Arc::new(uc);
        self
    }

    pub fn with_create_form(mut self, uc: impl CreateFormUseCase + Send + Sync + 'static) -> Self {
        self.create_form = Arc::new(uc);
        self
    }

    pub fn with_create_topic(
        mut self,
        uc: impl CreateTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_topic = Arc::new(uc);
        self
    }

    pub fn with_restore_post(
        mut self,
        uc: impl RestorePostUseCase + Send + Sync + 'static,
    ) -> Self {
        self.restore_post = Arc::new(uc);
        self
    }

    pub fn with_delete_post(mut self, uc: impl DeletePostUseCase + Send + Sync + 'static) -> Self {
        self.delete_post = Arc::new(uc);
        self
    }

    pub fn with_view_forum(mut self, uc: impl ViewForumUseCase + Send + Sync + 'static) -> Self {
        self.view_forum = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            topic_use_cases: crate::topics::application::topic_use_cases::TopicUseCases {
                show: self.show_topic,
                last: self.last_page,
                reply_form: self.reply_form,
                submit_reply: self.submit_reply,
                edit_form: self.edit_form,
                submit_edit: self.submit_edit,
                create_form: self.create_form,
                create: self.create_topic,
                restore: self.restore_post,
                delete: self.delete_post,
            },
            forum_use_cases: ForumUseCases {
                view: self.view_forum,
            },
        })
    }
}
