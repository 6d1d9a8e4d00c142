use askama::Template;

use crate::forums::application::ports::outgoing::ForumRecord;
use crate::shared::web::paths;
use crate::topics::application::ports::incoming::use_cases::{EditFormData, TopicPage};
use crate::topics::application::ports::outgoing::{PostRecord, TopicRecord};

const POSTED_AT_FORMAT: &str = "%b %e, %Y %H:%M";

/// Topic page: header plus every post in reply order. Deleted posts
/// render greyed out with a restore control instead of their text.
#[derive(Template)]
#[template(path = "topic/show.html")]
pub struct TopicShowPage {
    pub title: String,
    pub views: i64,
    pub num_posts: i64,
    pub reply_url: String,
    pub posts: Vec<PostView>,
}

pub struct PostView {
    pub anchor: String,
    pub author_name: String,
    pub posted_at: String,
    pub content: String,
    pub is_deleted: bool,
    pub edit_url: String,
    pub delete_url: String,
    pub restore_url: String,
}

impl TopicShowPage {
    pub fn from_page(page: &TopicPage) -> Self {
        let slug = &page.topic.slug;
        let posts = page
            .posts
            .iter()
            .map(|post| PostView::from_record(slug, post))
            .collect();

        Self {
            title: page.topic.title.clone(),
            views: page.topic.views,
            num_posts: page.topic.num_posts,
            reply_url: paths::topic_reply_path(slug),
            posts,
        }
    }
}

impl PostView {
    fn from_record(slug: &str, post: &PostRecord) -> Self {
        Self {
            anchor: format!("post-{}", post.id),
            author_name: post.author_name.clone(),
            posted_at: post.created_at.format(POSTED_AT_FORMAT).to_string(),
            content: post.content.clone(),
            is_deleted: post.is_deleted(),
            edit_url: paths::topic_edit_path(slug, post.id),
            delete_url: paths::topic_delete_path(slug, post.id),
            restore_url: paths::topic_restore_path(slug, post.id),
        }
    }
}

/// Reply composer for an existing topic.
#[derive(Template)]
#[template(path = "topic/reply.html")]
pub struct ReplyFormPage {
    pub topic_title: String,
    pub action_url: String,
    pub cancel_url: String,
}

impl ReplyFormPage {
    pub fn for_topic(topic: &TopicRecord) -> Self {
        Self {
            topic_title: topic.title.clone(),
            action_url: paths::topic_reply_path(&topic.slug),
            cancel_url: paths::topic_path(&topic.slug),
        }
    }
}

/// Post editor. Editing the opening post also exposes the topic title
/// for renaming.
#[derive(Template)]
#[template(path = "topic/edit.html")]
pub struct EditFormPage {
    pub topic_title: String,
    pub action_url: String,
    pub cancel_url: String,
    pub content: String,
    pub is_first_post: bool,
}

impl EditFormPage {
    pub fn from_data(data: &EditFormData) -> Self {
        Self {
            topic_title: data.topic.title.clone(),
            action_url: paths::topic_edit_path(&data.topic.slug, data.post.id),
            cancel_url: paths::topic_path(&data.topic.slug),
            content: data.post.content.clone(),
            is_first_post: data.is_first_post,
        }
    }
}

/// New-topic composer inside a forum.
#[derive(Template)]
#[template(path = "topic/create.html")]
pub struct CreateFormPage {
    pub forum_title: String,
    pub action_url: String,
    pub cancel_url: String,
}

impl CreateFormPage {
    pub fn for_forum(forum: &ForumRecord) -> Self {
        Self {
            forum_title: forum.title.clone(),
            action_url: paths::topic_create_path(forum.id),
            cancel_url: paths::forum_path(&forum.slug),
        }
    }
}
