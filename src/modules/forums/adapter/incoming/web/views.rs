use askama::Template;

use crate::forums::application::ports::incoming::use_cases::ForumPage;
use crate::shared::web::paths;

/// Forum page: the forum header plus its topic listing.
#[derive(Template)]
#[template(path = "forum/show.html")]
pub struct ForumShowPage {
    pub title: String,
    pub description: String,
    pub new_topic_url: String,
    pub topics: Vec<TopicListItem>,
}

pub struct TopicListItem {
    pub title: String,
    pub url: String,
    pub last_post_url: String,
    pub views: i64,
    pub num_posts: i64,
    pub last_post_at: String,
}

impl ForumShowPage {
    pub fn from_page(page: &ForumPage) -> Self {
        let topics = page
            .topics
            .iter()
            .map(|topic| TopicListItem {
                title: topic.title.clone(),
                url: paths::topic_path(&topic.slug),
                last_post_url: paths::topic_last_path(&topic.slug),
                views: topic.views,
                num_posts: topic.num_posts,
                last_post_at: topic.last_post_at.format("%b %e, %Y %H:%M").to_string(),
            })
            .collect();

        Self {
            title: page.forum.title.clone(),
            description: page.forum.description.clone().unwrap_or_default(),
            new_topic_url: paths::topic_create_path(page.forum.id),
            topics,
        }
    }
}
