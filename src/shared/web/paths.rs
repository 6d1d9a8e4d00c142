//! Route templates live here so redirects and rendered links always
//! agree on the URL shapes.

use uuid::Uuid;

pub fn forum_path(slug: &str) -> String {
    format!("/forums/{}", slug)
}

pub fn topic_path(slug: &str) -> String {
    format!("/topics/{}", slug)
}

pub fn topic_last_path(slug: &str) -> String {
    format!("/topics/{}/last", slug)
}

pub fn topic_reply_path(slug: &str) -> String {
    format!("/topics/{}/reply", slug)
}

pub fn topic_edit_path(slug: &str, post_id: Uuid) -> String {
    format!("/topics/{}/edit/{}", slug, post_id)
}

pub fn topic_delete_path(slug: &str, post_id: Uuid) -> String {
    format!("/topics/{}/delete/{}", slug, post_id)
}

pub fn topic_restore_path(slug: &str, post_id: Uuid) -> String {
    format!("/topics/{}/restore/{}", slug, post_id)
}

pub fn topic_create_path(forum_id: Uuid) -> String {
    format!("/topics/create/{}", forum_id)
}

/// Link to a post within its topic.
///
/// Page 1 is the topic root; deeper pages carry an explicit `page`
/// query parameter. The post id becomes a fragment anchor either way.
pub fn topic_post_path(slug: &str, page: u64, post_id: Uuid) -> String {
    if page <= 1 {
        format!("/topics/{}#post-{}", slug, post_id)
    } else {
        format!("/topics/{}?page={}#post-{}", slug, page, post_id)
    }
}

/// Link to a topic page without a post anchor.
pub fn topic_page_path(slug: &str, page: u64) -> String {
    if page <= 1 {
        topic_path(slug)
    } else {
        format!("/topics/{}?page={}", slug, page)
    }
}
