use crate::auth::application::domain::entities::MemberId;
use crate::auth::application::ports::outgoing::{MemberQuery, MemberQueryError};

/// Board-wide default, applied to guests and to members who never set
/// a preference.
pub const DEFAULT_POSTS_PER_PAGE: i64 = 10;

/// Page a topic's tail lands on: ceil(num_posts / posts_per_page).
///
/// An empty topic still has a page 1.
pub fn last_page(num_posts: i64, posts_per_page: i64) -> u64 {
    if num_posts <= 0 || posts_per_page <= 0 {
        return 1;
    }

    ((num_posts + posts_per_page - 1) / posts_per_page) as u64
}

/// Posts-per-page for this request.
///
/// Signed-in members use their own setting; everyone else gets the
/// board default. A token can outlive its member row, so a missing
/// member also falls back to the default instead of failing the
/// request.
pub async fn effective_posts_per_page<M>(
    members: &M,
    viewer: Option<MemberId>,
) -> Result<i64, MemberQueryError>
where
    M: MemberQuery + Sync,
{
    let member_id = match viewer {
        Some(member_id) => member_id,
        None => return Ok(DEFAULT_POSTS_PER_PAGE),
    };

    match members.find_settings(member_id).await {
        Ok(settings) => {
            let ppp = settings
                .posts_per_page
                .map(i64::from)
                .unwrap_or(DEFAULT_POSTS_PER_PAGE);
            if ppp <= 0 {
                Ok(DEFAULT_POSTS_PER_PAGE)
            } else {
                Ok(ppp)
            }
        }
        Err(MemberQueryError::NotFound) => Ok(DEFAULT_POSTS_PER_PAGE),
        Err(e) => Err(e),
    }
}
