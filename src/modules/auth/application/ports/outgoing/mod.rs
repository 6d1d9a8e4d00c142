mod member_query;
mod token_provider;

pub use member_query::{MemberQuery, MemberQueryError, MemberSettings};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
