pub mod pagination;
pub mod slug;
