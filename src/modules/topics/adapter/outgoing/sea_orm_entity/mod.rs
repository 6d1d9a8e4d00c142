pub mod posts;
pub mod topics;
