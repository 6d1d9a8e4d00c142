pub mod auth;
pub mod forums;
pub mod topics;
