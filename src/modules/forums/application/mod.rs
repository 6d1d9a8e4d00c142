pub mod forum_use_cases;
pub mod ports;
pub mod service;
