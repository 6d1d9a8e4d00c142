pub mod domain;
pub mod ports;
pub mod service;
pub mod topic_use_cases;
