pub mod pages;
pub mod paths;
