pub mod show_forum;
