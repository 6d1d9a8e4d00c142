pub mod current_member;
