pub mod add_member;
pub mod create_family;
pub mod delete_family;
pub mod get_family;
pub mod get_members;
pub mod get_user_families;
pub mod remove_member;
pub mod update_family;
