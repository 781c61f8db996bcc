pub mod get_count;
pub mod update_count;
