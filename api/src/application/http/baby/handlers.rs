pub mod create_baby;
pub mod delete_baby;
pub mod get_baby;
pub mod get_family_babies;
pub mod update_baby;
