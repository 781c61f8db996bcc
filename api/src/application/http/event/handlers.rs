pub mod create_event;
pub mod delete_event;
pub mod get_baby_events;
pub mod update_event;
