pub mod create_notification;
pub mod delete_notification;
pub mod get_user_notifications;
pub mod mark_all_notifications_read;
pub mod mark_notification_read;
