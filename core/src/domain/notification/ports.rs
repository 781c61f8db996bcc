use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, notification::entities::Notification};

#[cfg_attr(test, mockall::automock)]
pub trait NotificationRepository: Send + Sync {
    fn get_by_id(
        &self,
        notification_id: &str,
    ) -> impl Future<Output = Result<Option<Notification>, CoreError>> + Send;

    /// A user's notifications, newest first, optionally narrowed to
    /// read or unread ones.
    fn get_by_user(
        &self,
        user_id: &str,
        is_read: Option<bool>,
    ) -> impl Future<Output = Result<Vec<Notification>, CoreError>> + Send;

    fn create(
        &self,
        notification: Notification,
    ) -> impl Future<Output = Result<Notification, CoreError>> + Send;

    fn mark_read(
        &self,
        notification_id: &str,
    ) -> impl Future<Output = Result<Option<Notification>, CoreError>> + Send;

    /// Marks every notification of the user read, returning how many
    /// rows changed.
    fn mark_all_read(&self, user_id: &str)
    -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn delete(
        &self,
        notification_id: &str,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
