use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::{generate_id, generate_timestamp};

/// In-app message for one user, e.g. a family invite or a trial reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub notification_type: String,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NotificationConfig {
    pub user_id: String,
    pub notification_type: String,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn new(config: NotificationConfig) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id: generate_id(),
            user_id: config.user_id,
            notification_type: config.notification_type,
            title: config.title,
            message: config.message,
            is_read: false,
            created_at: now,
        }
    }

    pub fn mark_read(&mut self) {
        self.is_read = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifications_start_unread() {
        let mut notification = Notification::new(NotificationConfig {
            user_id: "user-1".to_string(),
            notification_type: "family_invite".to_string(),
            title: "邀请".to_string(),
            message: "加入豆豆的家庭".to_string(),
        });

        assert!(!notification.is_read);
        notification.mark_read();
        assert!(notification.is_read);
    }
}
