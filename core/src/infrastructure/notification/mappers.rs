use crate::domain::notification::entities::Notification;
use crate::entity::notifications::Model as NotificationModel;

impl From<&NotificationModel> for Notification {
    fn from(model: &NotificationModel) -> Self {
        Self {
            id: model.id.clone(),
            user_id: model.user_id.clone(),
            notification_type: model.notification_type.clone(),
            title: model.title.clone(),
            message: model.message.clone(),
            is_read: model.is_read,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<NotificationModel> for Notification {
    fn from(model: NotificationModel) -> Self {
        Self::from(&model)
    }
}
