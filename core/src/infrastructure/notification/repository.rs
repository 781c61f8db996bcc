use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    sea_query::Expr,
};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    notification::{entities::Notification, ports::NotificationRepository},
};
use crate::entity::notifications::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct PostgresNotificationRepository {
    pub db: DatabaseConnection,
}

impl PostgresNotificationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn to_active_model(notification: &Notification) -> ActiveModel {
        ActiveModel {
            id: Set(notification.id.clone()),
            user_id: Set(notification.user_id.clone()),
            notification_type: Set(notification.notification_type.clone()),
            title: Set(notification.title.clone()),
            message: Set(notification.message.clone()),
            is_read: Set(notification.is_read),
            created_at: Set(notification.created_at.fixed_offset()),
        }
    }
}

impl NotificationRepository for PostgresNotificationRepository {
    async fn get_by_id(&self, notification_id: &str) -> Result<Option<Notification>, CoreError> {
        let notification = Entity::find_by_id(notification_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get notification: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(notification.map(Notification::from))
    }

    async fn get_by_user(
        &self,
        user_id: &str,
        is_read: Option<bool>,
    ) -> Result<Vec<Notification>, CoreError> {
        let mut query = Entity::find().filter(Column::UserId.eq(user_id));

        if let Some(is_read) = is_read {
            query = query.filter(Column::IsRead.eq(is_read));
        }

        let notifications = query
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get notifications: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(notifications.iter().map(Notification::from).collect())
    }

    async fn create(&self, notification: Notification) -> Result<Notification, CoreError> {
        let created = Entity::insert(Self::to_active_model(&notification))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create notification: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(Notification::from(created))
    }

    async fn mark_read(&self, notification_id: &str) -> Result<Option<Notification>, CoreError> {
        let Some(model) = Entity::find_by_id(notification_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get notification: {}", e);
                CoreError::Storage(e.to_string())
            })?
        else {
            return Ok(None);
        };

        let mut notification = Notification::from(&model);
        notification.mark_read();

        Entity::update(Self::to_active_model(&notification))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to mark notification read: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        self.get_by_id(notification_id).await
    }

    async fn mark_all_read(&self, user_id: &str) -> Result<u64, CoreError> {
        let result = Entity::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::IsRead.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to mark notifications read: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(result.rows_affected)
    }

    async fn delete(&self, notification_id: &str) -> Result<bool, CoreError> {
        let result = Entity::delete_by_id(notification_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete notification: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(result.rows_affected > 0)
    }
}
