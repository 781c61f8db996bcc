use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{entities::User, ports::UserRepository, value_objects::UpdateUserInput},
};
use crate::entity::users::{ActiveModel, Entity};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserRepository for PostgresUserRepository {
    async fn get_by_id(&self, user_id: &str) -> Result<Option<User>, CoreError> {
        let user = Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(user.map(User::from))
    }

    async fn create(&self, user: User) -> Result<User, CoreError> {
        let active_model = ActiveModel {
            id: Set(user.id.clone()),
            nickname: Set(user.nickname.clone()),
            avatar_url: Set(user.avatar_url.clone()),
            created_at: Set(user.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create user: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(User::from(created))
    }

    async fn update(&self, user_id: &str, input: UpdateUserInput) -> Result<Option<User>, CoreError> {
        let Some(model) = Entity::find_by_id(user_id).one(&self.db).await.map_err(|e| {
            error!("Failed to get user: {}", e);
            CoreError::Storage(e.to_string())
        })?
        else {
            return Ok(None);
        };

        let mut user = User::from(&model);
        user.update(input.nickname, input.avatar_url);

        let active_model = ActiveModel {
            id: Set(user.id.clone()),
            nickname: Set(user.nickname.clone()),
            avatar_url: Set(user.avatar_url.clone()),
            created_at: Set(user.created_at.fixed_offset()),
        };

        Entity::update(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update user: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        self.get_by_id(user_id).await
    }

    async fn delete(&self, user_id: &str) -> Result<bool, CoreError> {
        let result = Entity::delete_by_id(user_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete user: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(result.rows_affected > 0)
    }
}
