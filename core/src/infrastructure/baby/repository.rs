use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait,
};
use tracing::error;

use crate::domain::{
    baby::{entities::Baby, ports::BabyRepository, value_objects::UpdateBabyInput},
    common::entities::app_errors::CoreError,
    family::entities::{Family, FamilyMember},
};
use crate::entity::{
    babies::{ActiveModel, Column, Entity},
    families::ActiveModel as FamilyActiveModel,
    family_members::ActiveModel as MemberActiveModel,
};

#[derive(Debug, Clone)]
pub struct PostgresBabyRepository {
    pub db: DatabaseConnection,
}

impl PostgresBabyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn to_active_model(baby: &Baby) -> ActiveModel {
        ActiveModel {
            id: Set(baby.id.clone()),
            family_id: Set(baby.family_id.clone()),
            nickname: Set(baby.nickname.clone()),
            gender: Set(baby.gender.clone()),
            birth_date: Set(baby.birth_date),
            avatar_url: Set(baby.avatar_url.clone()),
            avoid_ingredients: Set(serde_json::to_value(&baby.avoid_ingredients)
                .unwrap_or_default()),
            created_at: Set(baby.created_at.fixed_offset()),
        }
    }
}

impl BabyRepository for PostgresBabyRepository {
    async fn get_by_id(&self, baby_id: &str) -> Result<Option<Baby>, CoreError> {
        let baby = Entity::find_by_id(baby_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get baby: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(baby.map(Baby::from))
    }

    async fn get_by_family(&self, family_id: &str) -> Result<Vec<Baby>, CoreError> {
        let babies = Entity::find()
            .filter(Column::FamilyId.eq(family_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get babies: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(babies.iter().map(Baby::from).collect())
    }

    async fn create(&self, baby: Baby) -> Result<Baby, CoreError> {
        let created = Entity::insert(Self::to_active_model(&baby))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create baby: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(Baby::from(created))
    }

    async fn create_with_new_family(
        &self,
        baby: Baby,
        family: Family,
        admin: FamilyMember,
    ) -> Result<Baby, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::Storage(e.to_string())
        })?;

        let family_model = FamilyActiveModel {
            id: Set(family.id.clone()),
            name: Set(family.name.clone()),
            created_by: Set(family.created_by.clone()),
            created_at: Set(family.created_at.fixed_offset()),
        };

        crate::entity::families::Entity::insert(family_model)
            .exec_without_returning(&txn)
            .await
            .map_err(|e| {
                error!("Failed to create family for baby: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        let member_model = MemberActiveModel {
            family_id: Set(admin.family_id.clone()),
            user_id: Set(admin.user_id.clone()),
            role: Set(admin.role.clone()),
            joined_at: Set(admin.joined_at.fixed_offset()),
        };

        crate::entity::family_members::Entity::insert(member_model)
            .exec_without_returning(&txn)
            .await
            .map_err(|e| {
                error!("Failed to create admin membership: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        let created = Entity::insert(Self::to_active_model(&baby))
            .exec_with_returning(&txn)
            .await
            .map_err(|e| {
                error!("Failed to create baby: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit baby registration: {}", e);
            CoreError::Storage(e.to_string())
        })?;

        Ok(Baby::from(created))
    }

    async fn update(&self, baby_id: &str, input: UpdateBabyInput) -> Result<Option<Baby>, CoreError> {
        let Some(model) = Entity::find_by_id(baby_id).one(&self.db).await.map_err(|e| {
            error!("Failed to get baby: {}", e);
            CoreError::Storage(e.to_string())
        })?
        else {
            return Ok(None);
        };

        let mut baby = Baby::from(&model);
        baby.update(
            input.nickname,
            input.gender,
            input.birth_date,
            input.avatar_url,
            input.avoid_ingredients,
        );

        Entity::update(Self::to_active_model(&baby))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update baby: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        self.get_by_id(baby_id).await
    }

    async fn delete(&self, baby_id: &str) -> Result<bool, CoreError> {
        let result = Entity::delete_by_id(baby_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete baby: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(result.rows_affected > 0)
    }
}
