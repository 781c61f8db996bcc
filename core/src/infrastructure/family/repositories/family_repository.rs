use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait,
};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    family::{
        entities::{Family, FamilyMember},
        ports::FamilyRepository,
        value_objects::UpdateFamilyInput,
    },
};
use crate::entity::{
    families::{ActiveModel, Column, Entity},
    family_members::{
        ActiveModel as MemberActiveModel, Column as MemberColumn, Entity as MemberEntity,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresFamilyRepository {
    pub db: DatabaseConnection,
}

impl PostgresFamilyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl FamilyRepository for PostgresFamilyRepository {
    async fn get_by_id(&self, family_id: &str) -> Result<Option<Family>, CoreError> {
        let family = Entity::find_by_id(family_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get family: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(family.map(Family::from))
    }

    async fn get_by_user(&self, user_id: &str) -> Result<Vec<Family>, CoreError> {
        let memberships = MemberEntity::find()
            .filter(MemberColumn::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get family memberships: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        let family_ids: Vec<String> = memberships.into_iter().map(|m| m.family_id).collect();
        if family_ids.is_empty() {
            return Ok(Vec::new());
        }

        let families = Entity::find()
            .filter(Column::Id.is_in(family_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get families: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(families.iter().map(Family::from).collect())
    }

    async fn create_with_admin(
        &self,
        family: Family,
        admin: FamilyMember,
    ) -> Result<Family, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::Storage(e.to_string())
        })?;

        let active_model = ActiveModel {
            id: Set(family.id.clone()),
            name: Set(family.name.clone()),
            created_by: Set(family.created_by.clone()),
            created_at: Set(family.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&txn)
            .await
            .map_err(|e| {
                error!("Failed to create family: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        let member_model = MemberActiveModel {
            family_id: Set(admin.family_id.clone()),
            user_id: Set(admin.user_id.clone()),
            role: Set(admin.role.clone()),
            joined_at: Set(admin.joined_at.fixed_offset()),
        };

        MemberEntity::insert(member_model)
            .exec_without_returning(&txn)
            .await
            .map_err(|e| {
                error!("Failed to create admin membership: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit family creation: {}", e);
            CoreError::Storage(e.to_string())
        })?;

        Ok(Family::from(created))
    }

    async fn update(
        &self,
        family_id: &str,
        input: UpdateFamilyInput,
    ) -> Result<Option<Family>, CoreError> {
        let Some(model) = Entity::find_by_id(family_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get family: {}", e);
                CoreError::Storage(e.to_string())
            })?
        else {
            return Ok(None);
        };

        let mut family = Family::from(&model);
        family.update(input.name);

        let active_model = ActiveModel {
            id: Set(family.id.clone()),
            name: Set(family.name.clone()),
            created_by: Set(family.created_by.clone()),
            created_at: Set(family.created_at.fixed_offset()),
        };

        Entity::update(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update family: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        self.get_by_id(family_id).await
    }

    async fn delete(&self, family_id: &str) -> Result<bool, CoreError> {
        // Memberships go with the family so no orphan rows remain.
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::Storage(e.to_string())
        })?;

        MemberEntity::delete_many()
            .filter(MemberColumn::FamilyId.eq(family_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete family memberships: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        let result = Entity::delete_by_id(family_id)
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete family: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit family deletion: {}", e);
            CoreError::Storage(e.to_string())
        })?;

        Ok(result.rows_affected > 0)
    }
}
