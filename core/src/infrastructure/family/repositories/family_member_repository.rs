use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    family::{entities::FamilyMember, ports::FamilyMemberRepository},
};
use crate::entity::family_members::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct PostgresFamilyMemberRepository {
    pub db: DatabaseConnection,
}

impl PostgresFamilyMemberRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl FamilyMemberRepository for PostgresFamilyMemberRepository {
    async fn get_by_family(&self, family_id: &str) -> Result<Vec<FamilyMember>, CoreError> {
        let members = Entity::find()
            .filter(Column::FamilyId.eq(family_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get family members: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(members.iter().map(FamilyMember::from).collect())
    }

    async fn get_member(
        &self,
        family_id: &str,
        user_id: &str,
    ) -> Result<Option<FamilyMember>, CoreError> {
        let member = Entity::find_by_id((family_id.to_string(), user_id.to_string()))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get family member: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(member.map(FamilyMember::from))
    }

    async fn create(&self, member: FamilyMember) -> Result<FamilyMember, CoreError> {
        let active_model = ActiveModel {
            family_id: Set(member.family_id.clone()),
            user_id: Set(member.user_id.clone()),
            role: Set(member.role.clone()),
            joined_at: Set(member.joined_at.fixed_offset()),
        };

        Entity::insert(active_model)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create family member: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(member)
    }

    async fn delete(&self, family_id: &str, user_id: &str) -> Result<bool, CoreError> {
        let result = Entity::delete_by_id((family_id.to_string(), user_id.to_string()))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete family member: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(result.rows_affected > 0)
    }
}
