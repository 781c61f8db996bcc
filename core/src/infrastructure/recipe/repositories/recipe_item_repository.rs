use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::RecipeItem, ports::RecipeItemRepository, value_objects::UpdateRecipeItemInput,
    },
};
use crate::entity::recipe_items::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct PostgresRecipeItemRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn to_active_model(item: &RecipeItem) -> ActiveModel {
        ActiveModel {
            id: Set(item.id.clone()),
            recipe_id: Set(item.recipe_id.clone()),
            meal_type: Set(item.meal_type.clone()),
            ingredients: Set(item.ingredients.clone()),
            instructions: Set(item.instructions.clone()),
            created_at: Set(item.created_at.fixed_offset()),
        }
    }
}

impl RecipeItemRepository for PostgresRecipeItemRepository {
    async fn get_by_id(&self, item_id: &str) -> Result<Option<RecipeItem>, CoreError> {
        let item = Entity::find_by_id(item_id).one(&self.db).await.map_err(|e| {
            error!("Failed to get recipe item: {}", e);
            CoreError::Storage(e.to_string())
        })?;

        Ok(item.map(RecipeItem::from))
    }

    async fn get_by_recipe(&self, recipe_id: &str) -> Result<Vec<RecipeItem>, CoreError> {
        let items = Entity::find()
            .filter(Column::RecipeId.eq(recipe_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe items: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(items.iter().map(RecipeItem::from).collect())
    }

    async fn create(&self, item: RecipeItem) -> Result<RecipeItem, CoreError> {
        let created = Entity::insert(Self::to_active_model(&item))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create recipe item: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(RecipeItem::from(created))
    }

    async fn update(
        &self,
        item_id: &str,
        input: UpdateRecipeItemInput,
    ) -> Result<Option<RecipeItem>, CoreError> {
        let Some(model) = Entity::find_by_id(item_id).one(&self.db).await.map_err(|e| {
            error!("Failed to get recipe item: {}", e);
            CoreError::Storage(e.to_string())
        })?
        else {
            return Ok(None);
        };

        let mut item = RecipeItem::from(&model);
        item.update(input.meal_type, input.ingredients, input.instructions);

        Entity::update(Self::to_active_model(&item))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update recipe item: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        self.get_by_id(item_id).await
    }

    async fn delete(&self, item_id: &str) -> Result<bool, CoreError> {
        let result = Entity::delete_by_id(item_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe item: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(result.rows_affected > 0)
    }
}
