use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{Recipe, RecipeItem},
        ports::RecipeRepository,
        value_objects::{RecipeWithItems, UpdateRecipeInput},
    },
};
use crate::entity::{
    recipe_items::{Column as ItemColumn, Entity as ItemEntity},
    recipes::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn to_active_model(recipe: &Recipe) -> ActiveModel {
        ActiveModel {
            id: Set(recipe.id.clone()),
            baby_id: Set(recipe.baby_id.clone()),
            recipe_date: Set(recipe.recipe_date),
            created_by: Set(recipe.created_by.clone()),
            notes: Set(recipe.notes.clone()),
            auto_generated: Set(recipe.auto_generated),
            created_at: Set(recipe.created_at.fixed_offset()),
        }
    }

    async fn load_items(&self, recipe_id: &str) -> Result<Vec<RecipeItem>, CoreError> {
        let items = ItemEntity::find()
            .filter(ItemColumn::RecipeId.eq(recipe_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load recipe items: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(items.iter().map(RecipeItem::from).collect())
    }
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn get_by_id(&self, recipe_id: &str) -> Result<Option<Recipe>, CoreError> {
        let recipe = Entity::find_by_id(recipe_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(recipe.map(Recipe::from))
    }

    async fn get_by_baby(&self, baby_id: &str) -> Result<Vec<RecipeWithItems>, CoreError> {
        let recipes = Entity::find()
            .filter(Column::BabyId.eq(baby_id))
            .order_by_desc(Column::RecipeDate)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipes: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        let recipe_ids: Vec<String> = recipes.iter().map(|r| r.id.clone()).collect();
        let all_items = if recipe_ids.is_empty() {
            Vec::new()
        } else {
            ItemEntity::find()
                .filter(ItemColumn::RecipeId.is_in(recipe_ids))
                .all(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to load recipe items: {}", e);
                    CoreError::Storage(e.to_string())
                })?
        };

        let mut items_map: HashMap<String, Vec<RecipeItem>> = HashMap::new();
        for item in &all_items {
            items_map
                .entry(item.recipe_id.clone())
                .or_default()
                .push(RecipeItem::from(item));
        }

        let result = recipes
            .iter()
            .map(|model| {
                let recipe = Recipe::from(model);
                let items = items_map.remove(&recipe.id).unwrap_or_default();
                RecipeWithItems { recipe, items }
            })
            .collect();

        Ok(result)
    }

    async fn get_by_baby_and_date(
        &self,
        baby_id: &str,
        recipe_date: NaiveDate,
    ) -> Result<Option<RecipeWithItems>, CoreError> {
        let recipe = Entity::find()
            .filter(Column::BabyId.eq(baby_id))
            .filter(Column::RecipeDate.eq(recipe_date))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe by date: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        let Some(model) = recipe else {
            return Ok(None);
        };

        let items = self.load_items(&model.id).await?;

        Ok(Some(RecipeWithItems {
            recipe: Recipe::from(model),
            items,
        }))
    }

    async fn create(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let created = Entity::insert(Self::to_active_model(&recipe))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create recipe: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(Recipe::from(created))
    }

    async fn update(
        &self,
        recipe_id: &str,
        input: UpdateRecipeInput,
    ) -> Result<Option<Recipe>, CoreError> {
        let Some(model) = Entity::find_by_id(recipe_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe: {}", e);
                CoreError::Storage(e.to_string())
            })?
        else {
            return Ok(None);
        };

        let mut recipe = Recipe::from(&model);
        recipe.update(input.notes, input.auto_generated);

        Entity::update(Self::to_active_model(&recipe))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update recipe: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        self.get_by_id(recipe_id).await
    }

    async fn delete(&self, recipe_id: &str) -> Result<bool, CoreError> {
        // Meal rows go with the recipe.
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::Storage(e.to_string())
        })?;

        ItemEntity::delete_many()
            .filter(ItemColumn::RecipeId.eq(recipe_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe items: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        let result = Entity::delete_by_id(recipe_id)
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit recipe deletion: {}", e);
            CoreError::Storage(e.to_string())
        })?;

        Ok(result.rows_affected > 0)
    }
}
