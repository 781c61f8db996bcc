use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect,
};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::Ingredient,
        ports::IngredientRepository,
        value_objects::{ListIngredientsFilter, UpdateIngredientInput},
    },
};
use crate::entity::ingredients::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct PostgresIngredientRepository {
    pub db: DatabaseConnection,
}

impl PostgresIngredientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn to_active_model(ingredient: &Ingredient) -> ActiveModel {
        ActiveModel {
            id: Set(ingredient.id.clone()),
            name: Set(ingredient.name.clone()),
            category: Set(ingredient.category.clone()),
            image_url: Set(ingredient.image_url.clone()),
            risk_level: Set(ingredient.risk_level.clone()),
            nutrients: Set(ingredient.nutrients.clone()),
            summary: Set(ingredient.summary.clone()),
            description: Set(ingredient.description.clone()),
            suitable_month_from: Set(ingredient.suitable_month_from),
            suitable_month_to: Set(ingredient.suitable_month_to),
            created_at: Set(ingredient.created_at.fixed_offset()),
            updated_at: Set(ingredient.updated_at.fixed_offset()),
        }
    }
}

impl IngredientRepository for PostgresIngredientRepository {
    async fn get_by_id(&self, ingredient_id: &str) -> Result<Option<Ingredient>, CoreError> {
        let ingredient = Entity::find_by_id(ingredient_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredient: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(ingredient.map(Ingredient::from))
    }

    async fn list(
        &self,
        filter: ListIngredientsFilter,
    ) -> Result<(Vec<Ingredient>, u64), CoreError> {
        let mut query = Entity::find();

        if let Some(ref category) = filter.category {
            query = query.filter(Column::Category.eq(category.clone()));
        }

        let total = query.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count ingredients: {}", e);
            CoreError::Storage(e.to_string())
        })?;

        let page = filter.page.max(1);
        let models = query
            .offset((page - 1) * filter.page_size)
            .limit(filter.page_size)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list ingredients: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok((models.iter().map(Ingredient::from).collect(), total))
    }

    async fn create(&self, ingredient: Ingredient) -> Result<Ingredient, CoreError> {
        let created = Entity::insert(Self::to_active_model(&ingredient))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create ingredient: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(Ingredient::from(created))
    }

    async fn update(
        &self,
        ingredient_id: &str,
        input: UpdateIngredientInput,
    ) -> Result<Option<Ingredient>, CoreError> {
        let Some(model) = Entity::find_by_id(ingredient_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredient: {}", e);
                CoreError::Storage(e.to_string())
            })?
        else {
            return Ok(None);
        };

        let mut ingredient = Ingredient::from(&model);
        ingredient.update(
            input.name,
            input.category,
            input.image_url,
            input.risk_level,
            input.nutrients,
            input.summary,
            input.description,
            input.suitable_month_from,
            input.suitable_month_to,
        );

        Entity::update(Self::to_active_model(&ingredient))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update ingredient: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        self.get_by_id(ingredient_id).await
    }

    async fn delete(&self, ingredient_id: &str) -> Result<bool, CoreError> {
        let result = Entity::delete_by_id(ingredient_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete ingredient: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(result.rows_affected > 0)
    }
}
