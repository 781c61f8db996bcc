use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_trial::{
        entities::FoodTrial, ports::FoodTrialRepository, value_objects::UpdateFoodTrialInput,
    },
};
use crate::entity::food_trials::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct PostgresFoodTrialRepository {
    pub db: DatabaseConnection,
}

impl PostgresFoodTrialRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn to_active_model(trial: &FoodTrial) -> ActiveModel {
        ActiveModel {
            id: Set(trial.id.clone()),
            baby_id: Set(trial.baby_id.clone()),
            ingredient_id: Set(trial.ingredient_id.clone()),
            trial_date: Set(trial.trial_date),
            trial_count: Set(trial.trial_count),
            is_allergic: Set(trial.is_allergic),
            reaction_level: Set(trial.reaction_level.clone()),
            notes: Set(trial.notes.clone()),
            created_at: Set(trial.created_at.fixed_offset()),
        }
    }
}

impl FoodTrialRepository for PostgresFoodTrialRepository {
    async fn get_by_id(&self, trial_id: &str) -> Result<Option<FoodTrial>, CoreError> {
        let trial = Entity::find_by_id(trial_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get food trial: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(trial.map(FoodTrial::from))
    }

    async fn get_by_baby(&self, baby_id: &str) -> Result<Vec<FoodTrial>, CoreError> {
        let trials = Entity::find()
            .filter(Column::BabyId.eq(baby_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get food trials: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(trials.iter().map(FoodTrial::from).collect())
    }

    async fn create(&self, trial: FoodTrial) -> Result<FoodTrial, CoreError> {
        let created = Entity::insert(Self::to_active_model(&trial))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create food trial: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(FoodTrial::from(created))
    }

    async fn update(
        &self,
        trial_id: &str,
        input: UpdateFoodTrialInput,
    ) -> Result<Option<FoodTrial>, CoreError> {
        let Some(model) = Entity::find_by_id(trial_id).one(&self.db).await.map_err(|e| {
            error!("Failed to get food trial: {}", e);
            CoreError::Storage(e.to_string())
        })?
        else {
            return Ok(None);
        };

        let mut trial = FoodTrial::from(&model);
        trial.update(
            input.trial_date,
            input.trial_count,
            input.is_allergic,
            input.reaction_level,
            input.notes,
        );

        Entity::update(Self::to_active_model(&trial))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update food trial: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        self.get_by_id(trial_id).await
    }

    async fn delete(&self, trial_id: &str) -> Result<bool, CoreError> {
        let result = Entity::delete_by_id(trial_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete food trial: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(result.rows_affected > 0)
    }
}
