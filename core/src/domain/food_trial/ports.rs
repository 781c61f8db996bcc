use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_trial::{entities::FoodTrial, value_objects::UpdateFoodTrialInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait FoodTrialRepository: Send + Sync {
    fn get_by_id(
        &self,
        trial_id: &str,
    ) -> impl Future<Output = Result<Option<FoodTrial>, CoreError>> + Send;

    fn get_by_baby(
        &self,
        baby_id: &str,
    ) -> impl Future<Output = Result<Vec<FoodTrial>, CoreError>> + Send;

    fn create(
        &self,
        trial: FoodTrial,
    ) -> impl Future<Output = Result<FoodTrial, CoreError>> + Send;

    fn update(
        &self,
        trial_id: &str,
        input: UpdateFoodTrialInput,
    ) -> impl Future<Output = Result<Option<FoodTrial>, CoreError>> + Send;

    fn delete(&self, trial_id: &str) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
