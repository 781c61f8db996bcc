use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::Ingredient,
        value_objects::{ListIngredientsFilter, UpdateIngredientInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait IngredientRepository: Send + Sync {
    fn get_by_id(
        &self,
        ingredient_id: &str,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    /// Page of the catalog plus the total row count for the filter.
    fn list(
        &self,
        filter: ListIngredientsFilter,
    ) -> impl Future<Output = Result<(Vec<Ingredient>, u64), CoreError>> + Send;

    fn create(
        &self,
        ingredient: Ingredient,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn update(
        &self,
        ingredient_id: &str,
        input: UpdateIngredientInput,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    fn delete(
        &self,
        ingredient_id: &str,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
