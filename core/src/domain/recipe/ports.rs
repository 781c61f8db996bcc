use std::future::Future;

use chrono::NaiveDate;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{Recipe, RecipeItem},
        value_objects::{RecipeWithItems, UpdateRecipeInput, UpdateRecipeItemInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn get_by_id(
        &self,
        recipe_id: &str,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    /// All recipes of a baby, newest date first, meals included.
    fn get_by_baby(
        &self,
        baby_id: &str,
    ) -> impl Future<Output = Result<Vec<RecipeWithItems>, CoreError>> + Send;

    fn get_by_baby_and_date(
        &self,
        baby_id: &str,
        recipe_date: NaiveDate,
    ) -> impl Future<Output = Result<Option<RecipeWithItems>, CoreError>> + Send;

    fn create(&self, recipe: Recipe) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn update(
        &self,
        recipe_id: &str,
        input: UpdateRecipeInput,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    /// Removes the recipe and its meal rows.
    fn delete(&self, recipe_id: &str) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeItemRepository: Send + Sync {
    fn get_by_id(
        &self,
        item_id: &str,
    ) -> impl Future<Output = Result<Option<RecipeItem>, CoreError>> + Send;

    fn get_by_recipe(
        &self,
        recipe_id: &str,
    ) -> impl Future<Output = Result<Vec<RecipeItem>, CoreError>> + Send;

    fn create(
        &self,
        item: RecipeItem,
    ) -> impl Future<Output = Result<RecipeItem, CoreError>> + Send;

    fn update(
        &self,
        item_id: &str,
        input: UpdateRecipeItemInput,
    ) -> impl Future<Output = Result<Option<RecipeItem>, CoreError>> + Send;

    fn delete(&self, item_id: &str) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
