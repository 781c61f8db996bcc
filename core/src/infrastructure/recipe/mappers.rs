use crate::domain::recipe::entities::{Recipe, RecipeItem};
use crate::entity::{recipe_items::Model as RecipeItemModel, recipes::Model as RecipeModel};

impl From<&RecipeModel> for Recipe {
    fn from(model: &RecipeModel) -> Self {
        Self {
            id: model.id.clone(),
            baby_id: model.baby_id.clone(),
            recipe_date: model.recipe_date,
            created_by: model.created_by.clone(),
            notes: model.notes.clone(),
            auto_generated: model.auto_generated,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<RecipeModel> for Recipe {
    fn from(model: RecipeModel) -> Self {
        Self::from(&model)
    }
}

impl From<&RecipeItemModel> for RecipeItem {
    fn from(model: &RecipeItemModel) -> Self {
        Self {
            id: model.id.clone(),
            recipe_id: model.recipe_id.clone(),
            meal_type: model.meal_type.clone(),
            ingredients: model.ingredients.clone(),
            instructions: model.instructions.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<RecipeItemModel> for RecipeItem {
    fn from(model: RecipeItemModel) -> Self {
        Self::from(&model)
    }
}
