use crate::domain::ingredient::entities::Ingredient;
use crate::entity::ingredients::Model as IngredientModel;

impl From<&IngredientModel> for Ingredient {
    fn from(model: &IngredientModel) -> Self {
        Self {
            id: model.id.clone(),
            name: model.name.clone(),
            category: model.category.clone(),
            image_url: model.image_url.clone(),
            risk_level: model.risk_level.clone(),
            nutrients: model.nutrients.clone(),
            summary: model.summary.clone(),
            description: model.description.clone(),
            suitable_month_from: model.suitable_month_from,
            suitable_month_to: model.suitable_month_to,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<IngredientModel> for Ingredient {
    fn from(model: IngredientModel) -> Self {
        Self::from(&model)
    }
}
