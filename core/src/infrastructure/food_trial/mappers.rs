use crate::domain::food_trial::entities::FoodTrial;
use crate::entity::food_trials::Model as FoodTrialModel;

impl From<&FoodTrialModel> for FoodTrial {
    fn from(model: &FoodTrialModel) -> Self {
        Self {
            id: model.id.clone(),
            baby_id: model.baby_id.clone(),
            ingredient_id: model.ingredient_id.clone(),
            trial_date: model.trial_date,
            trial_count: model.trial_count,
            is_allergic: model.is_allergic,
            reaction_level: model.reaction_level.clone(),
            notes: model.notes.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<FoodTrialModel> for FoodTrial {
    fn from(model: FoodTrialModel) -> Self {
        Self::from(&model)
    }
}
