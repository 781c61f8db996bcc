use crate::domain::baby::entities::Baby;
use crate::entity::babies::Model as BabyModel;

impl From<&BabyModel> for Baby {
    fn from(model: &BabyModel) -> Self {
        Self {
            id: model.id.clone(),
            family_id: model.family_id.clone(),
            nickname: model.nickname.clone(),
            gender: model.gender.clone(),
            birth_date: model.birth_date,
            avatar_url: model.avatar_url.clone(),
            // Rows written before the list existed may hold arbitrary JSON.
            avoid_ingredients: serde_json::from_value(model.avoid_ingredients.clone())
                .unwrap_or_default(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<BabyModel> for Baby {
    fn from(model: BabyModel) -> Self {
        Self::from(&model)
    }
}
