use crate::domain::user::entities::User;
use crate::entity::users::Model as UserModel;

impl From<&UserModel> for User {
    fn from(model: &UserModel) -> Self {
        Self {
            id: model.id.clone(),
            nickname: model.nickname.clone(),
            avatar_url: model.avatar_url.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        Self::from(&model)
    }
}
