use std::sync::Arc;

use firstbites_core::domain::{auth::LoginService, baby::services::BabyService};
use firstbites_core::infrastructure::{
    baby::repository::PostgresBabyRepository,
    counter::repository::PostgresCounterRepository,
    event::repository::PostgresEventRepository,
    family::repositories::{
        family_member_repository::PostgresFamilyMemberRepository,
        family_repository::PostgresFamilyRepository,
    },
    food_trial::repository::PostgresFoodTrialRepository,
    ingredient::repository::PostgresIngredientRepository,
    notification::repository::PostgresNotificationRepository,
    recipe::repositories::{
        recipe_item_repository::PostgresRecipeItemRepository,
        recipe_repository::PostgresRecipeRepository,
    },
    user::repository::PostgresUserRepository,
    wechat::client::HttpWechatClient,
};
use sea_orm::DatabaseConnection;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub user_repository: Arc<PostgresUserRepository>,
    pub family_repository: Arc<PostgresFamilyRepository>,
    pub member_repository: Arc<PostgresFamilyMemberRepository>,
    pub baby_repository: Arc<PostgresBabyRepository>,
    pub ingredient_repository: Arc<PostgresIngredientRepository>,
    pub food_trial_repository: Arc<PostgresFoodTrialRepository>,
    pub recipe_repository: Arc<PostgresRecipeRepository>,
    pub recipe_item_repository: Arc<PostgresRecipeItemRepository>,
    pub event_repository: Arc<PostgresEventRepository>,
    pub notification_repository: Arc<PostgresNotificationRepository>,
    pub counter_repository: Arc<PostgresCounterRepository>,
    pub login_service: Arc<LoginService<HttpWechatClient, PostgresUserRepository>>,
    pub baby_service: Arc<BabyService<PostgresBabyRepository, PostgresFamilyRepository>>,
}

impl AppState {
    /// Wires every repository and service onto one connection. Tests
    /// hand in a `sea_orm::MockDatabase` connection and a stubbed
    /// WeChat client.
    pub fn new(args: Arc<Args>, db: DatabaseConnection, wechat_client: HttpWechatClient) -> Self {
        let user_repository = PostgresUserRepository::new(db.clone());
        let family_repository = PostgresFamilyRepository::new(db.clone());
        let baby_repository = PostgresBabyRepository::new(db.clone());

        let login_service = LoginService::new(wechat_client, user_repository.clone());
        let baby_service = BabyService::new(baby_repository.clone(), family_repository.clone());

        Self {
            args,
            user_repository: Arc::new(user_repository),
            family_repository: Arc::new(family_repository),
            member_repository: Arc::new(PostgresFamilyMemberRepository::new(db.clone())),
            baby_repository: Arc::new(baby_repository),
            ingredient_repository: Arc::new(PostgresIngredientRepository::new(db.clone())),
            food_trial_repository: Arc::new(PostgresFoodTrialRepository::new(db.clone())),
            recipe_repository: Arc::new(PostgresRecipeRepository::new(db.clone())),
            recipe_item_repository: Arc::new(PostgresRecipeItemRepository::new(db.clone())),
            event_repository: Arc::new(PostgresEventRepository::new(db.clone())),
            notification_repository: Arc::new(PostgresNotificationRepository::new(db.clone())),
            counter_repository: Arc::new(PostgresCounterRepository::new(db)),
            login_service: Arc::new(login_service),
            baby_service: Arc::new(baby_service),
        }
    }
}
