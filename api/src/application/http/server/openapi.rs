use utoipa::OpenApi;

use crate::application::http::{
    auth::router::AuthApiDoc, baby::router::BabyApiDoc, counter::router::CounterApiDoc,
    event::router::EventApiDoc, family::router::FamilyApiDoc,
    food_trial::router::FoodTrialApiDoc, ingredient::router::IngredientApiDoc,
    notification::router::NotificationApiDoc, recipe::router::RecipeApiDoc,
    user::router::UserApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FirstBites API"
    ),
    nest(
        (path = "/api/auth", api = AuthApiDoc),
        (path = "/api/users", api = UserApiDoc),
        (path = "/api/ingredients", api = IngredientApiDoc),
        (path = "/api", api = FamilyApiDoc),
        (path = "/api", api = BabyApiDoc),
        (path = "/api", api = FoodTrialApiDoc),
        (path = "/api", api = RecipeApiDoc),
        (path = "/api", api = EventApiDoc),
        (path = "/api", api = NotificationApiDoc),
        (path = "/api", api = CounterApiDoc),
    )
)]
pub struct ApiDoc;
