use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserInput {
    pub nickname: Option<String>,
    pub avatar_url: Option<String>,
}
