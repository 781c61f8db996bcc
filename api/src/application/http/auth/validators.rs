use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginValidator {
    /// `wx.login` authorization code from the mini-program.
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,
}
