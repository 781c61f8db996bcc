use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result of exchanging a mini-program login code at the WeChat API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WechatSession {
    pub openid: String,
    pub session_key: String,
    pub unionid: Option<String>,
}
