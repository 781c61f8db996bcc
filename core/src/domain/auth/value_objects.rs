use crate::domain::{auth::entities::WechatSession, user::entities::User};

/// What a successful login hands back to the HTTP layer.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: User,
    pub session: WechatSession,
    pub is_new_user: bool,
}
