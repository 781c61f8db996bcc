use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::generate_timestamp;

/// An account keyed by the WeChat openid, so one mini-program identity
/// maps to exactly one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: String,
    pub nickname: String,
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: String, nickname: String, avatar_url: String) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id,
            nickname,
            avatar_url,
            created_at: now,
        }
    }

    /// Default account provisioned on first login. The placeholder
    /// nickname ends with the last six characters of the openid.
    pub fn from_openid(openid: &str) -> Self {
        let chars: Vec<char> = openid.chars().collect();
        let start = chars.len().saturating_sub(6);
        let suffix: String = chars[start..].iter().collect();

        Self::new(openid.to_string(), format!("用户{suffix}"), String::new())
    }

    pub fn update(&mut self, nickname: Option<String>, avatar_url: Option<String>) {
        if let Some(n) = nickname {
            self.nickname = n;
        }
        if let Some(a) = avatar_url {
            self.avatar_url = a;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_openid_uses_last_six_characters() {
        let user = User::from_openid("oX7f2-abcdef123456");
        assert_eq!(user.id, "oX7f2-abcdef123456");
        assert_eq!(user.nickname, "用户123456");
        assert_eq!(user.avatar_url, "");
    }

    #[test]
    fn from_openid_handles_short_openids() {
        let user = User::from_openid("abc");
        assert_eq!(user.nickname, "用户abc");
    }

    #[test]
    fn update_only_touches_provided_fields() {
        let mut user = User::from_openid("openid-123456");
        user.update(Some("小王".to_string()), None);
        assert_eq!(user.nickname, "小王");
        assert_eq!(user.avatar_url, "");

        user.update(None, Some("https://cdn.example.com/a.png".to_string()));
        assert_eq!(user.nickname, "小王");
        assert_eq!(user.avatar_url, "https://cdn.example.com/a.png");
    }
}
