use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::{generate_id, generate_timestamp};

/// A care group sharing babies, trials and events across caregivers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Family {
    pub id: String,
    pub name: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl Family {
    pub fn new(name: String, created_by: String) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id: generate_id(),
            name,
            created_by,
            created_at: now,
        }
    }

    /// Family provisioned implicitly when a baby is registered without one.
    pub fn for_baby(baby_nickname: &str, created_by: String) -> Self {
        Self::new(format!("{baby_nickname}的家庭"), created_by)
    }

    pub fn update(&mut self, name: Option<String>) {
        if let Some(n) = name {
            self.name = n;
        }
    }
}

/// Membership row linking a user into a family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FamilyMember {
    pub family_id: String,
    pub user_id: String,
    pub role: String, // 'admin' | 'member'
    pub joined_at: DateTime<Utc>,
}

impl FamilyMember {
    pub fn new(family_id: String, user_id: String, role: String) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            family_id,
            user_id,
            role,
            joined_at: now,
        }
    }

    pub fn admin(family_id: String, user_id: String) -> Self {
        Self::new(family_id, user_id, "admin".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_baby_names_family_after_the_baby() {
        let family = Family::for_baby("豆豆", "user-1".to_string());
        assert_eq!(family.name, "豆豆的家庭");
        assert_eq!(family.created_by, "user-1");
    }

    #[test]
    fn admin_membership_carries_admin_role() {
        let member = FamilyMember::admin("fam-1".to_string(), "user-1".to_string());
        assert_eq!(member.role, "admin");
    }
}
