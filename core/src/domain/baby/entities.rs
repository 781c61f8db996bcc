use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::{generate_id, generate_timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Baby {
    pub id: String,
    pub family_id: String,
    pub nickname: String,
    pub gender: String, // 'M' | 'F'
    pub birth_date: NaiveDate,
    pub avatar_url: String,
    pub avoid_ingredients: Vec<String>, // ingredient ids to keep off menus
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct BabyConfig {
    pub family_id: String,
    pub nickname: String,
    pub gender: String,
    pub birth_date: NaiveDate,
    pub avatar_url: String,
    pub avoid_ingredients: Vec<String>,
}

impl Baby {
    pub fn new(config: BabyConfig) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id: generate_id(),
            family_id: config.family_id,
            nickname: config.nickname,
            gender: config.gender,
            birth_date: config.birth_date,
            avatar_url: config.avatar_url,
            avoid_ingredients: config.avoid_ingredients,
            created_at: now,
        }
    }

    pub fn update(
        &mut self,
        nickname: Option<String>,
        gender: Option<String>,
        birth_date: Option<NaiveDate>,
        avatar_url: Option<String>,
        avoid_ingredients: Option<Vec<String>>,
    ) {
        if let Some(n) = nickname {
            self.nickname = n;
        }
        if let Some(g) = gender {
            self.gender = g;
        }
        if let Some(b) = birth_date {
            self.birth_date = b;
        }
        if let Some(a) = avatar_url {
            self.avatar_url = a;
        }
        if let Some(ai) = avoid_ingredients {
            self.avoid_ingredients = ai;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BabyConfig {
        BabyConfig {
            family_id: "fam-1".to_string(),
            nickname: "豆豆".to_string(),
            gender: "F".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            avatar_url: String::new(),
            avoid_ingredients: Vec::new(),
        }
    }

    #[test]
    fn update_replaces_avoid_list_wholesale() {
        let mut baby = Baby::new(config());
        baby.update(None, None, None, None, Some(vec!["ing-1".to_string()]));
        assert_eq!(baby.avoid_ingredients, vec!["ing-1".to_string()]);

        baby.update(None, None, None, None, Some(Vec::new()));
        assert!(baby.avoid_ingredients.is_empty());
    }

    #[test]
    fn update_keeps_unset_fields() {
        let mut baby = Baby::new(config());
        baby.update(Some("小豆".to_string()), None, None, None, None);
        assert_eq!(baby.nickname, "小豆");
        assert_eq!(baby.gender, "F");
        assert_eq!(baby.family_id, "fam-1");
    }
}
