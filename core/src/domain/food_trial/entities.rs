use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::{generate_id, generate_timestamp};

/// One exposure of a baby to an ingredient and how it went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FoodTrial {
    pub id: String,
    pub baby_id: String,
    pub ingredient_id: String,
    pub trial_date: NaiveDate,
    pub trial_count: i32,
    pub is_allergic: bool,
    pub reaction_level: String, // 'none' | 'mild' | 'moderate' | 'severe'
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct FoodTrialConfig {
    pub baby_id: String,
    pub ingredient_id: String,
    pub trial_date: NaiveDate,
    pub trial_count: i32,
    pub is_allergic: bool,
    pub reaction_level: String,
    pub notes: String,
}

impl FoodTrial {
    pub fn new(config: FoodTrialConfig) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id: generate_id(),
            baby_id: config.baby_id,
            ingredient_id: config.ingredient_id,
            trial_date: config.trial_date,
            trial_count: config.trial_count,
            is_allergic: config.is_allergic,
            reaction_level: config.reaction_level,
            notes: config.notes,
            created_at: now,
        }
    }

    pub fn update(
        &mut self,
        trial_date: Option<NaiveDate>,
        trial_count: Option<i32>,
        is_allergic: Option<bool>,
        reaction_level: Option<String>,
        notes: Option<String>,
    ) {
        if let Some(d) = trial_date {
            self.trial_date = d;
        }
        if let Some(c) = trial_count {
            self.trial_count = c;
        }
        if let Some(a) = is_allergic {
            self.is_allergic = a;
        }
        if let Some(r) = reaction_level {
            self.reaction_level = r;
        }
        if let Some(n) = notes {
            self.notes = n;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_can_flip_allergy_verdict() {
        let mut trial = FoodTrial::new(FoodTrialConfig {
            baby_id: "baby-1".to_string(),
            ingredient_id: "ing-1".to_string(),
            trial_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            trial_count: 1,
            is_allergic: false,
            reaction_level: "none".to_string(),
            notes: String::new(),
        });

        trial.update(None, Some(2), Some(true), Some("mild".to_string()), None);

        assert_eq!(trial.trial_count, 2);
        assert!(trial.is_allergic);
        assert_eq!(trial.reaction_level, "mild");
        assert_eq!(trial.baby_id, "baby-1");
    }
}
