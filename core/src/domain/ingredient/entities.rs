use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::{generate_id, generate_timestamp};

/// Catalog entry describing one food and the age window it suits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub category: String,
    pub image_url: String,
    pub risk_level: String, // 'low' | 'medium' | 'high'
    pub nutrients: serde_json::Value,
    pub summary: String,
    pub description: String,
    pub suitable_month_from: i32,
    pub suitable_month_to: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct IngredientConfig {
    pub name: String,
    pub category: String,
    pub image_url: String,
    pub risk_level: String,
    pub nutrients: serde_json::Value,
    pub summary: String,
    pub description: String,
    pub suitable_month_from: i32,
    pub suitable_month_to: i32,
}

impl Ingredient {
    pub fn new(config: IngredientConfig) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id: generate_id(),
            name: config.name,
            category: config.category,
            image_url: config.image_url,
            risk_level: config.risk_level,
            nutrients: config.nutrients,
            summary: config.summary,
            description: config.description,
            suitable_month_from: config.suitable_month_from,
            suitable_month_to: config.suitable_month_to,
            created_at: now,
            updated_at: now,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        name: Option<String>,
        category: Option<String>,
        image_url: Option<String>,
        risk_level: Option<String>,
        nutrients: Option<serde_json::Value>,
        summary: Option<String>,
        description: Option<String>,
        suitable_month_from: Option<i32>,
        suitable_month_to: Option<i32>,
    ) {
        let (now, _) = generate_timestamp();

        if let Some(n) = name {
            self.name = n;
        }
        if let Some(c) = category {
            self.category = c;
        }
        if let Some(i) = image_url {
            self.image_url = i;
        }
        if let Some(r) = risk_level {
            self.risk_level = r;
        }
        if let Some(nu) = nutrients {
            self.nutrients = nu;
        }
        if let Some(s) = summary {
            self.summary = s;
        }
        if let Some(d) = description {
            self.description = d;
        }
        if let Some(from) = suitable_month_from {
            self.suitable_month_from = from;
        }
        if let Some(to) = suitable_month_to {
            self.suitable_month_to = to;
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_refreshes_updated_at_only() {
        let mut ingredient = Ingredient::new(IngredientConfig {
            name: "西兰花".to_string(),
            category: "vegetable".to_string(),
            image_url: String::new(),
            risk_level: "low".to_string(),
            nutrients: serde_json::json!({}),
            summary: String::new(),
            description: String::new(),
            suitable_month_from: 6,
            suitable_month_to: 36,
        });
        let created_at = ingredient.created_at;

        ingredient.update(
            None,
            None,
            None,
            Some("medium".to_string()),
            None,
            None,
            None,
            None,
            None,
        );

        assert_eq!(ingredient.risk_level, "medium");
        assert_eq!(ingredient.name, "西兰花");
        assert_eq!(ingredient.created_at, created_at);
        assert!(ingredient.updated_at >= created_at);
    }
}
