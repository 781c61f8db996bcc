use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::{generate_id, generate_timestamp};

/// A day's menu plan for one baby. The meals live in [`RecipeItem`] rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: String,
    pub baby_id: String,
    pub recipe_date: NaiveDate,
    /// User who planned the menu; absent for imported rows.
    pub created_by: Option<String>,
    pub notes: String,
    pub auto_generated: bool,
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    pub fn new(
        baby_id: String,
        recipe_date: NaiveDate,
        created_by: Option<String>,
        notes: String,
        auto_generated: bool,
    ) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id: generate_id(),
            baby_id,
            recipe_date,
            created_by,
            notes,
            auto_generated,
            created_at: now,
        }
    }

    pub fn update(&mut self, notes: Option<String>, auto_generated: Option<bool>) {
        if let Some(n) = notes {
            self.notes = n;
        }
        if let Some(a) = auto_generated {
            self.auto_generated = a;
        }
    }
}

/// One meal inside a recipe. `ingredients` keeps whatever JSON the
/// mini-program sends for the meal's composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeItem {
    pub id: String,
    pub recipe_id: String,
    pub meal_type: String, // 'breakfast' | 'morning_snack' | 'lunch' | 'afternoon_snack' | 'dinner'
    pub ingredients: serde_json::Value,
    pub instructions: String,
    pub created_at: DateTime<Utc>,
}

impl RecipeItem {
    pub fn new(
        recipe_id: String,
        meal_type: String,
        ingredients: serde_json::Value,
        instructions: String,
    ) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id: generate_id(),
            recipe_id,
            meal_type,
            ingredients,
            instructions,
            created_at: now,
        }
    }

    pub fn update(
        &mut self,
        meal_type: Option<String>,
        ingredients: Option<serde_json::Value>,
        instructions: Option<String>,
    ) {
        if let Some(m) = meal_type {
            self.meal_type = m;
        }
        if let Some(i) = ingredients {
            self.ingredients = i;
        }
        if let Some(ins) = instructions {
            self.instructions = ins;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_update_touches_notes_and_flag_only() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut recipe = Recipe::new(
            "baby-1".to_string(),
            date,
            Some("user-1".to_string()),
            String::new(),
            false,
        );

        recipe.update(Some("少盐".to_string()), Some(true));

        assert_eq!(recipe.notes, "少盐");
        assert!(recipe.auto_generated);
        assert_eq!(recipe.recipe_date, date);
        assert_eq!(recipe.baby_id, "baby-1");
        assert_eq!(recipe.created_by.as_deref(), Some("user-1"));
    }

    #[test]
    fn item_update_keeps_recipe_binding() {
        let mut item = RecipeItem::new(
            "rec-1".to_string(),
            "lunch".to_string(),
            serde_json::json!([{"name": "南瓜"}]),
            String::new(),
        );

        item.update(Some("dinner".to_string()), None, Some("蒸10分钟".to_string()));

        assert_eq!(item.meal_type, "dinner");
        assert_eq!(item.instructions, "蒸10分钟");
        assert_eq!(item.recipe_id, "rec-1");
        assert_eq!(item.ingredients, serde_json::json!([{"name": "南瓜"}]));
    }
}
