use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct UpdateFoodTrialInput {
    pub trial_date: Option<NaiveDate>,
    pub trial_count: Option<i32>,
    pub is_allergic: Option<bool>,
    pub reaction_level: Option<String>,
    pub notes: Option<String>,
}
