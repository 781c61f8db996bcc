use chrono::NaiveDate;

use crate::domain::{baby::entities::Baby, family::entities::Family};

#[derive(Debug, Clone)]
pub struct CreateBabyInput {
    /// Family to attach the baby to. When absent the caller's first
    /// family is used, or a fresh one is provisioned.
    pub family_id: Option<String>,
    pub created_by: String,
    pub nickname: String,
    pub gender: String,
    pub birth_date: NaiveDate,
    pub avatar_url: String,
    pub avoid_ingredients: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateBabyInput {
    pub nickname: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub avatar_url: Option<String>,
    pub avoid_ingredients: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct CreateBabyOutcome {
    pub baby: Baby,
    /// Set when registration provisioned a new family for the caller.
    pub created_family: Option<Family>,
}
