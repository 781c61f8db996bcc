use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const EVENT_TYPES: [&str; 3] = ["illness", "vaccine", "other"];

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventValidator {
    #[validate(length(min = 1, message = "baby_id is required"))]
    #[serde(default)]
    pub baby_id: String,
    #[validate(length(min = 1, message = "event_type is required"))]
    #[serde(default)]
    pub event_type: String,
    #[validate(length(min = 1, message = "start_date is required"))]
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateEventValidator {
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    /// An explicit `null` clears the end date and reopens the event;
    /// leaving the key out keeps it unchanged.
    #[serde(default, deserialize_with = "present_field")]
    #[schema(value_type = Option<String>)]
    pub end_date: Option<Option<String>>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Wraps the value in `Some` so a present-but-null field is told apart
/// from an absent one.
fn present_field<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_distinguishes_null_from_absent_end_date() {
        let with_null: UpdateEventValidator =
            serde_json::from_str(r#"{"end_date": null}"#).unwrap();
        assert_eq!(with_null.end_date, Some(None));

        let absent: UpdateEventValidator = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.end_date, None);

        let set: UpdateEventValidator =
            serde_json::from_str(r#"{"end_date": "2024-05-03"}"#).unwrap();
        assert_eq!(set.end_date, Some(Some("2024-05-03".to_string())));
    }
}
