use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::{generate_id, generate_timestamp};

/// Care event on a baby's timeline, such as an illness or a vaccination.
/// Ongoing events carry no `end_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Event {
    pub id: String,
    pub baby_id: String,
    pub event_type: String, // 'illness' | 'vaccine' | 'other'
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct EventConfig {
    pub baby_id: String,
    pub event_type: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: String,
}

impl Event {
    pub fn new(config: EventConfig) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id: generate_id(),
            baby_id: config.baby_id,
            event_type: config.event_type,
            start_date: config.start_date,
            end_date: config.end_date,
            description: config.description,
            created_at: now,
        }
    }

    pub fn update(
        &mut self,
        event_type: Option<String>,
        start_date: Option<NaiveDate>,
        end_date: Option<Option<NaiveDate>>,
        description: Option<String>,
    ) {
        if let Some(t) = event_type {
            self.event_type = t;
        }
        if let Some(s) = start_date {
            self.start_date = s;
        }
        if let Some(e) = end_date {
            self.end_date = e;
        }
        if let Some(d) = description {
            self.description = d;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_can_close_an_ongoing_event() {
        let mut event = Event::new(EventConfig {
            baby_id: "baby-1".to_string(),
            event_type: "illness".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            end_date: None,
            description: "低烧".to_string(),
        });

        let end = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
        event.update(None, None, Some(Some(end)), None);

        assert_eq!(event.end_date, Some(end));
        assert_eq!(event.event_type, "illness");
    }

    #[test]
    fn update_can_reopen_an_event() {
        let mut event = Event::new(EventConfig {
            baby_id: "baby-1".to_string(),
            event_type: "illness".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 3),
            description: String::new(),
        });

        event.update(None, None, Some(None), None);

        assert_eq!(event.end_date, None);
    }
}
