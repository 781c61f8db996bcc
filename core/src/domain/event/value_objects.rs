use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct UpdateEventInput {
    pub event_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    /// `Some(None)` clears the end date, reopening the event.
    pub end_date: Option<Option<NaiveDate>>,
    pub description: Option<String>,
}
