use chrono::{DateTime, NaiveDate, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;

use entities::app_errors::CoreError;

#[derive(Clone, Debug)]
pub struct FirstbitesConfig {
    pub database: DatabaseConfig,
    pub wechat: WechatConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct WechatConfig {
    pub app_id: String,
    pub app_secret: String,
    pub api_base: String,
    pub timeout_secs: u64,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

/// Generates the opaque string id used as primary key across the data model.
/// UUIDv7 keeps ids sortable by creation time.
pub fn generate_id() -> String {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp).to_string()
}

/// Parses a `YYYY-MM-DD` date string as sent by the mini-program clients.
pub fn parse_date(value: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| CoreError::InvalidDate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates() {
        let date = parse_date("2024-03-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        assert!(matches!(
            parse_date("15/03/2024"),
            Err(CoreError::InvalidDate(_))
        ));
        assert!(matches!(parse_date(""), Err(CoreError::InvalidDate(_))));
        assert!(matches!(
            parse_date("2024-13-01"),
            Err(CoreError::InvalidDate(_))
        ));
    }

    #[test]
    fn generate_id_produces_unique_uuids() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }
}
