use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::generate_timestamp;

/// Legacy demo counter kept for the cloud-template healthcheck page.
/// A single row with id 1 backs the whole feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Counter {
    pub id: i32,
    pub count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Counter {
    /// First increment creates the row already at 1.
    pub fn new(id: i32) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id,
            count: 1,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn increment(&mut self) {
        let (now, _) = generate_timestamp();

        self.count += 1;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_counter_starts_at_one() {
        let counter = Counter::new(1);
        assert_eq!(counter.count, 1);
    }

    #[test]
    fn increment_bumps_count_and_updated_at() {
        let mut counter = Counter::new(1);
        counter.increment();
        assert_eq!(counter.count, 2);
        assert!(counter.updated_at >= counter.created_at);
    }
}
