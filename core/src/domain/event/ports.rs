use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    event::{entities::Event, value_objects::UpdateEventInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait EventRepository: Send + Sync {
    fn get_by_id(
        &self,
        event_id: &str,
    ) -> impl Future<Output = Result<Option<Event>, CoreError>> + Send;

    /// Timeline of a baby, most recent start date first.
    fn get_by_baby(
        &self,
        baby_id: &str,
    ) -> impl Future<Output = Result<Vec<Event>, CoreError>> + Send;

    fn create(&self, event: Event) -> impl Future<Output = Result<Event, CoreError>> + Send;

    fn update(
        &self,
        event_id: &str,
        input: UpdateEventInput,
    ) -> impl Future<Output = Result<Option<Event>, CoreError>> + Send;

    fn delete(&self, event_id: &str) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
