use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, counter::entities::Counter};

#[cfg_attr(test, mockall::automock)]
pub trait CounterRepository: Send + Sync {
    fn get(&self, counter_id: i32)
    -> impl Future<Output = Result<Option<Counter>, CoreError>> + Send;

    fn create(&self, counter: Counter)
    -> impl Future<Output = Result<Counter, CoreError>> + Send;

    fn update(
        &self,
        counter: Counter,
    ) -> impl Future<Output = Result<Counter, CoreError>> + Send;

    fn delete(&self, counter_id: i32) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
