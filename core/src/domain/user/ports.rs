use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{entities::User, value_objects::UpdateUserInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn get_by_id(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn create(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update(
        &self,
        user_id: &str,
        input: UpdateUserInput,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn delete(&self, user_id: &str) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
