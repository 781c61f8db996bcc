use std::future::Future;

use crate::domain::{
    baby::{entities::Baby, value_objects::UpdateBabyInput},
    common::entities::app_errors::CoreError,
    family::entities::{Family, FamilyMember},
};

#[cfg_attr(test, mockall::automock)]
pub trait BabyRepository: Send + Sync {
    fn get_by_id(
        &self,
        baby_id: &str,
    ) -> impl Future<Output = Result<Option<Baby>, CoreError>> + Send;

    fn get_by_family(
        &self,
        family_id: &str,
    ) -> impl Future<Output = Result<Vec<Baby>, CoreError>> + Send;

    fn create(&self, baby: Baby) -> impl Future<Output = Result<Baby, CoreError>> + Send;

    /// Inserts family, admin membership and baby in one transaction for
    /// the implicit-provisioning path of baby registration.
    fn create_with_new_family(
        &self,
        baby: Baby,
        family: Family,
        admin: FamilyMember,
    ) -> impl Future<Output = Result<Baby, CoreError>> + Send;

    fn update(
        &self,
        baby_id: &str,
        input: UpdateBabyInput,
    ) -> impl Future<Output = Result<Option<Baby>, CoreError>> + Send;

    fn delete(&self, baby_id: &str) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
