use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    family::{
        entities::{Family, FamilyMember},
        value_objects::UpdateFamilyInput,
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait FamilyRepository: Send + Sync {
    fn get_by_id(
        &self,
        family_id: &str,
    ) -> impl Future<Output = Result<Option<Family>, CoreError>> + Send;

    /// All families the user belongs to, resolved through memberships.
    fn get_by_user(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<Family>, CoreError>> + Send;

    /// Inserts the family together with its admin membership in one
    /// transaction, so a family can never exist without an admin.
    fn create_with_admin(
        &self,
        family: Family,
        admin: FamilyMember,
    ) -> impl Future<Output = Result<Family, CoreError>> + Send;

    fn update(
        &self,
        family_id: &str,
        input: UpdateFamilyInput,
    ) -> impl Future<Output = Result<Option<Family>, CoreError>> + Send;

    fn delete(&self, family_id: &str) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait FamilyMemberRepository: Send + Sync {
    fn get_by_family(
        &self,
        family_id: &str,
    ) -> impl Future<Output = Result<Vec<FamilyMember>, CoreError>> + Send;

    fn get_member(
        &self,
        family_id: &str,
        user_id: &str,
    ) -> impl Future<Output = Result<Option<FamilyMember>, CoreError>> + Send;

    fn create(
        &self,
        member: FamilyMember,
    ) -> impl Future<Output = Result<FamilyMember, CoreError>> + Send;

    fn delete(
        &self,
        family_id: &str,
        user_id: &str,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
