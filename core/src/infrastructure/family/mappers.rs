use crate::domain::family::entities::{Family, FamilyMember};
use crate::entity::{families::Model as FamilyModel, family_members::Model as FamilyMemberModel};

impl From<&FamilyModel> for Family {
    fn from(model: &FamilyModel) -> Self {
        Self {
            id: model.id.clone(),
            name: model.name.clone(),
            created_by: model.created_by.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<FamilyModel> for Family {
    fn from(model: FamilyModel) -> Self {
        Self::from(&model)
    }
}

impl From<&FamilyMemberModel> for FamilyMember {
    fn from(model: &FamilyMemberModel) -> Self {
        Self {
            family_id: model.family_id.clone(),
            user_id: model.user_id.clone(),
            role: model.role.clone(),
            joined_at: model.joined_at.to_utc(),
        }
    }
}

impl From<FamilyMemberModel> for FamilyMember {
    fn from(model: FamilyMemberModel) -> Self {
        Self::from(&model)
    }
}
