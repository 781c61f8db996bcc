use crate::domain::{
    baby::{
        entities::{Baby, BabyConfig},
        ports::BabyRepository,
        value_objects::{CreateBabyInput, CreateBabyOutcome},
    },
    common::entities::app_errors::CoreError,
    family::{
        entities::{Family, FamilyMember},
        ports::FamilyRepository,
    },
};

/// Registers babies and resolves which family they land in.
///
/// Resolution order: an explicit `family_id` must exist; otherwise the
/// caller's first family is reused; a caller without any family gets a
/// fresh family provisioned with them as admin.
#[derive(Debug, Clone)]
pub struct BabyService<B, F> {
    baby_repository: B,
    family_repository: F,
}

impl<B, F> BabyService<B, F>
where
    B: BabyRepository,
    F: FamilyRepository,
{
    pub fn new(baby_repository: B, family_repository: F) -> Self {
        Self {
            baby_repository,
            family_repository,
        }
    }

    pub async fn create_baby(&self, input: CreateBabyInput) -> Result<CreateBabyOutcome, CoreError> {
        if let Some(family_id) = &input.family_id {
            self.family_repository
                .get_by_id(family_id)
                .await?
                .ok_or(CoreError::FamilyNotFound)?;

            let baby = self
                .baby_repository
                .create(Self::build_baby(family_id.clone(), &input))
                .await?;

            return Ok(CreateBabyOutcome {
                baby,
                created_family: None,
            });
        }

        let families = self.family_repository.get_by_user(&input.created_by).await?;

        if let Some(family) = families.first() {
            let baby = self
                .baby_repository
                .create(Self::build_baby(family.id.clone(), &input))
                .await?;

            return Ok(CreateBabyOutcome {
                baby,
                created_family: None,
            });
        }

        let family = Family::for_baby(&input.nickname, input.created_by.clone());
        let admin = FamilyMember::admin(family.id.clone(), input.created_by.clone());

        let baby = self
            .baby_repository
            .create_with_new_family(
                Self::build_baby(family.id.clone(), &input),
                family.clone(),
                admin,
            )
            .await?;

        Ok(CreateBabyOutcome {
            baby,
            created_family: Some(family),
        })
    }

    fn build_baby(family_id: String, input: &CreateBabyInput) -> Baby {
        Baby::new(BabyConfig {
            family_id,
            nickname: input.nickname.clone(),
            gender: input.gender.clone(),
            birth_date: input.birth_date,
            avatar_url: input.avatar_url.clone(),
            avoid_ingredients: input.avoid_ingredients.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::{baby::ports::MockBabyRepository, family::ports::MockFamilyRepository};

    fn input(family_id: Option<&str>) -> CreateBabyInput {
        CreateBabyInput {
            family_id: family_id.map(str::to_string),
            created_by: "user-1".to_string(),
            nickname: "豆豆".to_string(),
            gender: "F".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            avatar_url: String::new(),
            avoid_ingredients: Vec::new(),
        }
    }

    #[tokio::test]
    async fn explicit_family_must_exist() {
        let babies = MockBabyRepository::new();
        let mut families = MockFamilyRepository::new();
        families
            .expect_get_by_id()
            .with(eq("missing"))
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = BabyService::new(babies, families);
        let err = service.create_baby(input(Some("missing"))).await.unwrap_err();

        assert_eq!(err, CoreError::FamilyNotFound);
    }

    #[tokio::test]
    async fn explicit_family_is_used_as_given() {
        let mut babies = MockBabyRepository::new();
        babies
            .expect_create()
            .withf(|baby| baby.family_id == "fam-9")
            .returning(|baby| Box::pin(async move { Ok(baby) }));
        babies.expect_create_with_new_family().never();

        let mut families = MockFamilyRepository::new();
        families.expect_get_by_id().with(eq("fam-9")).returning(|_| {
            Box::pin(async {
                Ok(Some(Family::new(
                    "某家庭".to_string(),
                    "user-2".to_string(),
                )))
            })
        });

        let service = BabyService::new(babies, families);
        let outcome = service.create_baby(input(Some("fam-9"))).await.unwrap();

        assert_eq!(outcome.baby.family_id, "fam-9");
        assert!(outcome.created_family.is_none());
    }

    #[tokio::test]
    async fn caller_with_families_reuses_the_first() {
        let mut babies = MockBabyRepository::new();
        babies
            .expect_create()
            .withf(|baby| baby.family_id == "fam-first")
            .returning(|baby| Box::pin(async move { Ok(baby) }));
        babies.expect_create_with_new_family().never();

        let mut families = MockFamilyRepository::new();
        families.expect_get_by_user().with(eq("user-1")).returning(|_| {
            Box::pin(async {
                let mut first = Family::new("甲".to_string(), "user-1".to_string());
                first.id = "fam-first".to_string();
                let mut second = Family::new("乙".to_string(), "user-1".to_string());
                second.id = "fam-second".to_string();
                Ok(vec![first, second])
            })
        });

        let service = BabyService::new(babies, families);
        let outcome = service.create_baby(input(None)).await.unwrap();

        assert_eq!(outcome.baby.family_id, "fam-first");
        assert!(outcome.created_family.is_none());
    }

    #[tokio::test]
    async fn caller_without_family_gets_one_provisioned() {
        let mut babies = MockBabyRepository::new();
        babies.expect_create().never();
        babies
            .expect_create_with_new_family()
            .withf(|baby, family, admin| {
                baby.family_id == family.id
                    && family.name == "豆豆的家庭"
                    && admin.family_id == family.id
                    && admin.user_id == "user-1"
                    && admin.role == "admin"
            })
            .returning(|baby, _, _| Box::pin(async move { Ok(baby) }));

        let mut families = MockFamilyRepository::new();
        families
            .expect_get_by_user()
            .returning(|_| Box::pin(async { Ok(Vec::new()) }));

        let service = BabyService::new(babies, families);
        let outcome = service.create_baby(input(None)).await.unwrap();

        let created = outcome.created_family.unwrap();
        assert_eq!(created.name, "豆豆的家庭");
        assert_eq!(outcome.baby.family_id, created.id);
    }
}
