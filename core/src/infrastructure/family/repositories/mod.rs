pub mod family_member_repository;
pub mod family_repository;

pub use family_member_repository::PostgresFamilyMemberRepository;
pub use family_repository::PostgresFamilyRepository;
