pub mod entities;
pub mod ports;
pub mod value_objects;

pub use entities::{Family, FamilyMember};
pub use ports::{FamilyMemberRepository, FamilyRepository};
