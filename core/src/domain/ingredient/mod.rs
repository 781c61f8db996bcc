pub mod entities;
pub mod ports;
pub mod value_objects;

pub use entities::Ingredient;
pub use ports::IngredientRepository;
