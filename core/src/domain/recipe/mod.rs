pub mod entities;
pub mod ports;
pub mod value_objects;

pub use entities::{Recipe, RecipeItem};
pub use ports::{RecipeItemRepository, RecipeRepository};
pub use value_objects::RecipeWithItems;
