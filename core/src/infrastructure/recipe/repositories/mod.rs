pub mod recipe_item_repository;
pub mod recipe_repository;

pub use recipe_item_repository::PostgresRecipeItemRepository;
pub use recipe_repository::PostgresRecipeRepository;
