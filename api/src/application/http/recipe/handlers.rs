pub mod create_recipe;
pub mod create_recipe_item;
pub mod delete_recipe;
pub mod delete_recipe_item;
pub mod get_baby_recipes;
pub mod get_recipe_by_date;
pub mod get_recipe_items;
pub mod update_recipe;
pub mod update_recipe_item;
