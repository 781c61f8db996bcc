pub mod babies;
pub mod counters;
pub mod events;
pub mod families;
pub mod family_members;
pub mod food_trials;
pub mod ingredients;
pub mod notifications;
pub mod recipe_items;
pub mod recipes;
pub mod users;
