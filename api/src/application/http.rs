pub mod auth;
pub mod baby;
pub mod counter;
pub mod event;
pub mod family;
pub mod food_trial;
pub mod health;
pub mod ingredient;
pub mod notification;
pub mod query_params;
pub mod recipe;
pub mod server;
pub mod user;
