pub mod auth;
pub mod baby;
pub mod common;
pub mod counter;
pub mod event;
pub mod family;
pub mod food_trial;
pub mod ingredient;
pub mod notification;
pub mod recipe;
pub mod user;
