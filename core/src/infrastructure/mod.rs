pub mod baby;
pub mod counter;
pub mod db;
pub mod event;
pub mod family;
pub mod food_trial;
pub mod ingredient;
pub mod notification;
pub mod recipe;
pub mod user;
pub mod wechat;
