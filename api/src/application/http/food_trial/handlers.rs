pub mod create_food_trial;
pub mod delete_food_trial;
pub mod get_baby_food_trials;
pub mod update_food_trial;
