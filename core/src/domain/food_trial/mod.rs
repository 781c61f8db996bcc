pub mod entities;
pub mod ports;
pub mod value_objects;

pub use entities::FoodTrial;
pub use ports::FoodTrialRepository;
