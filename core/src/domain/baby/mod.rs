pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::Baby;
pub use ports::BabyRepository;
pub use services::BabyService;
