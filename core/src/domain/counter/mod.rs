pub mod entities;
pub mod ports;

pub use entities::Counter;
pub use ports::CounterRepository;
