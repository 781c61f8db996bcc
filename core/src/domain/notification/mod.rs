pub mod entities;
pub mod ports;

pub use entities::Notification;
pub use ports::NotificationRepository;
