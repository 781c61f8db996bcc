pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::WechatSession;
pub use ports::WechatClient;
pub use services::LoginService;
pub use value_objects::LoginOutcome;
