pub mod auth_handler;
pub mod health;
pub mod resource_handler;

pub use auth_handler::token;
pub use health::health_check;
pub use resource_handler::{backups, server_time};
