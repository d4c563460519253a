pub mod config;
pub mod error;
pub mod extract;
pub mod message;
pub mod routes;
pub mod services;
pub mod shutdown;

pub use config::Config;
pub use error::AppError;
