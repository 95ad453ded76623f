pub mod config;
pub mod error;
pub mod handlers;
pub mod server;

// Re-exports for convenience
pub use config::Config;
pub use error::{ApiError, ApiResult};
