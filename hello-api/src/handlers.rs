// Module declarations for HTTP handlers
pub mod authenticate;
pub mod hello;

// Re-exports
pub use authenticate::authenticate_handler;
pub use hello::hello_handler;
