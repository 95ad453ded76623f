// Module declaration file for handlers/

pub mod hello;

pub use hello::hello_handler;
