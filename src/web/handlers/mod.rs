//! HTML template rendering handlers.

mod welcome;

pub use welcome::welcome_handler;
