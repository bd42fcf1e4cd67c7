//! Discord bot integration.

pub mod bot;
pub mod handler;

pub use bot::build_client;
pub use handler::AppState;
