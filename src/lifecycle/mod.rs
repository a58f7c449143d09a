//! System lifecycle: configuration, startup and graceful shutdown.

pub mod config;
pub mod restaurant_system;

pub use config::*;
pub use restaurant_system::*;
