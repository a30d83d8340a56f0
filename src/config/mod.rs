//! Configuration loading for the dashboard.
//!
//! A TOML file seeds the initial control values, tick rate and log level.
//! The file is read once at startup and never written back; adjusting the
//! controls in the running dashboard does not persist anything.

pub mod default;
pub mod error;
pub mod loader;
pub mod schema;
pub mod xdg;

pub use error::ConfigError;
pub use schema::Config;
