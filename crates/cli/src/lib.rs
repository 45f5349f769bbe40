//! Console demo wiring the shop together.

pub mod config;
pub mod demo;

pub use config::{Config, ConfigError};
