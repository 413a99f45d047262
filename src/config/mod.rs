//! Application configuration module
//!
//! Handles the config file, environment variables and application-wide
//! constants.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
