//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `seed` - Seed the identity service and document store
//! - `status` - List what is already seeded

pub mod args;

pub use args::{Cli, Commands};
