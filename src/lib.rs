//! seedctl - Idempotent synthetic-data seeder
//!
//! Populates a remote identity service and a remote document store with
//! internally-consistent synthetic test data, so a development or staging
//! environment has a realistic dataset without touching production data.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Config file, environment variables and constants
//! - **domain**: Entity models seeded into the remote services
//! - **services**: Seeding phases, dataset generation and assignment
//! - **infra**: Remote service clients (identity, document store)
//! - **report**: Tabular display and flat-file export
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Seed everything the config file asks for
//! cargo run -- seed
//!
//! # Override the quantities
//! cargo run -- seed --users 10 --companies 4
//!
//! # Inspect without writing
//! cargo run -- status
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod report;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{AuthUserRecord, StoreCompanyRecord, StoreUserRecord};
pub use errors::{SeedError, SeedResult};
