//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// seedctl - Synthetic-data seeder for an identity service and a document store
#[derive(Parser, Debug)]
#[command(name = "seedctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, env = "SEED_CONFIG_PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Seed the identity service and document store
    Seed(SeedArgs),

    /// Show what is already seeded, without writing anything
    Status,
}

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Number of auth users to create (overrides the config file)
    #[arg(long)]
    pub users: Option<usize>,

    /// Number of companies to create (overrides the config file)
    #[arg(long)]
    pub companies: Option<usize>,

    /// RNG seed for reproducible datasets (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory for report exports
    #[arg(long, default_value = ".")]
    pub out_dir: std::path::PathBuf,
}
