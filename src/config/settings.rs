//! Application settings loaded from a config file and environment variables.
//!
//! The config file carries an `environment` section (string map, same keys as
//! the process environment) and a `quantities` section. Process environment
//! variables win over file values. The loaded `Config` is passed explicitly
//! to every component; nothing reads ambient state after startup.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::constants::{
    DEFAULT_IDENTITY_URL, DEFAULT_RNG_SEED, DEFAULT_STORE_URL, ENV_API_TOKEN, ENV_IDENTITY_URL,
    ENV_PROJECT_ID, ENV_RNG_SEED, ENV_STORE_URL,
};
use crate::errors::{SeedError, SeedResult};

/// On-disk config file layout
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    environment: HashMap<String, String>,
    quantities: Quantities,
}

/// Requested entity counts
#[derive(Debug, Clone, Copy, Deserialize)]
struct Quantities {
    users: usize,
    companies: usize,
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub identity_url: String,
    pub store_url: String,
    pub project_id: String,
    api_token: String,
    pub user_quantity: usize,
    pub company_quantity: usize,
    pub rng_seed: u64,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("identity_url", &self.identity_url)
            .field("store_url", &self.store_url)
            .field("project_id", &self.project_id)
            .field("api_token", &"[REDACTED]")
            .field("user_quantity", &self.user_quantity)
            .field("company_quantity", &self.company_quantity)
            .field("rng_seed", &self.rng_seed)
            .finish()
    }
}

impl Config {
    /// Load configuration from `path`, applying environment overrides.
    ///
    /// Fails with `ConfigMissing` when the file does not exist,
    /// `ConfigInvalid` when it does not parse, and `CredentialsUnset` when
    /// the project id or API token is absent from both the file and the
    /// process environment.
    pub fn load(path: &Path) -> SeedResult<Self> {
        dotenvy::dotenv().ok();

        if !path.is_file() {
            return Err(SeedError::ConfigMissing(path.display().to_string()));
        }

        let raw = fs::read_to_string(path)?;
        let file: ConfigFile =
            serde_json::from_str(&raw).map_err(|e| SeedError::ConfigInvalid(e.to_string()))?;

        let lookup = |key: &str| -> Option<String> {
            env::var(key)
                .ok()
                .or_else(|| file.environment.get(key).cloned())
                .filter(|value| !value.is_empty())
        };

        let project_id = lookup(ENV_PROJECT_ID)
            .ok_or_else(|| SeedError::CredentialsUnset(ENV_PROJECT_ID.to_string()))?;
        let api_token = lookup(ENV_API_TOKEN)
            .ok_or_else(|| SeedError::CredentialsUnset(ENV_API_TOKEN.to_string()))?;

        let rng_seed = match lookup(ENV_RNG_SEED) {
            Some(value) => value
                .parse()
                .map_err(|_| SeedError::ConfigInvalid(format!("{ENV_RNG_SEED}: {value}")))?,
            None => DEFAULT_RNG_SEED,
        };

        Ok(Self {
            identity_url: lookup(ENV_IDENTITY_URL)
                .unwrap_or_else(|| DEFAULT_IDENTITY_URL.to_string()),
            store_url: lookup(ENV_STORE_URL).unwrap_or_else(|| DEFAULT_STORE_URL.to_string()),
            project_id,
            api_token,
            user_quantity: file.quantities.users,
            company_quantity: file.quantities.companies,
            rng_seed,
        })
    }

    /// API token presented to both service clients.
    pub fn api_token(&self) -> &str {
        &self.api_token
    }
}
