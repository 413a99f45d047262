//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Document store collections and fields
// =============================================================================

/// Collection holding company documents
pub const COLLECTION_COMPANIES: &str = "Companies";

/// Collection holding user documents (keyed by identity uid)
pub const COLLECTION_USERS: &str = "Users";

/// Array field on a company document that accumulates assigned user uids
pub const FIELD_USERS: &str = "Users";

// =============================================================================
// Idempotency
// =============================================================================

/// Number of pre-existing identity users tolerated before seeding becomes a
/// no-op (allows for a bootstrap/admin account)
pub const BOOTSTRAP_USER_ALLOWANCE: usize = 1;

// =============================================================================
// Configuration
// =============================================================================

/// Default config file path
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Identity service base URL (environment key)
pub const ENV_IDENTITY_URL: &str = "SEED_IDENTITY_URL";

/// Document store base URL (environment key)
pub const ENV_STORE_URL: &str = "SEED_STORE_URL";

/// Project identifier scoping both services (environment key, required)
pub const ENV_PROJECT_ID: &str = "SEED_PROJECT_ID";

/// API token presented to both services (environment key, required)
pub const ENV_API_TOKEN: &str = "SEED_API_TOKEN";

/// RNG seed override (environment key)
pub const ENV_RNG_SEED: &str = "SEED_RNG_SEED";

/// Default identity service endpoint (local emulator)
pub const DEFAULT_IDENTITY_URL: &str = "http://localhost:9099";

/// Default document store endpoint (local emulator)
pub const DEFAULT_STORE_URL: &str = "http://localhost:8080";

// =============================================================================
// Data generation
// =============================================================================

/// Default RNG seed, fixed so runs against an empty environment repeat
pub const DEFAULT_RNG_SEED: u64 = 0;

/// Format string for generated phone numbers ('#' becomes a digit)
pub const PHONE_FORMAT: &str = "+1##########";

/// Minimum generated password length
pub const MIN_PASSWORD_LENGTH: usize = 12;

/// Maximum generated password length
pub const MAX_PASSWORD_LENGTH: usize = 24;

/// Exclusive upper bound for a store user's starting experience points
pub const XP_CEILING: u32 = 10_000;

/// Percent chance a generated user's email is marked verified
pub const CHANCE_EMAIL_VERIFIED: u8 = 50;

/// Percent chance a generated user starts disabled
pub const CHANCE_DISABLED: u8 = 25;

// =============================================================================
// Report exports
// =============================================================================

/// Export path for created auth users
pub const EXPORT_AUTH_USERS: &str = "auth_users.csv";

/// Export path for created company documents
pub const EXPORT_COMPANIES: &str = "store_companies.csv";

/// Export path for created store user documents
pub const EXPORT_STORE_USERS: &str = "store_users.csv";
