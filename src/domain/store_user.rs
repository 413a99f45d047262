//! Document-store user record and display-name splitting.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::SeedResult;

/// A user document, keyed by its identity-service uid.
///
/// Stored under PascalCase field names, the collection's historical schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StoreUserRecord {
    pub uid: String,
    pub first_name: String,
    pub last_name: String,
    pub xp: u32,
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl StoreUserRecord {
    /// Canonical document field map for this record.
    pub fn to_fields(&self) -> SeedResult<Map<String, Value>> {
        super::record_to_fields("user", self)
    }

    /// Parse a stored document; missing or mistyped fields are rejected.
    pub fn from_fields(id: &str, fields: Map<String, Value>) -> SeedResult<Self> {
        super::record_from_fields("user", id, fields)
    }
}

/// Split a display name into first and last parts.
///
/// Zero or one whitespace token yields an empty last name; with more than
/// two tokens the remainder folds into the last name.
pub fn split_display_name(display_name: Option<&str>) -> (String, String) {
    let mut tokens = display_name.unwrap_or("").split_whitespace();
    let first = tokens.next().unwrap_or("").to_string();
    let last = tokens.collect::<Vec<_>>().join(" ");
    (first, last)
}
