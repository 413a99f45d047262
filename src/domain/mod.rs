//! Domain layer - entity models seeded into the remote services.
//!
//! Store-backed records serialize to and from the document store's canonical
//! field maps through explicit, validated conversions; a document missing a
//! required key is rejected as `MalformedRecord` instead of panicking.

pub mod auth_user;
pub mod company;
pub mod store_user;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::{SeedError, SeedResult};

pub use auth_user::AuthUserRecord;
pub use company::StoreCompanyRecord;
pub use store_user::{split_display_name, StoreUserRecord};

/// Serialize a record into a document field map.
fn record_to_fields<T: Serialize>(kind: &'static str, record: &T) -> SeedResult<Map<String, Value>> {
    match serde_json::to_value(record) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(other) => Err(SeedError::malformed(
            kind,
            "(unsaved)",
            format!("serialized to {other:?} instead of an object"),
        )),
        Err(e) => Err(SeedError::malformed(kind, "(unsaved)", e.to_string())),
    }
}

/// Deserialize a document field map into a record, validating the field set.
fn record_from_fields<T: DeserializeOwned>(
    kind: &'static str,
    id: &str,
    fields: Map<String, Value>,
) -> SeedResult<T> {
    serde_json::from_value(Value::Object(fields)).map_err(|e| SeedError::malformed(kind, id, e.to_string()))
}
