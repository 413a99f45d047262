//! Document-store company record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::SeedResult;

/// A company document.
///
/// The uid stays empty until the store seeder allocates a document id; the
/// `Users` array only ever grows, through additive union updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StoreCompanyRecord {
    pub uid: String,
    pub name: String,
    #[serde(default)]
    pub users: Vec<String>,
}

impl StoreCompanyRecord {
    /// Fresh record with no assigned uid and no users.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            uid: String::new(),
            name: name.into(),
            users: Vec::new(),
        }
    }

    /// Canonical document field map for this record.
    pub fn to_fields(&self) -> SeedResult<Map<String, Value>> {
        super::record_to_fields("company", self)
    }

    /// Parse a stored document; missing or mistyped fields are rejected.
    pub fn from_fields(id: &str, fields: Map<String, Value>) -> SeedResult<Self> {
        super::record_from_fields("company", id, fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SeedError;

    #[test]
    fn new_company_has_no_uid_and_no_users() {
        let company = StoreCompanyRecord::new("Tremblay et Fils");
        assert!(company.uid.is_empty());
        assert!(company.users.is_empty());
    }

    #[test]
    fn fields_round_trip() {
        let company = StoreCompanyRecord {
            uid: "doc-9".to_string(),
            name: "Roy Inc".to_string(),
            users: vec!["u1".to_string(), "u2".to_string()],
        };
        let fields = company.to_fields().unwrap();
        assert_eq!(
            StoreCompanyRecord::from_fields("doc-9", fields).unwrap(),
            company
        );
    }

    #[test]
    fn missing_users_defaults_to_empty() {
        let mut fields = StoreCompanyRecord::new("Roy Inc").to_fields().unwrap();
        fields.remove("Users");
        let company = StoreCompanyRecord::from_fields("doc-9", fields).unwrap();
        assert!(company.users.is_empty());
    }

    #[test]
    fn missing_name_is_malformed() {
        let mut fields = StoreCompanyRecord::new("Roy Inc").to_fields().unwrap();
        fields.remove("Name");
        let result = StoreCompanyRecord::from_fields("doc-9", fields);
        assert!(matches!(result, Err(SeedError::MalformedRecord { .. })));
    }
}
