//! Row types rendered by the reporting sink.
//!
//! Rows flatten list fields for tabular output and never carry passwords.

use serde::Serialize;
use tabled::Tabled;

use crate::domain::{AuthUserRecord, StoreCompanyRecord, StoreUserRecord};
use crate::infra::IdentityUser;

/// A created auth user, with the password withheld.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct AuthUserRow {
    pub email: String,
    pub email_verified: bool,
    pub phone_number: String,
    pub display_name: String,
    pub photo_url: String,
    pub disabled: bool,
}

impl From<&AuthUserRecord> for AuthUserRow {
    fn from(record: &AuthUserRecord) -> Self {
        Self {
            email: record.email.clone(),
            email_verified: record.email_verified,
            phone_number: record.phone_number.clone(),
            display_name: record.display_name.clone(),
            photo_url: record.photo_url.clone(),
            disabled: record.disabled,
        }
    }
}

/// An existing identity-service user.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct IdentityUserRow {
    pub display_name: String,
    pub uid: String,
}

impl From<&IdentityUser> for IdentityUserRow {
    fn from(user: &IdentityUser) -> Self {
        Self {
            display_name: user.display_name.clone().unwrap_or_default(),
            uid: user.uid.clone(),
        }
    }
}

/// A company document.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct CompanyRow {
    pub uid: String,
    pub name: String,
    pub users: String,
}

impl From<&StoreCompanyRecord> for CompanyRow {
    fn from(record: &StoreCompanyRecord) -> Self {
        Self {
            uid: record.uid.clone(),
            name: record.name.clone(),
            users: record.users.join(", "),
        }
    }
}

/// A store user document.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct StoreUserRow {
    pub uid: String,
    pub first_name: String,
    pub last_name: String,
    pub xp: u32,
    pub achievements: String,
}

impl From<&StoreUserRecord> for StoreUserRow {
    fn from(record: &StoreUserRecord) -> Self {
        Self {
            uid: record.uid.clone(),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            xp: record.xp,
            achievements: record.achievements.join(", "),
        }
    }
}

/// One user placed into one company.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct AssignmentRow {
    pub company: String,
    pub user_uid: String,
}
