//! Identity service client.
//!
//! The `IdentityService` trait is the seam consumed by the seeding services;
//! `RestIdentityClient` implements it against the service's admin REST API.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::domain::AuthUserRecord;
use crate::errors::{SeedError, SeedResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Lightweight handle to a user owned by the identity service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityUser {
    pub uid: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Identity service operations used by the seeder.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// List every user known to the service, in service order.
    async fn list_users(&self) -> SeedResult<Vec<IdentityUser>>;

    /// Create a durable user record. Fails on duplicate email or phone.
    async fn create_user(&self, user: &AuthUserRecord) -> SeedResult<()>;
}

/// REST client for the identity service's admin API.
pub struct RestIdentityClient {
    http: reqwest::Client,
    base_url: String,
    project_id: String,
    api_token: String,
}

impl RestIdentityClient {
    /// Build a client from configuration.
    pub fn new(config: &Config) -> SeedResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SeedError::service_unavailable("identity", e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.identity_url.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
            api_token: config.api_token().to_string(),
        })
    }

    fn accounts_url(&self) -> String {
        format!("{}/v1/projects/{}/accounts", self.base_url, self.project_id)
    }
}

/// Create-account request body.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateAccountBody<'a> {
    email: &'a str,
    email_verified: bool,
    phone_number: &'a str,
    password: &'a str,
    display_name: &'a str,
    photo_url: &'a str,
    disabled: bool,
}

/// Account listing response body.
#[derive(Deserialize)]
struct AccountPage {
    #[serde(default)]
    users: Vec<IdentityUser>,
}

#[async_trait]
impl IdentityService for RestIdentityClient {
    async fn list_users(&self) -> SeedResult<Vec<IdentityUser>> {
        let response = self
            .http
            .get(self.accounts_url())
            .bearer_auth(&self.api_token)
            .send()
            .await?
            .error_for_status()?;

        let page: AccountPage = response.json().await?;
        Ok(page.users)
    }

    async fn create_user(&self, user: &AuthUserRecord) -> SeedResult<()> {
        let body = CreateAccountBody {
            email: &user.email,
            email_verified: user.email_verified,
            phone_number: &user.phone_number,
            password: &user.password,
            display_name: &user.display_name,
            photo_url: &user.photo_url,
            disabled: user.disabled,
        };

        let response = self
            .http
            .post(self.accounts_url())
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::CONFLICT {
            return Err(SeedError::remote_write(
                "identity accounts",
                format!("duplicate account for {}", user.email),
            ));
        }
        if !status.is_success() {
            return Err(SeedError::remote_write(
                "identity accounts",
                format!("create returned {status}"),
            ));
        }
        Ok(())
    }
}
