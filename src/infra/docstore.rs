//! Document store client.
//!
//! The `DocumentStore` trait covers the small slice of the store's surface
//! the seeder needs: collection listing, per-document get/set/update and the
//! additive array-union transform. Document ids are allocated client-side,
//! matching the store SDK's id-less document handle.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::config::Config;
use crate::errors::{SeedError, SeedResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// A stored document: its id plus the raw field map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

/// Document store operations used by the seeder.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Documents of a collection, in the store's natural iteration order.
    /// Also serves as the existence check before any write.
    async fn list(&self, collection: &str) -> SeedResult<Vec<Document>>;

    /// Fetch a single document, if present.
    async fn get(&self, collection: &str, id: &str) -> SeedResult<Option<Document>>;

    /// Create or replace a document under an explicit id.
    async fn set(&self, collection: &str, id: &str, fields: Map<String, Value>) -> SeedResult<()>;

    /// Merge-update fields of an existing document.
    async fn update(&self, collection: &str, id: &str, fields: Map<String, Value>)
        -> SeedResult<()>;

    /// Append elements to an array field, skipping ones already present.
    async fn array_union(
        &self,
        collection: &str,
        id: &str,
        field: &str,
        values: Vec<String>,
    ) -> SeedResult<()>;

    /// Allocate a fresh document id client-side.
    fn new_document_id(&self) -> String;
}

/// REST client for the document store.
pub struct RestDocumentStore {
    http: reqwest::Client,
    base_url: String,
    project_id: String,
    api_token: String,
}

impl RestDocumentStore {
    /// Build a client from configuration.
    pub fn new(config: &Config) -> SeedResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SeedError::service_unavailable("document store", e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.store_url.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
            api_token: config.api_token().to_string(),
        })
    }

    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/v1/projects/{}/collections/{}/documents",
            self.base_url, self.project_id, collection
        )
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}", self.collection_url(collection), id)
    }

    async fn write(
        &self,
        method: reqwest::Method,
        url: String,
        target: String,
        body: &impl Serialize,
    ) -> SeedResult<()> {
        let response = self
            .http
            .request(method, url)
            .bearer_auth(&self.api_token)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SeedError::remote_write(target, format!("returned {status}")));
        }
        Ok(())
    }
}

/// Collection listing response body.
#[derive(Deserialize)]
struct DocumentPage {
    #[serde(default)]
    documents: Vec<Document>,
}

/// Plain field write body.
#[derive(Serialize)]
struct WriteBody<'a> {
    fields: &'a Map<String, Value>,
}

/// Field transform write body.
#[derive(Serialize)]
struct TransformBody<'a> {
    transforms: Vec<Transform<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Transform<'a> {
    field: &'a str,
    append_missing_elements: &'a [String],
}

#[async_trait]
impl DocumentStore for RestDocumentStore {
    async fn list(&self, collection: &str) -> SeedResult<Vec<Document>> {
        let response = self
            .http
            .get(self.collection_url(collection))
            .bearer_auth(&self.api_token)
            .send()
            .await?
            .error_for_status()?;

        let page: DocumentPage = response.json().await?;
        Ok(page.documents)
    }

    async fn get(&self, collection: &str, id: &str) -> SeedResult<Option<Document>> {
        let response = self
            .http
            .get(self.document_url(collection, id))
            .bearer_auth(&self.api_token)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let document: Document = response.error_for_status()?.json().await?;
        Ok(Some(document))
    }

    async fn set(&self, collection: &str, id: &str, fields: Map<String, Value>) -> SeedResult<()> {
        self.write(
            reqwest::Method::PUT,
            self.document_url(collection, id),
            format!("{collection}/{id}"),
            &WriteBody { fields: &fields },
        )
        .await
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: Map<String, Value>,
    ) -> SeedResult<()> {
        self.write(
            reqwest::Method::PATCH,
            self.document_url(collection, id),
            format!("{collection}/{id}"),
            &WriteBody { fields: &fields },
        )
        .await
    }

    async fn array_union(
        &self,
        collection: &str,
        id: &str,
        field: &str,
        values: Vec<String>,
    ) -> SeedResult<()> {
        self.write(
            reqwest::Method::PATCH,
            self.document_url(collection, id),
            format!("{collection}/{id}"),
            &TransformBody {
                transforms: vec![Transform {
                    field,
                    append_missing_elements: &values,
                }],
            },
        )
        .await
    }

    fn new_document_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}
