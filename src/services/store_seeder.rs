//! Document-store seeding phases: companies and users.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{COLLECTION_COMPANIES, COLLECTION_USERS, EXPORT_COMPANIES, EXPORT_STORE_USERS};
use crate::domain::{split_display_name, StoreCompanyRecord, StoreUserRecord};
use crate::errors::{SeedError, SeedResult};
use crate::infra::{DocumentStore, IdentityService};
use crate::report::{self, CompanyRow, StoreUserRow};
use crate::services::{DatasetGenerator, SeedOutcome};

/// Seeds the document store's company and user collections.
///
/// Holds an optional store handle so a client that failed to initialize
/// surfaces as `StoreUnavailable` on first use instead of a panic.
pub struct StoreSeeder {
    store: Option<Arc<dyn DocumentStore>>,
    identity: Arc<dyn IdentityService>,
    generator: DatasetGenerator,
    export_dir: PathBuf,
}

impl StoreSeeder {
    pub fn new(
        store: Option<Arc<dyn DocumentStore>>,
        identity: Arc<dyn IdentityService>,
        generator: DatasetGenerator,
        export_dir: PathBuf,
    ) -> Self {
        Self {
            store,
            identity,
            generator,
            export_dir,
        }
    }

    /// The live store handle, checked before any read or write.
    fn store(&self) -> SeedResult<Arc<dyn DocumentStore>> {
        self.store.clone().ok_or(SeedError::StoreUnavailable)
    }

    /// Create `quantity` company documents unless the collection already
    /// holds any. Each document gets a client-allocated id, recorded back
    /// onto the in-memory record before the write.
    pub async fn seed_companies(
        &mut self,
        quantity: usize,
    ) -> SeedResult<SeedOutcome<StoreCompanyRecord>> {
        let store = self.store()?;

        let existing = store.list(COLLECTION_COMPANIES).await?;
        if !existing.is_empty() {
            tracing::info!(count = existing.len(), "Companies collection already seeded");
            println!("Existing companies in the document store:");
            let mut rows = Vec::with_capacity(existing.len());
            for document in &existing {
                let record =
                    StoreCompanyRecord::from_fields(&document.id, document.fields.clone())?;
                rows.push(CompanyRow::from(&record));
            }
            report::display(&rows);
            return Ok(SeedOutcome::AlreadySeeded(existing.len()));
        }

        let names = self.generator.generate_company_names(quantity);
        let mut companies = Vec::with_capacity(names.len());
        for name in names {
            let mut company = StoreCompanyRecord::new(name);
            let id = store.new_document_id();
            company.uid = id.clone();
            store
                .set(COLLECTION_COMPANIES, &id, company.to_fields()?)
                .await?;
            companies.push(company);
        }
        tracing::info!(count = companies.len(), "Created company documents");

        println!("Created companies:");
        let rows: Vec<CompanyRow> = companies.iter().map(CompanyRow::from).collect();
        report::display_and_save(&rows, &self.export_dir.join(EXPORT_COMPANIES));

        Ok(SeedOutcome::Created(companies))
    }

    /// Mirror every identity-service user into the `Users` collection,
    /// unless it already holds any document. Each record is upserted under
    /// its identity uid: update when the document exists, set otherwise.
    pub async fn seed_users(&mut self) -> SeedResult<SeedOutcome<StoreUserRecord>> {
        let store = self.store()?;

        let existing = store.list(COLLECTION_USERS).await?;
        if !existing.is_empty() {
            tracing::info!(count = existing.len(), "Users collection already seeded");
            println!("Existing users in the document store:");
            let mut rows = Vec::with_capacity(existing.len());
            for document in &existing {
                let record = StoreUserRecord::from_fields(&document.id, document.fields.clone())?;
                rows.push(StoreUserRow::from(&record));
            }
            report::display(&rows);
            return Ok(SeedOutcome::AlreadySeeded(existing.len()));
        }

        let identity_users = self.identity.list_users().await?;
        let mut records = Vec::with_capacity(identity_users.len());
        for user in &identity_users {
            let (first_name, last_name) = split_display_name(user.display_name.as_deref());
            records.push(StoreUserRecord {
                uid: user.uid.clone(),
                first_name,
                last_name,
                xp: self.generator.random_xp(),
                achievements: Vec::new(),
            });
        }

        for record in &records {
            match store.get(COLLECTION_USERS, &record.uid).await? {
                Some(_) => {
                    store
                        .update(COLLECTION_USERS, &record.uid, record.to_fields()?)
                        .await?
                }
                None => {
                    store
                        .set(COLLECTION_USERS, &record.uid, record.to_fields()?)
                        .await?
                }
            }
        }
        tracing::info!(count = records.len(), "Created store user documents");

        println!("Created store users:");
        let rows: Vec<StoreUserRow> = records.iter().map(StoreUserRow::from).collect();
        report::display_and_save(&rows, &self.export_dir.join(EXPORT_STORE_USERS));

        Ok(SeedOutcome::Created(records))
    }
}
