//! Status command - read-only listing of what is already seeded.

use crate::config::{Config, COLLECTION_COMPANIES, COLLECTION_USERS};
use crate::domain::{StoreCompanyRecord, StoreUserRecord};
use crate::errors::SeedResult;
use crate::report::{self, CompanyRow, IdentityUserRow, StoreUserRow};
use crate::services::SeedContext;

/// Execute the status command
pub async fn execute(config: Config) -> SeedResult<()> {
    let context = SeedContext::initialize(&config);

    match context.identity() {
        Some(identity) => {
            let users = identity.list_users().await?;
            println!("Identity service users ({}):", users.len());
            let rows: Vec<IdentityUserRow> = users.iter().map(IdentityUserRow::from).collect();
            report::display(&rows);
        }
        None => tracing::warn!("Identity service unavailable; skipping user listing"),
    }

    match context.store() {
        Some(store) => {
            let documents = store.list(COLLECTION_COMPANIES).await?;
            println!("Companies ({}):", documents.len());
            let mut rows = Vec::with_capacity(documents.len());
            for document in documents {
                let record = StoreCompanyRecord::from_fields(&document.id, document.fields)?;
                rows.push(CompanyRow::from(&record));
            }
            report::display(&rows);

            let documents = store.list(COLLECTION_USERS).await?;
            println!("Store users ({}):", documents.len());
            let mut rows = Vec::with_capacity(documents.len());
            for document in documents {
                let record = StoreUserRecord::from_fields(&document.id, document.fields)?;
                rows.push(StoreUserRow::from(&record));
            }
            report::display(&rows);
        }
        None => tracing::warn!("Document store unavailable; skipping collection listing"),
    }

    Ok(())
}
