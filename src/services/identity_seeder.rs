//! Identity-service seeding phase.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{BOOTSTRAP_USER_ALLOWANCE, EXPORT_AUTH_USERS};
use crate::domain::AuthUserRecord;
use crate::errors::SeedResult;
use crate::infra::IdentityService;
use crate::report::{self, AuthUserRow, IdentityUserRow};
use crate::services::{DatasetGenerator, SeedOutcome};

/// Seeds the identity service with synthetic auth users.
pub struct IdentitySeeder {
    identity: Arc<dyn IdentityService>,
    generator: DatasetGenerator,
    export_dir: PathBuf,
}

impl IdentitySeeder {
    pub fn new(
        identity: Arc<dyn IdentityService>,
        generator: DatasetGenerator,
        export_dir: PathBuf,
    ) -> Self {
        Self {
            identity,
            generator,
            export_dir,
        }
    }

    /// Create `quantity` users unless the service is already populated.
    ///
    /// Anything beyond a single bootstrap account counts as populated; in
    /// that case the existing users are listed and reported instead of
    /// creating anything. The check is advisory, not transactional.
    pub async fn seed_users(&mut self, quantity: usize) -> SeedResult<SeedOutcome<AuthUserRecord>> {
        let existing = self.identity.list_users().await?;
        if existing.len() > BOOTSTRAP_USER_ALLOWANCE {
            tracing::info!(count = existing.len(), "Identity service already seeded");
            println!("Existing users in the identity service:");
            let rows: Vec<IdentityUserRow> = existing.iter().map(IdentityUserRow::from).collect();
            report::display(&rows);
            return Ok(SeedOutcome::AlreadySeeded(existing.len()));
        }

        let users = self.generator.generate_auth_users(quantity)?;
        // Sequential creates; the first failure aborts the phase with no
        // rollback of users already created.
        for user in &users {
            self.identity.create_user(user).await?;
        }
        tracing::info!(count = users.len(), "Created identity users");

        println!("Created auth users:");
        let rows: Vec<AuthUserRow> = users.iter().map(AuthUserRow::from).collect();
        report::display_and_save(&rows, &self.export_dir.join(EXPORT_AUTH_USERS));

        Ok(SeedOutcome::Created(users))
    }
}
