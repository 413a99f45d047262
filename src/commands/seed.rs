//! Seed command - runs the full seeding orchestration.
//!
//! Phase order: identity users, then company documents, then store user
//! documents, then assignment. Assignment only follows a run that freshly
//! created the `Users` collection. An unavailable client skips its
//! dependent phases; within a phase the first error aborts that phase.

use crate::cli::args::SeedArgs;
use crate::config::{Config, COLLECTION_COMPANIES};
use crate::domain::StoreCompanyRecord;
use crate::errors::SeedResult;
use crate::services::{
    AssignmentEngine, DatasetGenerator, IdentitySeeder, SeedContext, StoreSeeder,
};

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: Config) -> SeedResult<()> {
    let user_quantity = args.users.unwrap_or(config.user_quantity);
    let company_quantity = args.companies.unwrap_or(config.company_quantity);
    let rng_seed = args.seed.unwrap_or(config.rng_seed);
    tracing::info!(
        users = user_quantity,
        companies = company_quantity,
        seed = rng_seed,
        "Seeding"
    );

    let context = SeedContext::initialize(&config);

    seed_identity(&context, user_quantity, rng_seed, &args).await?;
    seed_store(&context, company_quantity, rng_seed, &args).await?;

    Ok(())
}

/// Identity phase: create auth users unless the service is populated.
async fn seed_identity(
    context: &SeedContext,
    quantity: usize,
    rng_seed: u64,
    args: &SeedArgs,
) -> SeedResult<()> {
    let Some(identity) = context.identity() else {
        tracing::warn!("Identity service unavailable; skipping identity seeding");
        return Ok(());
    };

    let mut seeder = IdentitySeeder::new(
        identity,
        DatasetGenerator::with_seed(rng_seed),
        args.out_dir.clone(),
    );
    seeder.seed_users(quantity).await?;
    Ok(())
}

/// Store phases: companies, users, then assignment on the fresh-users path.
async fn seed_store(
    context: &SeedContext,
    company_quantity: usize,
    rng_seed: u64,
    args: &SeedArgs,
) -> SeedResult<()> {
    let Some(store) = context.store() else {
        tracing::warn!("Document store unavailable; skipping document seeding");
        return Ok(());
    };
    let Some(identity) = context.identity() else {
        tracing::warn!("Identity service unavailable; skipping document seeding");
        return Ok(());
    };

    let mut seeder = StoreSeeder::new(
        Some(store.clone()),
        identity.clone(),
        DatasetGenerator::with_seed(rng_seed),
        args.out_dir.clone(),
    );
    seeder.seed_companies(company_quantity).await?;
    let users_outcome = seeder.seed_users().await?;

    if users_outcome.is_created() {
        // Companies come back in the store's natural iteration order; the
        // pool is a fresh identity listing.
        let documents = store.list(COLLECTION_COMPANIES).await?;
        let mut companies = Vec::with_capacity(documents.len());
        for document in documents {
            companies.push(StoreCompanyRecord::from_fields(&document.id, document.fields)?);
        }
        let pool = identity.list_users().await?;

        let mut engine = AssignmentEngine::new(store, rng_seed);
        engine.assign(&companies, pool).await?;
    }

    Ok(())
}
