//! Identity seeder unit tests.

use std::sync::Arc;

use seedctl::errors::SeedError;
use seedctl::infra::{IdentityUser, MockIdentityService};
use seedctl::services::{DatasetGenerator, IdentitySeeder, SeedOutcome};

fn existing_user(index: usize) -> IdentityUser {
    IdentityUser {
        uid: format!("uid-{index}"),
        display_name: Some(format!("Existing User {index}")),
    }
}

fn seeder(identity: MockIdentityService) -> (IdentitySeeder, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let seeder = IdentitySeeder::new(
        Arc::new(identity),
        DatasetGenerator::with_seed(0),
        dir.path().to_path_buf(),
    );
    (seeder, dir)
}

#[tokio::test]
async fn creates_requested_users_when_service_is_empty() {
    let mut identity = MockIdentityService::new();
    identity.expect_list_users().returning(|| Ok(Vec::new()));
    identity.expect_create_user().times(5).returning(|_| Ok(()));

    let (mut seeder, _dir) = seeder(identity);
    let outcome = seeder.seed_users(5).await.unwrap();

    match outcome {
        SeedOutcome::Created(users) => assert_eq!(users.len(), 5),
        SeedOutcome::AlreadySeeded(_) => panic!("expected a fresh seeding run"),
    }
}

#[tokio::test]
async fn single_bootstrap_account_does_not_block_seeding() {
    let mut identity = MockIdentityService::new();
    identity
        .expect_list_users()
        .returning(|| Ok(vec![existing_user(0)]));
    identity.expect_create_user().times(3).returning(|_| Ok(()));

    let (mut seeder, _dir) = seeder(identity);
    let outcome = seeder.seed_users(3).await.unwrap();
    assert!(outcome.is_created());
}

#[tokio::test]
async fn populated_service_is_a_noop_listing() {
    let mut identity = MockIdentityService::new();
    identity
        .expect_list_users()
        .times(1)
        .returning(|| Ok(vec![existing_user(0), existing_user(1)]));
    // No create_user expectation: any create call fails the test.

    let (mut seeder, _dir) = seeder(identity);
    let outcome = seeder.seed_users(5).await.unwrap();

    match outcome {
        SeedOutcome::AlreadySeeded(count) => assert_eq!(count, 2),
        SeedOutcome::Created(_) => panic!("expected a no-op"),
    }
}

#[tokio::test]
async fn first_create_failure_aborts_the_phase() {
    let mut identity = MockIdentityService::new();
    identity.expect_list_users().returning(|| Ok(Vec::new()));
    identity.expect_create_user().times(1).returning(|user| {
        Err(SeedError::remote_write(
            "identity accounts",
            format!("duplicate account for {}", user.email),
        ))
    });

    let (mut seeder, _dir) = seeder(identity);
    let result = seeder.seed_users(4).await;
    assert!(matches!(result, Err(SeedError::RemoteWrite { .. })));
}
