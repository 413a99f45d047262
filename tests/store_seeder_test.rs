//! Store seeder unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use seedctl::config::XP_CEILING;
use seedctl::domain::{StoreCompanyRecord, StoreUserRecord};
use seedctl::errors::SeedError;
use seedctl::infra::{Document, IdentityUser, MockDocumentStore, MockIdentityService};
use seedctl::services::{DatasetGenerator, SeedOutcome, StoreSeeder};

fn seeder(
    store: Option<MockDocumentStore>,
    identity: MockIdentityService,
) -> (StoreSeeder, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let seeder = StoreSeeder::new(
        store.map(|s| Arc::new(s) as Arc<dyn seedctl::infra::DocumentStore>),
        Arc::new(identity),
        DatasetGenerator::with_seed(0),
        dir.path().to_path_buf(),
    );
    (seeder, dir)
}

fn company_document(id: &str, name: &str) -> Document {
    let record = StoreCompanyRecord {
        uid: id.to_string(),
        name: name.to_string(),
        users: Vec::new(),
    };
    Document {
        id: id.to_string(),
        fields: record.to_fields().unwrap(),
    }
}

fn user_document(uid: &str) -> Document {
    let record = StoreUserRecord {
        uid: uid.to_string(),
        first_name: "Existing".to_string(),
        last_name: "User".to_string(),
        xp: 1,
        achievements: Vec::new(),
    };
    Document {
        id: uid.to_string(),
        fields: record.to_fields().unwrap(),
    }
}

#[tokio::test]
async fn missing_store_handle_fails_fast() {
    let (mut seeder, _dir) = seeder(None, MockIdentityService::new());

    let companies = seeder.seed_companies(3).await;
    assert!(matches!(companies, Err(SeedError::StoreUnavailable)));

    let users = seeder.seed_users().await;
    assert!(matches!(users, Err(SeedError::StoreUnavailable)));
}

#[tokio::test]
async fn seed_companies_creates_documents_with_allocated_ids() {
    let mut store = MockDocumentStore::new();
    store
        .expect_list()
        .withf(|collection| collection == "Companies")
        .returning(|_| Ok(Vec::new()));

    let counter = AtomicUsize::new(0);
    store.expect_new_document_id().returning(move || {
        format!("doc-{}", counter.fetch_add(1, Ordering::SeqCst))
    });
    store
        .expect_set()
        .withf(|collection, id, fields| {
            collection == "Companies"
                && fields.get("Uid").and_then(|v| v.as_str()) == Some(id)
                && fields
                    .get("Users")
                    .and_then(|v| v.as_array())
                    .is_some_and(|users| users.is_empty())
        })
        .times(3)
        .returning(|_, _, _| Ok(()));

    let (mut seeder, _dir) = seeder(Some(store), MockIdentityService::new());
    let outcome = seeder.seed_companies(3).await.unwrap();

    match outcome {
        SeedOutcome::Created(companies) => {
            assert_eq!(companies.len(), 3);
            assert!(companies.iter().all(|c| !c.uid.is_empty()));
            assert!(companies.iter().all(|c| c.users.is_empty()));
        }
        SeedOutcome::AlreadySeeded(_) => panic!("expected a fresh seeding run"),
    }
}

#[tokio::test]
async fn populated_companies_collection_is_a_noop() {
    let mut store = MockDocumentStore::new();
    store
        .expect_list()
        .withf(|collection| collection == "Companies")
        .times(1)
        .returning(|_| Ok(vec![company_document("doc-0", "Roy Inc")]));
    // No set expectation: any write fails the test.

    let (mut seeder, _dir) = seeder(Some(store), MockIdentityService::new());
    let outcome = seeder.seed_companies(3).await.unwrap();
    assert!(matches!(outcome, SeedOutcome::AlreadySeeded(1)));
}

#[tokio::test]
async fn seed_users_maps_identity_listing_with_split_names() {
    let mut identity = MockIdentityService::new();
    identity.expect_list_users().returning(|| {
        Ok(vec![
            IdentityUser {
                uid: "u1".to_string(),
                display_name: Some("Ada Lovelace".to_string()),
            },
            IdentityUser {
                uid: "u2".to_string(),
                display_name: None,
            },
            IdentityUser {
                uid: "u3".to_string(),
                display_name: Some("Cher".to_string()),
            },
        ])
    });

    let mut store = MockDocumentStore::new();
    store
        .expect_list()
        .withf(|collection| collection == "Users")
        .returning(|_| Ok(Vec::new()));
    store
        .expect_get()
        .withf(|collection, _id| collection == "Users")
        .times(3)
        .returning(|_, _| Ok(None));
    store
        .expect_set()
        .withf(|collection, id, fields| {
            collection == "Users" && fields.get("Uid").and_then(|v| v.as_str()) == Some(id)
        })
        .times(3)
        .returning(|_, _, _| Ok(()));

    let (mut seeder, _dir) = seeder(Some(store), identity);
    let outcome = seeder.seed_users().await.unwrap();

    let SeedOutcome::Created(records) = outcome else {
        panic!("expected a fresh seeding run");
    };
    assert_eq!(records.len(), 3);

    assert_eq!(records[0].first_name, "Ada");
    assert_eq!(records[0].last_name, "Lovelace");
    assert_eq!(records[1].first_name, "");
    assert_eq!(records[1].last_name, "");
    assert_eq!(records[2].first_name, "Cher");
    assert_eq!(records[2].last_name, "");

    for record in &records {
        assert!(record.xp < XP_CEILING);
        assert!(record.achievements.is_empty());
    }
}

#[tokio::test]
async fn seed_users_updates_documents_that_already_exist() {
    let mut identity = MockIdentityService::new();
    identity.expect_list_users().returning(|| {
        Ok(vec![IdentityUser {
            uid: "u1".to_string(),
            display_name: Some("Ada Lovelace".to_string()),
        }])
    });

    let mut store = MockDocumentStore::new();
    store
        .expect_list()
        .withf(|collection| collection == "Users")
        .returning(|_| Ok(Vec::new()));
    store
        .expect_get()
        .withf(|collection, id| collection == "Users" && id == "u1")
        .returning(|_, id| Ok(Some(user_document(id))));
    store
        .expect_update()
        .withf(|collection, id, _fields| collection == "Users" && id == "u1")
        .times(1)
        .returning(|_, _, _| Ok(()));
    // No set expectation: the existing document must be updated, not replaced.

    let (mut seeder, _dir) = seeder(Some(store), identity);
    let outcome = seeder.seed_users().await.unwrap();
    assert!(outcome.is_created());
}

#[tokio::test]
async fn populated_users_collection_is_a_noop() {
    let identity = MockIdentityService::new();
    // No list_users expectation: the identity service must not be consulted.

    let mut store = MockDocumentStore::new();
    store
        .expect_list()
        .withf(|collection| collection == "Users")
        .times(1)
        .returning(|_| Ok(vec![user_document("u1")]));

    let (mut seeder, _dir) = seeder(Some(store), identity);
    let outcome = seeder.seed_users().await.unwrap();
    assert!(matches!(outcome, SeedOutcome::AlreadySeeded(1)));
}
