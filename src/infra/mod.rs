//! Infrastructure concerns - clients for the remote services.
//!
//! Both clients are thin wrappers exposing trait seams so the seeding
//! services can be tested against mocks.

pub mod docstore;
pub mod identity;

pub use docstore::{Document, DocumentStore, RestDocumentStore};
pub use identity::{IdentityService, IdentityUser, RestIdentityClient};

#[cfg(any(test, feature = "test-utils"))]
pub use docstore::MockDocumentStore;
#[cfg(any(test, feature = "test-utils"))]
pub use identity::MockIdentityService;
