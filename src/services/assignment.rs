//! Randomized assignment of identity users to companies.
//!
//! The pool is one mutable sequence consumed destructively across companies
//! in store iteration order. Each company's draw is capped at half of
//! whatever remains, and drafted users come off the pool's tail, so later
//! companies see a smaller pool and some users can stay unassigned. That
//! decaying, tail-biased distribution is the intended behavior; full
//! exhaustion is out of scope.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{COLLECTION_COMPANIES, FIELD_USERS};
use crate::domain::StoreCompanyRecord;
use crate::errors::SeedResult;
use crate::infra::{DocumentStore, IdentityUser};
use crate::report::{self, AssignmentRow};

/// Users drafted for one company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyAssignment {
    pub company_uid: String,
    pub company_name: String,
    pub user_uids: Vec<String>,
}

/// Result of partitioning the pool across companies.
#[derive(Debug)]
pub struct PartitionOutcome {
    pub assignments: Vec<CompanyAssignment>,
    pub remaining: Vec<IdentityUser>,
}

/// Partition `pool` across `companies` in the given order.
///
/// For each company the draw size is uniform in `[0, r/2]` inclusive, where
/// `r` is the pool size at that step; drafted users are popped off the
/// pool's tail. An exhausted pool leaves every later company empty.
pub fn partition_pool(
    companies: &[StoreCompanyRecord],
    mut pool: Vec<IdentityUser>,
    rng: &mut StdRng,
) -> PartitionOutcome {
    let mut assignments = Vec::with_capacity(companies.len());
    for company in companies {
        let remaining = pool.len();
        let mut user_uids = Vec::new();
        if remaining > 0 {
            let quota = rng.gen_range(0..=remaining / 2);
            while user_uids.len() < quota {
                match pool.pop() {
                    Some(user) => user_uids.push(user.uid),
                    None => break,
                }
            }
        }
        assignments.push(CompanyAssignment {
            company_uid: company.uid.clone(),
            company_name: company.name.clone(),
            user_uids,
        });
    }
    PartitionOutcome {
        assignments,
        remaining: pool,
    }
}

/// Persists pool partitions as array-union updates on company documents.
pub struct AssignmentEngine {
    store: Arc<dyn DocumentStore>,
    rng: StdRng,
}

impl AssignmentEngine {
    pub fn new(store: Arc<dyn DocumentStore>, seed: u64) -> Self {
        Self {
            store,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Partition `pool` across `companies` and persist every drafted uid
    /// with one additive union update per user. Returns the per-user rows
    /// after reporting them.
    pub async fn assign(
        &mut self,
        companies: &[StoreCompanyRecord],
        pool: Vec<IdentityUser>,
    ) -> SeedResult<Vec<AssignmentRow>> {
        let pool_size = pool.len();
        let outcome = partition_pool(companies, pool, &mut self.rng);

        let mut rows = Vec::new();
        for assignment in &outcome.assignments {
            for uid in &assignment.user_uids {
                self.store
                    .array_union(
                        COLLECTION_COMPANIES,
                        &assignment.company_uid,
                        FIELD_USERS,
                        vec![uid.clone()],
                    )
                    .await?;
                rows.push(AssignmentRow {
                    company: assignment.company_name.clone(),
                    user_uid: uid.clone(),
                });
            }
        }
        tracing::info!(
            pool = pool_size,
            assigned = rows.len(),
            unassigned = outcome.remaining.len(),
            "Assigned users to companies"
        );

        if !rows.is_empty() {
            println!("Users added to companies:");
            report::display(&rows);
        }
        Ok(rows)
    }
}
