//! Record lookup contract at the persistence boundary.

use std::collections::BTreeMap;

use crate::types::{Activity, EmissionFactor};

/// Read-only lookup interface the engine requires from its persistence
/// collaborator.
///
/// Implementations return owned snapshots; the engine never observes later
/// mutations of the underlying records. "Not found" is expressed as `None`
/// and mapped to the appropriate error by the calculator layer.
pub trait RecordStore {
    /// Fetches one emission factor by key.
    fn emission_factor(&self, key: &str) -> Option<EmissionFactor>;

    /// Fetches one activity by id.
    fn activity(&self, id: i64) -> Option<Activity>;
}

/// In-memory [`RecordStore`] used in tests and by callers that assemble
/// records outside a database.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    factors: BTreeMap<String, EmissionFactor>,
    activities: BTreeMap<i64, Activity>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an emission factor, keyed by its `key`.
    pub fn insert_emission_factor(&mut self, factor: EmissionFactor) {
        self.factors.insert(factor.key.clone(), factor);
    }

    /// Inserts or replaces an activity, keyed by its `id`.
    pub fn insert_activity(&mut self, activity: Activity) {
        self.activities.insert(activity.id, activity);
    }

    /// Number of stored emission factors.
    pub fn emission_factor_count(&self) -> usize {
        self.factors.len()
    }

    /// Number of stored activities.
    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }
}

impl RecordStore for InMemoryStore {
    fn emission_factor(&self, key: &str) -> Option<EmissionFactor> {
        self.factors.get(key).cloned()
    }

    fn activity(&self, id: i64) -> Option<Activity> {
        self.activities.get(&id).cloned()
    }
}
