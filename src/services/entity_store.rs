//! Generic in-memory record store shared by both simulators.
//!
//! Records live in an ordered sequence for the life of the process:
//! seeded at startup, mutated by endpoint handlers, discarded on exit.
//! The store is constructed explicitly and injected into the HTTP
//! layer; there are no process-wide singletons.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::ports::Keyed;

/// One window of filtered records plus the pre-pagination count.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Filtered count before the window was applied.
    pub total: usize,
    pub items: Vec<T>,
}

/// Window a fully materialized list the way `EntityStore::page` does.
///
/// Used for derived collections (e.g. vehicles flattened out of their
/// shipments) that never live in a store of their own.
pub fn paginate<T>(items: Vec<T>, page: usize, limit: usize) -> Page<T> {
    let total = items.len();
    let start = (page.max(1) - 1).saturating_mul(limit);
    let items = items.into_iter().skip(start).take(limit).collect();
    Page { total, items }
}

/// Ordered in-memory store keyed by record id.
///
/// Lookups scan in insertion order. `insert` never enforces uniqueness;
/// the id generators are best-effort random, as in the APIs being
/// simulated.
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T: Keyed + Clone> EntityStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with seed records.
    pub fn seeded(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Replace the store contents. Called once at startup.
    pub async fn seed(&self, records: Vec<T>) {
        *self.records.write().await = records;
    }

    /// Look up a record by id.
    pub async fn get(&self, id: &str) -> Option<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.key() == id)
            .cloned()
    }

    /// Append a record. The caller supplies the generated id.
    pub async fn insert(&self, record: T) {
        self.records.write().await.push(record);
    }

    /// Mutate the record with the given id in place, returning the
    /// mutated record, or `None` when the id is absent.
    pub async fn update<F>(&self, id: &str, mutate: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut records = self.records.write().await;
        let record = records.iter_mut().find(|r| r.key() == id)?;
        mutate(record);
        Some(record.clone())
    }

    /// All records matching the predicate, in insertion order.
    pub async fn filtered<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.records
            .read()
            .await
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }

    /// 1-based page over the filtered records.
    ///
    /// Slice bounds are `[(page-1)*limit, page*limit)`; an out-of-range
    /// page yields an empty slice, not an error. Page numbers below 1
    /// are clamped to 1.
    pub async fn page<F>(&self, predicate: F, page: usize, limit: usize) -> Page<T>
    where
        F: Fn(&T) -> bool,
    {
        let start = (page.max(1) - 1).saturating_mul(limit);
        self.window(predicate, start, limit).await
    }

    /// 0-based offset window over the filtered records.
    pub async fn slice<F>(&self, predicate: F, offset: usize, limit: usize) -> Page<T>
    where
        F: Fn(&T) -> bool,
    {
        self.window(predicate, offset, limit).await
    }

    async fn window<F>(&self, predicate: F, start: usize, limit: usize) -> Page<T>
    where
        F: Fn(&T) -> bool,
    {
        let records = self.records.read().await;
        let matched: Vec<&T> = records.iter().filter(|r| predicate(r)).collect();
        let total = matched.len();
        let items = matched.into_iter().skip(start).take(limit).cloned().collect();
        Page { total, items }
    }
}
