//! Owned engine state: the record store plus the current filter criteria.
//!
//! Every mutating call returns a freshly computed [`DashboardSnapshot`].
//! Mutation needs `&mut self`, so no append can interleave with a read of
//! the same dashboard.

use crate::core::logic::Core;
use crate::core::sample::sample_records;
use crate::core::store::RecordStore;
use crate::errors::AppResult;
use crate::models::filter::{FilterCriteria, FilterUpdate};
use crate::models::record::{RecordInput, SurveyRecord};
use crate::models::summary::DashboardSnapshot;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    store: RecordStore,
    criteria: FilterCriteria,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: RecordStore) -> Self {
        Self {
            store,
            criteria: FilterCriteria::default(),
        }
    }

    /// Dashboard preloaded with the demonstration records.
    pub fn with_sample_data() -> AppResult<Self> {
        let mut store = RecordStore::new();
        store.append_batch(sample_records()?);
        Ok(Self::with_store(store))
    }

    pub fn records(&self) -> &[SurveyRecord] {
        self.store.all()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Manual entry: validate, let the store assign id / created_at.
    pub fn add(&mut self, input: RecordInput) -> AppResult<DashboardSnapshot> {
        input.validate()?;
        let id = self.store.append(input).id.clone();
        info!(%id, "manual record added");
        Ok(self.snapshot())
    }

    /// Import: append fully-formed records verbatim.
    pub fn import(&mut self, records: Vec<SurveyRecord>) -> DashboardSnapshot {
        let n = self.store.append_batch(records);
        info!(count = n, "records imported");
        self.snapshot()
    }

    pub fn update_filters(&mut self, update: FilterUpdate) -> DashboardSnapshot {
        self.criteria.merge(update);
        debug!(criteria = ?self.criteria, "filters updated");
        self.snapshot()
    }

    pub fn reset_filters(&mut self) -> DashboardSnapshot {
        self.criteria = FilterCriteria::default();
        debug!("filters reset");
        self.snapshot()
    }

    /// Current view, recomputed from scratch.
    pub fn snapshot(&self) -> DashboardSnapshot {
        Core::build_snapshot(self.store.all(), &self.criteria)
    }
}
