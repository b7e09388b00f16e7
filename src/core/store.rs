//! Canonical, append-only record collection.

use crate::models::record::{RecordInput, SurveyRecord};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Time source used when the store stamps `created_at`.
pub type Clock = fn() -> DateTime<Utc>;

#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<SurveyRecord>,
    next_seq: u64,
    last_stamp: Option<DateTime<Utc>>,
    clock: Clock,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self {
            records: Vec::new(),
            next_seq: 1,
            last_stamp: None,
            clock,
        }
    }

    /// Append one record at the end.
    ///
    /// Missing `id` / `created_at` are assigned here; values supplied by
    /// the caller are kept as they are.
    pub fn append(&mut self, input: impl Into<RecordInput>) -> &SurveyRecord {
        let input = input.into();
        let stamp = self.next_stamp();
        let id = self.next_id(&stamp);

        let record = input.into_record(id, stamp);
        self.observe(record.created_at);
        debug!(id = %record.id, locality = %record.locality, "record appended");

        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Append already fully-formed records verbatim, keeping their order.
    pub fn append_batch(&mut self, batch: Vec<SurveyRecord>) -> usize {
        let n = batch.len();
        if n == 0 {
            return 0;
        }

        for record in &batch {
            self.observe(record.created_at);
        }
        self.records.extend(batch);
        debug!(count = n, total = self.records.len(), "batch appended");
        n
    }

    /// Every record, oldest first.
    pub fn all(&self) -> &[SurveyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `created_at` for engine-stamped records never goes backwards,
    /// even if the clock does or a stored record is dated ahead of it.
    fn next_stamp(&self) -> DateTime<Utc> {
        let now = (self.clock)();
        match self.last_stamp {
            Some(last) if last > now => last,
            _ => now,
        }
    }

    fn observe(&mut self, stamp: DateTime<Utc>) {
        if self.last_stamp.is_none_or(|last| stamp > last) {
            self.last_stamp = Some(stamp);
        }
    }

    fn next_id(&mut self, stamp: &DateTime<Utc>) -> String {
        let seq = self.next_seq;
        self.next_seq += 1;
        format!("{}-{}", stamp.timestamp_millis(), seq)
    }
}
