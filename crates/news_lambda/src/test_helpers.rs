//! Test helpers shared by unit and integration tests.
//!
//! Provides an in-memory table and deterministic clocks so handlers can be
//! exercised without AWS.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use news_core::contract::StoredRecord;
use news_core::ids::{ClockError, NanosClock};

use crate::adapters::news_store::{NewsStore, StoreError};

/// In-memory stand-in for the news table.
///
/// Records are kept in insertion order. Scan and put failures can be switched
/// on to drive the error paths.
#[derive(Debug, Default)]
pub struct InMemoryNewsStore {
    records: Mutex<Vec<StoredRecord>>,
    scan_failure: Option<String>,
    put_failure: Option<String>,
}

impl InMemoryNewsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<StoredRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    pub fn failing_scans(message: impl Into<String>) -> Self {
        Self {
            scan_failure: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn failing_puts(message: impl Into<String>) -> Self {
        Self {
            put_failure: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn records(&self) -> Vec<StoredRecord> {
        self.records.lock().expect("poisoned mutex").clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().expect("poisoned mutex").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NewsStore for InMemoryNewsStore {
    fn scan_all(&self) -> Result<Vec<StoredRecord>, StoreError> {
        if let Some(message) = &self.scan_failure {
            return Err(StoreError::Scan(message.clone()));
        }
        Ok(self.records())
    }

    fn put_item(&self, record: &StoredRecord) -> Result<(), StoreError> {
        if let Some(message) = &self.put_failure {
            return Err(StoreError::Put(message.clone()));
        }
        self.records
            .lock()
            .expect("poisoned mutex")
            .push(record.clone());
        Ok(())
    }
}

/// Clock that advances by a fixed step on every reading.
#[derive(Debug)]
pub struct SteppingClock {
    next: AtomicI64,
    step: i64,
}

impl SteppingClock {
    pub fn new(start: i64, step: i64) -> Self {
        Self {
            next: AtomicI64::new(start),
            step,
        }
    }
}

impl NanosClock for SteppingClock {
    fn now_nanos(&self) -> Result<i64, ClockError> {
        Ok(self.next.fetch_add(self.step, Ordering::SeqCst))
    }
}
