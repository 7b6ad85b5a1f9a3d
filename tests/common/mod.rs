// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use wellness_tracker::db::{MemoryStore, StorageError, Store};
use wellness_tracker::models::{Activity, TimeOfDay};
use wellness_tracker::services::SequentialIds;
use wellness_tracker::Dashboard;

/// Create a dashboard over a fresh in-memory store with predictable ids.
/// Returns the dashboard and the store behind it.
#[allow(dead_code)]
pub fn test_dashboard() -> (Dashboard, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let dashboard = Dashboard::new(store.clone(), Arc::new(SequentialIds::starting_at(100)));
    (dashboard, store)
}

/// Parse an RFC3339 timestamp for test fixtures.
#[allow(dead_code)]
pub fn parse_time(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid test timestamp")
        .with_timezone(&Utc)
}

#[allow(dead_code)]
pub fn activity(id: &str, calories: u32, date: &str) -> Activity {
    Activity {
        id: id.to_string(),
        name: format!("Test Activity {}", id),
        duration: 30,
        calories,
        time_of_day: TimeOfDay::Morning,
        date: parse_time(date),
    }
}

/// Store whose writes fail for selected keys, wrapping a [`MemoryStore`].
#[allow(dead_code)]
#[derive(Default)]
pub struct FailingStore {
    inner: MemoryStore,
    failing_keys: Mutex<HashSet<String>>,
}

#[allow(dead_code)]
impl FailingStore {
    pub fn fail_writes_to(&self, key: &str) {
        self.failing_keys.lock().unwrap().insert(key.to_string());
    }

    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }
}

impl Store for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failing_keys.lock().unwrap().contains(key) {
            return Err(StorageError::Io(format!("simulated failure writing {}", key)));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.inner.clear()
    }
}
