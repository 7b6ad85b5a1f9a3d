// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Whole-record persistence shared by the three repositories.
//!
//! A record lives under one key as a single JSON document. Reads fall back
//! to a fixed seed when the key is absent; writes replace the document.
//! There is no locking, so read-modify-write sequences built on top are not
//! atomic.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::db::{keys, StorageError, Store};
use crate::error::{AppError, Result};
use crate::models::seed;
use crate::models::{Activity, Meal, WellnessTargets};

/// A value persisted as one JSON document under a fixed key.
pub trait StoredRecord: Serialize + DeserializeOwned + Clone {
    const KEY: &'static str;

    /// Value returned when nothing is stored yet.
    fn seed() -> Self;

    /// Reject decoded values that break an invariant serde cannot express.
    fn check(&self) -> std::result::Result<(), String> {
        Ok(())
    }
}

impl StoredRecord for WellnessTargets {
    const KEY: &'static str = keys::WELLNESS_DATA;

    fn seed() -> Self {
        seed::default_wellness()
    }

    fn check(&self) -> std::result::Result<(), String> {
        match self.invalid_goal() {
            Some(metric) => Err(format!("{} goal must be at least 1", metric.as_str())),
            None => Ok(()),
        }
    }
}

impl StoredRecord for Vec<Activity> {
    const KEY: &'static str = keys::ACTIVITIES;

    fn seed() -> Self {
        seed::default_activities()
    }

    fn check(&self) -> std::result::Result<(), String> {
        let mut ids = HashSet::new();
        for activity in self {
            check_entry(&mut ids, &activity.id, &activity.name)?;
            if activity.duration == 0 {
                return Err(format!("activity '{}' has zero duration", activity.id));
            }
            if activity.calories == 0 {
                return Err(format!("activity '{}' has zero calories", activity.id));
            }
        }
        Ok(())
    }
}

impl StoredRecord for Vec<Meal> {
    const KEY: &'static str = keys::MEALS;

    fn seed() -> Self {
        seed::default_meals()
    }

    fn check(&self) -> std::result::Result<(), String> {
        let mut ids = HashSet::new();
        for meal in self {
            check_entry(&mut ids, &meal.id, &meal.name)?;
            if meal.calories == 0 {
                return Err(format!("meal '{}' has zero calories", meal.id));
            }
        }
        Ok(())
    }
}

/// Ids are unique within a collection and names are never blank.
fn check_entry<'a>(
    ids: &mut HashSet<&'a str>,
    id: &'a str,
    name: &str,
) -> std::result::Result<(), String> {
    if !ids.insert(id) {
        return Err(format!("duplicate id '{}'", id));
    }
    if name.trim().is_empty() {
        return Err(format!("entry '{}' has an empty name", id));
    }
    Ok(())
}

/// Where a loaded value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Decoded from the store.
    Stored,
    /// Key absent; seed returned.
    Seeded,
    /// Stored content was invalid; seed returned instead.
    Recovered { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub value: T,
    pub origin: Origin,
}

/// Typed access to one key of a [`Store`].
pub struct RecordSlot<T> {
    store: Arc<dyn Store>,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for RecordSlot<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: StoredRecord> RecordSlot<T> {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Read the record and report whether it was stored, seeded or recovered.
    pub fn load(&self) -> Result<Loaded<T>> {
        let raw = match self.store.get(T::KEY) {
            Ok(raw) => raw,
            Err(StorageError::Unreadable { reason, .. }) => {
                tracing::warn!(key = T::KEY, %reason, "Stored value is unreadable, using seed");
                return Ok(Loaded {
                    value: T::seed(),
                    origin: Origin::Recovered { reason },
                });
            }
            Err(e) => return Err(e.into()),
        };

        let Some(raw) = raw else {
            tracing::debug!(key = T::KEY, "No stored value, using seed");
            return Ok(Loaded {
                value: T::seed(),
                origin: Origin::Seeded,
            });
        };

        match decode::<T>(&raw) {
            Ok(value) => Ok(Loaded {
                value,
                origin: Origin::Stored,
            }),
            Err(reason) => {
                tracing::warn!(key = T::KEY, %reason, "Stored value is corrupt, using seed");
                Ok(Loaded {
                    value: T::seed(),
                    origin: Origin::Recovered { reason },
                })
            }
        }
    }

    /// Read the record, falling back to the seed if absent or corrupt.
    pub fn get(&self) -> Result<T> {
        Ok(self.load()?.value)
    }

    /// Read the record, failing with [`AppError::CorruptData`] if corrupt.
    pub fn get_strict(&self) -> Result<T> {
        let loaded = self.load()?;
        match loaded.origin {
            Origin::Recovered { reason } => Err(AppError::CorruptData {
                key: T::KEY.to_string(),
                reason,
            }),
            Origin::Stored | Origin::Seeded => Ok(loaded.value),
        }
    }

    /// Serialize and replace the stored record.
    ///
    /// A value that would read back as corrupt is refused and nothing is
    /// written.
    pub fn save(&self, value: &T) -> Result<()> {
        value.check().map_err(|reason| {
            tracing::warn!(key = T::KEY, %reason, "Refusing to write invalid record");
            AppError::InvalidRecord {
                key: T::KEY.to_string(),
                reason,
            }
        })?;

        let json = serde_json::to_string(value).map_err(|e| StorageError::Serialization {
            key: T::KEY.to_string(),
            reason: e.to_string(),
        })?;

        self.store.set(T::KEY, &json).map_err(|e| {
            tracing::error!(key = T::KEY, error = %e, "Failed to write record");
            e
        })?;
        Ok(())
    }

    /// Overwrite the record with its seed.
    pub fn reset(&self) -> Result<()> {
        self.save(&T::seed())?;
        tracing::info!(key = T::KEY, "Reset record to defaults");
        Ok(())
    }
}

fn decode<T: StoredRecord>(raw: &str) -> std::result::Result<T, String> {
    let value: T = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    value.check()?;
    Ok(value)
}
