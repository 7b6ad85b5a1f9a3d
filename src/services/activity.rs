// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity log repository.
//!
//! Every mutation is the same sequence:
//! 1. Read the whole collection
//! 2. Transform it in memory (prepend or filter)
//! 3. Write the whole collection back

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::db::Store;
use crate::error::{AppError, Result};
use crate::models::{Activity, NewActivity, TimeOfDay};
use crate::services::ids::IdGenerator;
use crate::services::record::{Loaded, RecordSlot};
use crate::services::validation::validate_activity;
use crate::time_utils::format_utc_rfc3339;

/// Activity collection, newest first.
#[derive(Clone)]
pub struct ActivityRepository {
    slot: RecordSlot<Vec<Activity>>,
    ids: Arc<dyn IdGenerator>,
}

impl ActivityRepository {
    pub fn new(store: Arc<dyn Store>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            slot: RecordSlot::new(store),
            ids,
        }
    }

    pub fn get_all(&self) -> Result<Vec<Activity>> {
        self.slot.get()
    }

    pub fn load(&self) -> Result<Loaded<Vec<Activity>>> {
        self.slot.load()
    }

    pub fn get_all_strict(&self) -> Result<Vec<Activity>> {
        self.slot.get_strict()
    }

    pub fn save_all(&self, activities: &[Activity]) -> Result<()> {
        self.slot.save(&activities.to_vec())
    }

    pub fn reset(&self) -> Result<()> {
        self.slot.reset()
    }

    /// Validate and log a new activity dated now.
    pub fn add(&self, input: &NewActivity) -> Result<Activity> {
        self.add_at(input, Utc::now())
    }

    /// Validate and log a new activity with an explicit creation time.
    ///
    /// The new record becomes the first element. On validation failure the
    /// stored collection is untouched.
    pub fn add_at(&self, input: &NewActivity, now: DateTime<Utc>) -> Result<Activity> {
        let valid = validate_activity(input).map_err(AppError::Validation)?;

        let activity = Activity {
            id: self.ids.next_id(),
            name: valid.name,
            duration: valid.duration,
            calories: valid.calories,
            time_of_day: valid.time_of_day,
            date: now,
        };

        let mut activities = self.get_all()?;
        activities.insert(0, activity.clone());
        self.slot.save(&activities)?;

        tracing::info!(
            id = %activity.id,
            name = %activity.name,
            date = %format_utc_rfc3339(activity.date),
            count = activities.len(),
            "Activity added"
        );
        Ok(activity)
    }

    /// Remove the activity with `id`.
    ///
    /// Returns `false` (and writes nothing) if no record has that id.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut activities = self.get_all()?;
        let before = activities.len();
        activities.retain(|a| a.id != id);

        if activities.len() == before {
            tracing::debug!(id, "No activity to delete");
            return Ok(false);
        }

        self.slot.save(&activities)?;
        tracing::info!(id, count = activities.len(), "Activity deleted");
        Ok(true)
    }

    /// Activities in one part of the day, or all of them for `None`.
    pub fn filter(&self, time_of_day: Option<TimeOfDay>) -> Result<Vec<Activity>> {
        let activities = self.get_all()?;
        Ok(match time_of_day {
            Some(t) => activities
                .into_iter()
                .filter(|a| a.time_of_day == t)
                .collect(),
            None => activities,
        })
    }
}
