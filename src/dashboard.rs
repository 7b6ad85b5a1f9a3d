// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard facade: one store, one id generator, three repositories.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::db::{keys, FileStore, MemoryStore, Store};
use crate::error::{AppError, Result};
use crate::models::Insights;
use crate::services::{
    export, insights, ActivityRepository, IdGenerator, MealRepository, UuidIds,
    WellnessRepository,
};

/// Shared dashboard state handed to the presentation layer.
#[derive(Clone)]
pub struct Dashboard {
    store: Arc<dyn Store>,
    pub wellness: WellnessRepository,
    pub activities: ActivityRepository,
    pub meals: MealRepository,
}

impl Dashboard {
    pub fn new(store: Arc<dyn Store>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            wellness: WellnessRepository::new(store.clone()),
            activities: ActivityRepository::new(store.clone(), ids.clone()),
            meals: MealRepository::new(store.clone(), ids),
            store,
        }
    }

    /// Dashboard over a fresh in-memory store (offline mode).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), Arc::new(UuidIds))
    }

    /// Dashboard over the file store described by `config`.
    pub fn open(config: &Config) -> Result<Self> {
        let store = FileStore::open(&config.data_dir)?.with_quota(config.storage_quota_bytes);
        Ok(Self::new(Arc::new(store), Arc::new(UuidIds)))
    }

    pub fn store(&self) -> &Arc<dyn Store> {
        &self.store
    }

    /// Restore all three records to their defaults.
    ///
    /// Writes targets, then activities, then meals. There is no transaction
    /// across the three keys: if a write fails, the earlier ones stay applied
    /// and the error lists them.
    pub fn reset_all(&self) -> Result<()> {
        let steps: [(&'static str, &dyn Fn() -> Result<()>); 3] = [
            (keys::WELLNESS_DATA, &|| self.wellness.reset()),
            (keys::ACTIVITIES, &|| self.activities.reset()),
            (keys::MEALS, &|| self.meals.reset()),
        ];

        let mut completed = Vec::with_capacity(steps.len());
        for (key, reset) in steps {
            match reset() {
                Ok(()) => completed.push(key),
                Err(AppError::Storage(source)) => {
                    tracing::error!(failed = key, ?completed, error = %source, "Reset incomplete");
                    return Err(AppError::PartialReset {
                        completed,
                        failed: key,
                        source,
                    });
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!("Dashboard reset to defaults");
        Ok(())
    }

    /// Remove everything from the store; every record reads as its seed again.
    pub fn wipe(&self) -> Result<()> {
        self.store.clear()?;
        tracing::info!("Dashboard storage cleared");
        Ok(())
    }

    /// Compute every derived view from the current records.
    pub fn insights(&self) -> Result<Insights> {
        let activities = self.activities.get_all()?;
        let meals = self.meals.get_all()?;
        let targets = self.wellness.get()?;

        Ok(Insights {
            weekly: insights::weekly_aggregate(&activities),
            time_of_day: insights::time_of_day_breakdown(&activities),
            totals: insights::activity_totals(&activities),
            goals: insights::goal_progress(&targets),
            meals: insights::meal_plan(&meals),
        })
    }

    /// Text summary of the current activity log.
    pub fn summary(&self) -> Result<String> {
        Ok(export::summary_text(&self.activities.get_all()?))
    }

    /// Write the dated summary file into `dir`.
    pub fn export_summary(&self, dir: &Path, date: NaiveDate) -> Result<PathBuf> {
        export::write_summary(dir, &self.activities.get_all()?, date)
    }
}
