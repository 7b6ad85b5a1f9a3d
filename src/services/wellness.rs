// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Wellness targets repository.

use std::sync::Arc;

use crate::db::Store;
use crate::error::Result;
use crate::models::{Metric, WellnessTargets};
use crate::services::record::{Loaded, RecordSlot};

/// Read/write access to the wellness targets singleton.
#[derive(Clone)]
pub struct WellnessRepository {
    slot: RecordSlot<WellnessTargets>,
}

impl WellnessRepository {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            slot: RecordSlot::new(store),
        }
    }

    pub fn get(&self) -> Result<WellnessTargets> {
        self.slot.get()
    }

    pub fn load(&self) -> Result<Loaded<WellnessTargets>> {
        self.slot.load()
    }

    pub fn get_strict(&self) -> Result<WellnessTargets> {
        self.slot.get_strict()
    }

    /// Replace the stored targets. Goals below 1 are raised to 1.
    pub fn save(&self, targets: &WellnessTargets) -> Result<()> {
        self.slot.save(&targets.with_goal_floor())
    }

    pub fn reset(&self) -> Result<()> {
        self.slot.reset()
    }

    /// Set all three goals from user input, keeping current progress.
    ///
    /// Each goal is rounded and clamped to at least 1.
    pub fn update_goals(&self, steps: f64, calories: f64, water: f64) -> Result<WellnessTargets> {
        let updated = self.get()?.with_goals(steps, calories, water);
        self.slot.save(&updated)?;

        tracing::info!(
            steps_goal = updated.steps_goal,
            calories_goal = updated.calories_goal,
            water_goal = updated.water_goal,
            "Updated wellness goals"
        );
        Ok(updated)
    }

    /// Add to today's progress for one metric.
    pub fn record_progress(&self, metric: Metric, amount: u32) -> Result<WellnessTargets> {
        let mut targets = self.get()?;
        targets.add_progress(metric, amount);
        self.slot.save(&targets)?;

        tracing::debug!(
            metric = metric.as_str(),
            amount,
            current = targets.current(metric),
            "Recorded progress"
        );
        Ok(targets)
    }
}
