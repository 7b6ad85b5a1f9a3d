// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Wellness targets: daily progress and goals for steps, calories and water.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Singleton record of current progress and goals.
///
/// Goals are always at least 1; see [`normalize_goal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WellnessTargets {
    pub steps: u32,
    pub steps_goal: u32,
    /// Calories consumed today (kcal)
    pub calories: u32,
    pub calories_goal: u32,
    /// Glasses of water today
    pub water: u32,
    pub water_goal: u32,
}

impl Default for WellnessTargets {
    fn default() -> Self {
        Self {
            steps: 7842,
            steps_goal: 10000,
            calories: 1847,
            calories_goal: 2500,
            water: 6,
            water_goal: 8,
        }
    }
}

/// One of the three tracked wellness metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Steps,
    Calories,
    Water,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Steps, Metric::Calories, Metric::Water];

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Steps => "steps",
            Metric::Calories => "calories",
            Metric::Water => "water",
        }
    }
}

impl WellnessTargets {
    pub fn current(&self, metric: Metric) -> u32 {
        match metric {
            Metric::Steps => self.steps,
            Metric::Calories => self.calories,
            Metric::Water => self.water,
        }
    }

    pub fn goal(&self, metric: Metric) -> u32 {
        match metric {
            Metric::Steps => self.steps_goal,
            Metric::Calories => self.calories_goal,
            Metric::Water => self.water_goal,
        }
    }

    /// Replace all three goals, normalizing each with [`normalize_goal`].
    pub fn with_goals(self, steps: f64, calories: f64, water: f64) -> Self {
        Self {
            steps_goal: normalize_goal(steps),
            calories_goal: normalize_goal(calories),
            water_goal: normalize_goal(water),
            ..self
        }
    }

    /// Raise any zero goal to 1.
    pub fn with_goal_floor(self) -> Self {
        Self {
            steps_goal: self.steps_goal.max(1),
            calories_goal: self.calories_goal.max(1),
            water_goal: self.water_goal.max(1),
            ..self
        }
    }

    /// Add to the current value of a metric, saturating at `u32::MAX`.
    pub fn add_progress(&mut self, metric: Metric, amount: u32) {
        let slot = match metric {
            Metric::Steps => &mut self.steps,
            Metric::Calories => &mut self.calories,
            Metric::Water => &mut self.water,
        };
        *slot = slot.saturating_add(amount);
    }

    /// First metric whose goal is below 1, if any.
    pub fn invalid_goal(&self) -> Option<Metric> {
        Metric::ALL.into_iter().find(|m| self.goal(*m) < 1)
    }
}

/// Round a user-entered goal and clamp it to at least 1.
///
/// Non-finite input (NaN, infinities from an empty or garbage field) maps to 1.
pub fn normalize_goal(input: f64) -> u32 {
    if !input.is_finite() {
        return 1;
    }
    let rounded = input.round();
    if rounded < 1.0 {
        1
    } else if rounded >= u32::MAX as f64 {
        u32::MAX
    } else {
        rounded as u32
    }
}
