// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Logged activity model for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Part of the day an activity happened in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum TimeOfDay {
    #[default]
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 3] = [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening];

    pub fn as_str(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            TimeOfDay::Morning => 0,
            TimeOfDay::Afternoon => 1,
            TimeOfDay::Evening => 2,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored activity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Activity {
    /// Unique record ID
    pub id: String,
    /// Activity name/title
    pub name: String,
    /// Duration in minutes
    pub duration: u32,
    /// Calories burned (kcal)
    pub calories: u32,
    pub time_of_day: TimeOfDay,
    /// Creation time (ISO 8601)
    pub date: DateTime<Utc>,
}

/// Unvalidated input for a new activity, as typed into a form.
///
/// Numeric fields stay text until validation parses them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    pub name: String,
    pub duration: String,
    pub calories: String,
    #[serde(default)]
    pub time_of_day: TimeOfDay,
}

impl NewActivity {
    pub fn new(
        name: impl Into<String>,
        duration: impl Into<String>,
        calories: impl Into<String>,
        time_of_day: TimeOfDay,
    ) -> Self {
        Self {
            name: name.into(),
            duration: duration.into(),
            calories: calories.into(),
            time_of_day,
        }
    }
}
