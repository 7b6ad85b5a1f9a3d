// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Planned meal model.

use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum MealType {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub fn as_str(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored meal record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Meal {
    pub id: String,
    pub name: String,
    /// Calories (kcal)
    pub calories: u32,
    #[serde(rename = "type")]
    pub meal_type: MealType,
}

/// Unvalidated input for a new meal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewMeal {
    pub name: String,
    pub calories: String,
    #[serde(rename = "type", default)]
    pub meal_type: MealType,
}

impl NewMeal {
    pub fn new(name: impl Into<String>, calories: impl Into<String>, meal_type: MealType) -> Self {
        Self {
            name: name.into(),
            calories: calories.into(),
            meal_type,
        }
    }
}
