// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Fixed default datasets returned when nothing has been stored yet.
//!
//! Seeds are hard-coded (including timestamps) so every read of an empty
//! store returns the same records, in every process.

use chrono::{DateTime, Utc};

use crate::models::{Activity, Meal, MealType, TimeOfDay, WellnessTargets};

/// Monday 2024-01-15 00:00:00 UTC.
const SEED_DAY_EPOCH_SECS: i64 = 1_705_276_800;

fn seed_time(hour: i64, minute: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(SEED_DAY_EPOCH_SECS + hour * 3600 + minute * 60, 0)
        .unwrap_or_default()
}

pub fn default_wellness() -> WellnessTargets {
    WellnessTargets::default()
}

/// The five seed activities, newest-first order as stored.
pub fn default_activities() -> Vec<Activity> {
    let activity = |id: &str, name: &str, duration, calories, time_of_day, hour| Activity {
        id: id.to_string(),
        name: name.to_string(),
        duration,
        calories,
        time_of_day,
        date: seed_time(hour, 0),
    };

    vec![
        activity("1", "Morning Run", 30, 300, TimeOfDay::Morning, 7),
        activity("2", "Yoga Session", 45, 150, TimeOfDay::Morning, 8),
        activity("3", "Cycling", 60, 450, TimeOfDay::Afternoon, 13),
        activity("4", "Weight Training", 40, 200, TimeOfDay::Afternoon, 16),
        activity("5", "Evening Walk", 20, 100, TimeOfDay::Evening, 19),
    ]
}

/// The six seed meals, in display order.
pub fn default_meals() -> Vec<Meal> {
    let meal = |id: &str, name: &str, calories, meal_type| Meal {
        id: id.to_string(),
        name: name.to_string(),
        calories,
        meal_type,
    };

    vec![
        meal("1", "Oatmeal with Berries", 350, MealType::Breakfast),
        meal("2", "Greek Yogurt", 150, MealType::Breakfast),
        meal("3", "Grilled Chicken Salad", 450, MealType::Lunch),
        meal("4", "Brown Rice Bowl", 380, MealType::Lunch),
        meal("5", "Salmon with Vegetables", 520, MealType::Dinner),
        meal("6", "Quinoa Stir-fry", 420, MealType::Dinner),
    ]
}
