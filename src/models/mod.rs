// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod meal;
pub mod seed;
pub mod stats;
pub mod wellness;

pub use activity::{Activity, NewActivity, TimeOfDay};
pub use meal::{Meal, MealType, NewMeal};
pub use stats::{
    ActivityTotals, DayBucket, GoalProgress, Insights, MealPlanTotals, Progress,
    TimeOfDayBreakdown, WeeklyAggregate,
};
pub use wellness::{Metric, WellnessTargets};
