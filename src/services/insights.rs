// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Aggregation engine for the insights views.
//!
//! All functions are pure. Results are rebuilt from the full collection on
//! every call and never cached or updated incrementally.

use chrono::{Datelike, TimeZone, Utc};

use crate::models::stats::TimeOfDayBreakdown;
use crate::models::{
    Activity, ActivityTotals, GoalProgress, Meal, MealPlanTotals, Metric, Progress,
    WeeklyAggregate, WellnessTargets,
};

/// Height of a bar for a day with no data (percent of chart).
pub const EMPTY_BAR_PERCENT: f64 = 10.0;
/// Smallest height of a bar for a day with data.
pub const MIN_BAR_PERCENT: f64 = 15.0;

/// Bucket activities by the UTC weekday of their date.
pub fn weekly_aggregate(activities: &[Activity]) -> WeeklyAggregate {
    weekly_aggregate_in(activities, &Utc)
}

/// Bucket activities by weekday as observed in `tz`.
pub fn weekly_aggregate_in<Tz: TimeZone>(activities: &[Activity], tz: &Tz) -> WeeklyAggregate {
    let mut week = WeeklyAggregate::default();
    for activity in activities {
        let weekday = activity.date.with_timezone(tz).weekday();
        week.record(weekday, activity.calories);
    }
    week
}

/// Bar height in percent for `value` on a chart scaled to `max`.
///
/// Empty days get a fixed stub; days with data never drop below
/// [`MIN_BAR_PERCENT`] so they stay visible.
pub fn bar_height(value: u32, max: u32) -> f64 {
    if value == 0 {
        return EMPTY_BAR_PERCENT;
    }
    let percent = value as f64 / max.max(1) as f64 * 100.0;
    percent.max(MIN_BAR_PERCENT)
}

pub fn time_of_day_breakdown(activities: &[Activity]) -> TimeOfDayBreakdown {
    let mut breakdown = TimeOfDayBreakdown::default();
    for activity in activities {
        breakdown.counts[activity.time_of_day.index()] += 1;
    }
    breakdown
}

pub fn goal_progress(targets: &WellnessTargets) -> GoalProgress {
    let progress = |metric| Progress::new(targets.current(metric), targets.goal(metric));
    GoalProgress {
        steps: progress(Metric::Steps),
        calories: progress(Metric::Calories),
        water: progress(Metric::Water),
    }
}

/// Count, calories and minutes across `activities`.
pub fn activity_totals<'a, I>(activities: I) -> ActivityTotals
where
    I: IntoIterator<Item = &'a Activity>,
{
    activities
        .into_iter()
        .fold(ActivityTotals::default(), |mut totals, activity| {
            totals.count += 1;
            totals.calories += activity.calories as u64;
            totals.duration_minutes += activity.duration as u64;
            totals
        })
}

pub fn meal_plan(meals: &[Meal]) -> MealPlanTotals {
    let mut totals = MealPlanTotals::default();
    for meal in meals {
        totals.add(meal.meal_type, meal.calories);
    }
    totals
}
