//! Derived statistics for the insights views.
//!
//! Nothing here is persisted. Every value is recomputed from the stored
//! collections on request by [`crate::services::insights`].

use chrono::Weekday;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{MealType, TimeOfDay};

/// Display order of the weekly chart.
pub const WEEK_ORDER: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Short English label for a weekday ("Mon".."Sun").
pub fn day_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Per-day activity count and calories burned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DayBucket {
    pub activity_count: u32,
    pub calorie_sum: u32,
}

/// Activities bucketed by day of week.
///
/// Serializes as a map keyed by day label, in Mon..Sun order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyAggregate {
    // Indexed by days from Monday
    buckets: [DayBucket; 7],
}

impl WeeklyAggregate {
    pub fn get(&self, day: Weekday) -> DayBucket {
        self.buckets[day.num_days_from_monday() as usize]
    }

    /// Buckets in Mon..Sun order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, DayBucket)> + '_ {
        WEEK_ORDER.iter().map(move |day| (*day, self.get(*day)))
    }

    pub(crate) fn record(&mut self, day: Weekday, calories: u32) {
        let bucket = &mut self.buckets[day.num_days_from_monday() as usize];
        bucket.activity_count = bucket.activity_count.saturating_add(1);
        bucket.calorie_sum = bucket.calorie_sum.saturating_add(calories);
    }

    pub fn total_activities(&self) -> u64 {
        self.buckets.iter().map(|b| b.activity_count as u64).sum()
    }

    pub fn total_calories(&self) -> u64 {
        self.buckets.iter().map(|b| b.calorie_sum as u64).sum()
    }

    /// Busiest day's activity count, never below 1 so it can scale bars.
    pub fn max_activity_count(&self) -> u32 {
        self.buckets
            .iter()
            .map(|b| b.activity_count)
            .max()
            .unwrap_or(0)
            .max(1)
    }

    /// Highest day's calorie sum, never below 1.
    pub fn max_calorie_sum(&self) -> u32 {
        self.buckets
            .iter()
            .map(|b| b.calorie_sum)
            .max()
            .unwrap_or(0)
            .max(1)
    }

    /// Activities per day over the full week, empty days included.
    pub fn average_activities(&self) -> f64 {
        self.total_activities() as f64 / 7.0
    }

    /// Calories per day over the full week, empty days included.
    pub fn average_calories(&self) -> f64 {
        self.total_calories() as f64 / 7.0
    }
}

impl Serialize for WeeklyAggregate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(WEEK_ORDER.len()))?;
        for (day, bucket) in self.iter() {
            map.serialize_entry(day_label(day), &bucket)?;
        }
        map.end()
    }
}

/// Share of activities logged in each part of the day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeOfDayBreakdown {
    pub(crate) counts: [u32; 3],
}

impl TimeOfDayBreakdown {
    pub fn count(&self, time_of_day: TimeOfDay) -> u32 {
        self.counts[time_of_day.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Percentage of all activities in this bucket (0 when there are none).
    pub fn percent(&self, time_of_day: TimeOfDay) -> f64 {
        let total = self.total().max(1);
        self.count(time_of_day) as f64 / total as f64 * 100.0
    }
}

impl Serialize for TimeOfDayBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TimeOfDay::ALL.len()))?;
        for time_of_day in TimeOfDay::ALL {
            map.serialize_entry(time_of_day.as_str(), &self.percent(time_of_day))?;
        }
        map.end()
    }
}

/// Progress toward one goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Progress {
    pub current: u32,
    pub goal: u32,
    /// `current / goal * 100`, unclamped
    pub percent: f64,
}

impl Progress {
    pub fn new(current: u32, goal: u32) -> Self {
        Self {
            current,
            goal,
            percent: current as f64 / goal.max(1) as f64 * 100.0,
        }
    }

    /// Whole-number percentage for display text (may exceed 100).
    pub fn display_percent(&self) -> i64 {
        self.percent.round() as i64
    }

    /// Percentage clamped to `[0, 100]` for sizing a bar or ring.
    pub fn bar_percent(&self) -> f64 {
        self.percent.clamp(0.0, 100.0)
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.goal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GoalProgress {
    pub steps: Progress,
    pub calories: Progress,
    pub water: Progress,
}

/// Totals over a set of activities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityTotals {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub count: usize,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub calories: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub duration_minutes: u64,
}

/// Planned calories per meal type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MealPlanTotals {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub breakfast: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub lunch: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub dinner: u64,
}

impl MealPlanTotals {
    pub fn calories_for(&self, meal_type: MealType) -> u64 {
        match meal_type {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
        }
    }

    pub(crate) fn add(&mut self, meal_type: MealType, calories: u32) {
        let slot = match meal_type {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
        };
        *slot += calories as u64;
    }

    pub fn total(&self) -> u64 {
        self.breakfast + self.lunch + self.dinner
    }
}

/// Snapshot of every derived view, computed in one pass over the store.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Insights {
    #[cfg_attr(
        feature = "binding-generation",
        ts(type = "Record<\"Mon\" | \"Tue\" | \"Wed\" | \"Thu\" | \"Fri\" | \"Sat\" | \"Sun\", { activityCount: number, calorieSum: number }>")
    )]
    pub weekly: WeeklyAggregate,
    #[cfg_attr(
        feature = "binding-generation",
        ts(type = "Record<\"Morning\" | \"Afternoon\" | \"Evening\", number>")
    )]
    pub time_of_day: TimeOfDayBreakdown,
    pub totals: ActivityTotals,
    pub goals: GoalProgress,
    pub meals: MealPlanTotals,
}
