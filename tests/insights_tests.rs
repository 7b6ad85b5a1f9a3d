// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Aggregation and goal progress tests.

use chrono::Weekday;
use wellness_tracker::models::{DayBucket, MealType, TimeOfDay, WellnessTargets};
use wellness_tracker::services::insights::{
    bar_height, goal_progress, time_of_day_breakdown, weekly_aggregate, EMPTY_BAR_PERCENT,
};

mod common;
use common::{activity, test_dashboard};

#[test]
fn test_monday_and_wednesday_aggregate() {
    let activities = vec![
        activity("mon", 300, "2024-01-15T10:00:00Z"),
        activity("wed", 450, "2024-01-17T18:00:00Z"),
    ];

    let week = weekly_aggregate(&activities);

    assert_eq!(
        week.get(Weekday::Mon),
        DayBucket {
            activity_count: 1,
            calorie_sum: 300
        }
    );
    assert_eq!(
        week.get(Weekday::Wed),
        DayBucket {
            activity_count: 1,
            calorie_sum: 450
        }
    );
    for day in [
        Weekday::Tue,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ] {
        assert_eq!(week.get(day), DayBucket::default(), "{day} should be empty");
    }

    assert_eq!(week.average_activities(), 2.0 / 7.0);
    assert_eq!(week.average_calories(), 750.0 / 7.0);
    assert_eq!(week.max_activity_count(), 1);
    assert_eq!(week.max_calorie_sum(), 450);
}

#[test]
fn test_aggregate_is_independent_of_insertion_order() {
    let mut activities = vec![
        activity("a", 100, "2024-01-21T10:00:00Z"),
        activity("b", 200, "2024-01-15T10:00:00Z"),
        activity("c", 300, "2024-01-22T10:00:00Z"),
    ];
    let forward = weekly_aggregate(&activities);
    activities.reverse();
    let backward = weekly_aggregate(&activities);

    assert_eq!(forward, backward);
    // Two Mondays a week apart share a bucket
    assert_eq!(forward.get(Weekday::Mon).activity_count, 2);
    assert_eq!(forward.get(Weekday::Mon).calorie_sum, 500);
    assert_eq!(forward.get(Weekday::Sun).calorie_sum, 100);
}

#[test]
fn test_seed_activities_land_on_one_day() {
    let (dashboard, _store) = test_dashboard();
    let week = weekly_aggregate(&dashboard.activities.get_all().unwrap());

    assert_eq!(week.get(Weekday::Mon).activity_count, 5);
    assert_eq!(week.get(Weekday::Mon).calorie_sum, 1200);
    assert_eq!(bar_height(week.get(Weekday::Tue).activity_count, 5), EMPTY_BAR_PERCENT);
}

#[test]
fn test_clamped_progress() {
    let targets = WellnessTargets {
        steps: 12000,
        steps_goal: 10000,
        ..WellnessTargets::default()
    };

    let progress = goal_progress(&targets);
    assert_eq!(progress.steps.percent, 120.0);
    assert_eq!(progress.steps.display_percent(), 120);
    assert_eq!(progress.steps.bar_percent(), 100.0);
}

#[test]
fn test_default_goal_progress() {
    let progress = goal_progress(&WellnessTargets::default());

    assert_eq!(progress.steps.display_percent(), 78);
    assert_eq!(progress.calories.display_percent(), 74);
    assert_eq!(progress.water.percent, 75.0);
}

#[test]
fn test_breakdown_of_seed() {
    let (dashboard, _store) = test_dashboard();
    let breakdown = time_of_day_breakdown(&dashboard.activities.get_all().unwrap());

    assert_eq!(breakdown.percent(TimeOfDay::Morning), 40.0);
    assert_eq!(breakdown.percent(TimeOfDay::Afternoon), 40.0);
    assert_eq!(breakdown.percent(TimeOfDay::Evening), 20.0);
}

#[test]
fn test_insights_snapshot_recomputes_after_writes() {
    let (dashboard, _store) = test_dashboard();

    let before = dashboard.insights().unwrap();
    assert_eq!(before.totals.count, 5);
    assert_eq!(before.totals.calories, 1200);
    assert_eq!(before.totals.duration_minutes, 195);
    assert_eq!(before.meals.calories_for(MealType::Breakfast), 500);
    assert_eq!(before.meals.total(), 2270);

    dashboard
        .activities
        .save_all(&[activity("only", 250, "2024-01-19T10:00:00Z")])
        .unwrap();

    let after = dashboard.insights().unwrap();
    assert_eq!(after.totals.count, 1);
    assert_eq!(after.weekly.get(Weekday::Fri).calorie_sum, 250);
    assert_eq!(after.weekly.get(Weekday::Mon).activity_count, 0);
}

#[test]
fn test_insights_serialize_for_charts() {
    let (dashboard, _store) = test_dashboard();
    let json = serde_json::to_value(dashboard.insights().unwrap()).unwrap();

    assert_eq!(json["weekly"]["Mon"]["activityCount"], 5);
    assert_eq!(json["timeOfDay"]["Evening"], 20.0);
    assert_eq!(json["goals"]["water"]["goal"], 8);
}
