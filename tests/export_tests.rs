// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Summary export tests.

use chrono::NaiveDate;
use std::fs;
use wellness_tracker::services::export::summary_text;
use wellness_tracker::AppError;

mod common;
use common::{activity, test_dashboard};

#[test]
fn test_summary_of_seed() {
    let (dashboard, _store) = test_dashboard();

    let expected = "\
FitTrack Pro - Weekly Summary
=============================

Total Activities: 5
Total Calories Burned: 1200
Total Duration: 195 minutes

Weekly Breakdown:
Mon: 5 activities, 1200 calories
Tue: 0 activities, 0 calories
Wed: 0 activities, 0 calories
Thu: 0 activities, 0 calories
Fri: 0 activities, 0 calories
Sat: 0 activities, 0 calories
Sun: 0 activities, 0 calories

Activities List:
- Morning Run: 30 mins, 300 kcal (Morning)
- Yoga Session: 45 mins, 150 kcal (Morning)
- Cycling: 60 mins, 450 kcal (Afternoon)
- Weight Training: 40 mins, 200 kcal (Afternoon)
- Evening Walk: 20 mins, 100 kcal (Evening)";

    assert_eq!(dashboard.summary().unwrap(), expected);
}

#[test]
fn test_summary_breakdown_follows_dates() {
    let activities = vec![activity("sat", 410, "2024-01-20T09:00:00Z")];
    let text = summary_text(&activities);

    assert!(text.contains("Sat: 1 activities, 410 calories"));
    assert!(text.contains("- Test Activity sat: 30 mins, 410 kcal (Morning)"));
}

#[test]
fn test_export_writes_dated_file() {
    let (dashboard, _store) = test_dashboard();
    let dir = tempfile::tempdir().unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

    let path = dashboard.export_summary(dir.path(), date).unwrap();

    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("fittrack-summary-2024-01-15.txt")
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), dashboard.summary().unwrap());
}

#[test]
fn test_export_to_missing_directory_is_internal_error() {
    let (dashboard, _store) = test_dashboard();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does/not/exist");
    let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

    let err = dashboard.export_summary(&missing, date).unwrap_err();
    assert!(matches!(err, AppError::Internal(_)));
    assert_eq!(err.to_payload().error, "internal_error");
}
