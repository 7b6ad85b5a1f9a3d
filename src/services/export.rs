// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Plain-text summary export of the activity log.

use anyhow::Context;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::stats::day_label;
use crate::models::Activity;
use crate::services::insights::{activity_totals, weekly_aggregate};
use crate::time_utils::date_stamp;

const SUMMARY_TITLE: &str = "FitTrack Pro - Weekly Summary";

/// Render the human-readable summary of `activities`.
pub fn summary_text(activities: &[Activity]) -> String {
    let totals = activity_totals(activities);
    let week = weekly_aggregate(activities);

    let breakdown: Vec<String> = week
        .iter()
        .map(|(day, bucket)| {
            format!(
                "{}: {} activities, {} calories",
                day_label(day),
                bucket.activity_count,
                bucket.calorie_sum
            )
        })
        .collect();

    let list: Vec<String> = activities
        .iter()
        .map(|a| {
            format!(
                "- {}: {} mins, {} kcal ({})",
                a.name, a.duration, a.calories, a.time_of_day
            )
        })
        .collect();

    let mut text = format!(
        "{title}\n{rule}\n\n\
         Total Activities: {count}\n\
         Total Calories Burned: {calories}\n\
         Total Duration: {duration} minutes\n\n\
         Weekly Breakdown:\n{breakdown}\n\n\
         Activities List:\n{list}",
        title = SUMMARY_TITLE,
        rule = "=".repeat(SUMMARY_TITLE.len()),
        count = totals.count,
        calories = totals.calories,
        duration = totals.duration_minutes,
        breakdown = breakdown.join("\n"),
        list = list.join("\n"),
    );
    text.truncate(text.trim_end().len());
    text
}

/// Dated file name for a summary, e.g. `fittrack-summary-2024-01-15.txt`.
pub fn summary_file_name(date: NaiveDate) -> String {
    format!("fittrack-summary-{}.txt", date_stamp(date))
}

/// Write the summary into `dir` and return the file path.
pub fn write_summary(dir: &Path, activities: &[Activity], date: NaiveDate) -> Result<PathBuf> {
    let path = dir.join(summary_file_name(date));
    fs::write(&path, summary_text(activities))
        .with_context(|| format!("Failed to write summary to {}", path.display()))?;

    tracing::info!(path = %path.display(), count = activities.len(), "Exported summary");
    Ok(path)
}
