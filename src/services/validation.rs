// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Creation-time validation for activities and meals.
//!
//! Every check runs; failures accumulate into [`FieldErrors`] so a form can
//! show all problems at once. Nothing is written unless validation passes.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::models::{MealType, NewActivity, NewMeal, TimeOfDay};

pub const ACTIVITY_NAME_REQUIRED: &str = "Activity name is required";
pub const MEAL_NAME_REQUIRED: &str = "Meal name is required";
pub const DURATION_NOT_POSITIVE: &str = "Duration must be greater than 0";
pub const CALORIES_NOT_POSITIVE: &str = "Calories must be greater than 0";

/// Field name to message mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field names, sorted.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Activity fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidActivity {
    pub name: String,
    pub duration: u32,
    pub calories: u32,
    pub time_of_day: TimeOfDay,
}

/// Meal fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidMeal {
    pub name: String,
    pub calories: u32,
    pub meal_type: MealType,
}

pub fn validate_activity(input: &NewActivity) -> Result<ValidActivity, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = input.name.trim();
    if name.is_empty() {
        errors.insert("name", ACTIVITY_NAME_REQUIRED);
    }

    let duration = parse_positive(&input.duration);
    if duration.is_none() {
        errors.insert("duration", DURATION_NOT_POSITIVE);
    }

    let calories = parse_positive(&input.calories);
    if calories.is_none() {
        errors.insert("calories", CALORIES_NOT_POSITIVE);
    }

    match (duration, calories) {
        (Some(duration), Some(calories)) if errors.is_empty() => Ok(ValidActivity {
            name: name.to_string(),
            duration,
            calories,
            time_of_day: input.time_of_day,
        }),
        _ => Err(errors),
    }
}

pub fn validate_meal(input: &NewMeal) -> Result<ValidMeal, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = input.name.trim();
    if name.is_empty() {
        errors.insert("name", MEAL_NAME_REQUIRED);
    }

    let calories = parse_positive(&input.calories);
    if calories.is_none() {
        errors.insert("calories", CALORIES_NOT_POSITIVE);
    }

    match calories {
        Some(calories) if errors.is_empty() => Ok(ValidMeal {
            name: name.to_string(),
            calories,
            meal_type: input.meal_type,
        }),
        _ => Err(errors),
    }
}

/// Parse a strictly positive count that fits in `u32`.
fn parse_positive(text: &str) -> Option<u32> {
    parse_leading_int(text)
        .filter(|n| *n > 0)
        .and_then(|n| u32::try_from(n).ok())
}

/// Lenient integer parse for form fields.
///
/// Leading whitespace and an optional sign are accepted, then as many digits
/// as are present; anything after the digits is ignored ("45 min" is 45,
/// "3.7" is 3). Returns `None` if there are no digits or the value overflows.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}
