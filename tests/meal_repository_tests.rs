// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Meal plan repository tests.

use wellness_tracker::db::{keys, Store};
use wellness_tracker::models::{MealType, NewMeal};
use wellness_tracker::services::validation::{CALORIES_NOT_POSITIVE, MEAL_NAME_REQUIRED};
use wellness_tracker::AppError;

mod common;
use common::test_dashboard;

#[test]
fn test_seed_is_six_meals_in_order() {
    let (dashboard, _store) = test_dashboard();

    let meals = dashboard.meals.get_all().unwrap();
    let summary: Vec<_> = meals
        .iter()
        .map(|m| (m.id.as_str(), m.name.as_str(), m.calories, m.meal_type))
        .collect();

    assert_eq!(
        summary,
        [
            ("1", "Oatmeal with Berries", 350, MealType::Breakfast),
            ("2", "Greek Yogurt", 150, MealType::Breakfast),
            ("3", "Grilled Chicken Salad", 450, MealType::Lunch),
            ("4", "Brown Rice Bowl", 380, MealType::Lunch),
            ("5", "Salmon with Vegetables", 520, MealType::Dinner),
            ("6", "Quinoa Stir-fry", 420, MealType::Dinner),
        ]
    );
}

#[test]
fn test_add_appends_meal() {
    let (dashboard, _store) = test_dashboard();

    let meal = dashboard
        .meals
        .add(&NewMeal::new("Lentil Soup", "310", MealType::Dinner))
        .unwrap();

    let meals = dashboard.meals.get_all().unwrap();
    assert_eq!(meals.len(), 7);
    assert_eq!(meals.last(), Some(&meal));
    assert_eq!(meal.id, "100");
}

#[test]
fn test_invalid_meal_reports_field_errors() {
    let (dashboard, store) = test_dashboard();

    let err = dashboard
        .meals
        .add(&NewMeal::new("  ", "0", MealType::Lunch))
        .unwrap_err();

    let fields = err.field_errors().expect("validation error");
    assert_eq!(fields.get("name"), Some(MEAL_NAME_REQUIRED));
    assert_eq!(fields.get("calories"), Some(CALORIES_NOT_POSITIVE));
    assert!(store.get(keys::MEALS).unwrap().is_none());
}

#[test]
fn test_delete_meal() {
    let (dashboard, _store) = test_dashboard();

    assert!(dashboard.meals.delete("2").unwrap());
    assert!(!dashboard.meals.delete("2").unwrap());

    let ids: Vec<_> = dashboard
        .meals
        .get_all()
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(ids, ["1", "3", "4", "5", "6"]);
}

#[test]
fn test_by_type() {
    let (dashboard, _store) = test_dashboard();

    let lunch = dashboard.meals.by_type(MealType::Lunch).unwrap();
    assert_eq!(lunch.len(), 2);
    assert!(lunch.iter().all(|m| m.meal_type == MealType::Lunch));
}

#[test]
fn test_stored_meal_type_field_name() {
    let (dashboard, store) = test_dashboard();
    dashboard.meals.reset().unwrap();

    let raw = store.get(keys::MEALS).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["type"], "breakfast");
    assert_eq!(json.as_array().map(Vec::len), Some(6));
}

#[test]
fn test_save_all_refuses_zero_calorie_meal() {
    let (dashboard, store) = test_dashboard();
    let mut meals = dashboard.meals.get_all().unwrap();
    meals[0].calories = 0;

    let err = dashboard.meals.save_all(&meals).unwrap_err();
    assert!(matches!(err, AppError::InvalidRecord { ref key, .. } if key == keys::MEALS));
    assert_eq!(store.get(keys::MEALS).unwrap(), None);
}
