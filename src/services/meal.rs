// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Meal plan repository.

use std::sync::Arc;

use crate::db::Store;
use crate::error::{AppError, Result};
use crate::models::{Meal, MealType, NewMeal};
use crate::services::ids::IdGenerator;
use crate::services::record::{Loaded, RecordSlot};
use crate::services::validation::validate_meal;

/// Meal collection in insertion order.
#[derive(Clone)]
pub struct MealRepository {
    slot: RecordSlot<Vec<Meal>>,
    ids: Arc<dyn IdGenerator>,
}

impl MealRepository {
    pub fn new(store: Arc<dyn Store>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            slot: RecordSlot::new(store),
            ids,
        }
    }

    pub fn get_all(&self) -> Result<Vec<Meal>> {
        self.slot.get()
    }

    pub fn load(&self) -> Result<Loaded<Vec<Meal>>> {
        self.slot.load()
    }

    pub fn get_all_strict(&self) -> Result<Vec<Meal>> {
        self.slot.get_strict()
    }

    pub fn save_all(&self, meals: &[Meal]) -> Result<()> {
        self.slot.save(&meals.to_vec())
    }

    pub fn reset(&self) -> Result<()> {
        self.slot.reset()
    }

    /// Validate and append a new meal.
    pub fn add(&self, input: &NewMeal) -> Result<Meal> {
        let valid = validate_meal(input).map_err(AppError::Validation)?;

        let meal = Meal {
            id: self.ids.next_id(),
            name: valid.name,
            calories: valid.calories,
            meal_type: valid.meal_type,
        };

        let mut meals = self.get_all()?;
        meals.push(meal.clone());
        self.slot.save(&meals)?;

        tracing::info!(
            id = %meal.id,
            meal_type = meal.meal_type.as_str(),
            count = meals.len(),
            "Meal added"
        );
        Ok(meal)
    }

    /// Remove the meal with `id`; `false` if there was none.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut meals = self.get_all()?;
        let before = meals.len();
        meals.retain(|m| m.id != id);

        if meals.len() == before {
            tracing::debug!(id, "No meal to delete");
            return Ok(false);
        }

        self.slot.save(&meals)?;
        tracing::info!(id, count = meals.len(), "Meal deleted");
        Ok(true)
    }

    pub fn by_type(&self, meal_type: MealType) -> Result<Vec<Meal>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|m| m.meal_type == meal_type)
            .collect())
    }
}
