// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - repositories and derived views.

pub mod activity;
pub mod export;
pub mod ids;
pub mod insights;
pub mod meal;
pub mod record;
pub mod validation;
pub mod wellness;

pub use activity::ActivityRepository;
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use meal::MealRepository;
pub use record::{Loaded, Origin, RecordSlot, StoredRecord};
pub use validation::FieldErrors;
pub use wellness::WellnessRepository;
