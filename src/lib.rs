// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Wellness-Tracker: local storage and insights for a personal wellness dashboard
//!
//! This crate provides the persistence layer for wellness targets, the
//! activity log and the meal plan, plus the aggregations the dashboard
//! charts are drawn from.

pub mod config;
pub mod dashboard;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod time_utils;

pub use dashboard::Dashboard;
pub use error::{AppError, Result};
