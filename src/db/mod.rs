// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Storage layer: the key-value [`Store`] capability and its backends.

pub mod file;
pub mod memory;
pub mod store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::{StorageError, Store};

/// Storage keys as constants.
pub mod keys {
    /// Wellness targets singleton record.
    pub const WELLNESS_DATA: &str = "wellnessData";
    pub const ACTIVITIES: &str = "activities";
    pub const MEALS: &str = "meals";
}
