// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with a consistent payload for the presentation layer.

use serde::Serialize;

use crate::db::StorageError;
use crate::services::validation::FieldErrors;

/// Application error type returned by every repository operation.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Validation(FieldErrors),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Corrupt data under '{key}': {reason}")]
    CorruptData { key: String, reason: String },

    #[error("Refusing to write invalid '{key}': {reason}")]
    InvalidRecord { key: String, reason: String },

    #[error("Reset failed at '{failed}' after resetting {completed:?}: {source}")]
    PartialReset {
        completed: Vec<&'static str>,
        failed: &'static str,
        source: StorageError,
    },

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Serializable error body the presentation layer can display.
#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

impl AppError {
    /// Field errors, if this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AppError::Validation(fields) => Some(fields),
            _ => None,
        }
    }

    /// Convert to a payload, logging failures that are not the user's fault.
    pub fn to_payload(&self) -> ErrorPayload {
        let (error, details, fields) = match self {
            AppError::Validation(fields) => ("validation_error", None, Some(fields.clone())),
            AppError::Storage(StorageError::QuotaExceeded { .. }) => {
                tracing::warn!(error = %self, "Storage quota exceeded");
                ("storage_full", Some(self.to_string()), None)
            }
            AppError::Storage(err) => {
                tracing::error!(error = %err, "Storage error");
                ("storage_error", None, None)
            }
            AppError::CorruptData { key, .. } => {
                tracing::error!(error = %self, "Corrupt data");
                ("corrupt_data", Some(key.clone()), None)
            }
            AppError::InvalidRecord { key, .. } => {
                tracing::warn!(error = %self, "Invalid record");
                ("invalid_record", Some(key.clone()), None)
            }
            AppError::PartialReset { failed, .. } => {
                tracing::error!(error = %self, "Partial reset");
                ("partial_reset", Some(failed.to_string()), None)
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal error");
                ("internal_error", None, None)
            }
        };

        ErrorPayload {
            error: error.to_string(),
            details,
            fields,
        }
    }
}

/// Result type alias for repository operations
pub type Result<T> = std::result::Result<T, AppError>;
