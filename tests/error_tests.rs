// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use wellness_tracker::db::StorageError;
use wellness_tracker::services::FieldErrors;
use wellness_tracker::AppError;

#[test]
fn test_validation_payload_lists_fields() {
    let mut fields = FieldErrors::default();
    fields.insert("name", "Activity name is required");
    let err = AppError::Validation(fields);

    let payload = serde_json::to_value(err.to_payload()).unwrap();
    assert_eq!(payload["error"], "validation_error");
    assert_eq!(payload["fields"]["name"], "Activity name is required");
    assert!(payload.get("details").is_none());
}

#[test]
fn test_storage_error_hides_details() {
    let err = AppError::from(StorageError::Io("/secret/path: denied".to_string()));

    let payload = err.to_payload();
    assert_eq!(payload.error, "storage_error");
    assert!(payload.details.is_none());
    assert!(err.field_errors().is_none());
}

#[test]
fn test_partial_reset_message_names_steps() {
    let err = AppError::PartialReset {
        completed: vec!["wellnessData"],
        failed: "activities",
        source: StorageError::Io("disk full".to_string()),
    };

    assert_eq!(
        err.to_string(),
        r#"Reset failed at 'activities' after resetting ["wellnessData"]: Storage I/O error: disk full"#
    );
    assert_eq!(err.to_payload().details.as_deref(), Some("activities"));
}

#[test]
fn test_corrupt_data_payload_names_key() {
    let err = AppError::CorruptData {
        key: "meals".to_string(),
        reason: "expected value at line 1 column 1".to_string(),
    };

    let payload = err.to_payload();
    assert_eq!(payload.error, "corrupt_data");
    assert_eq!(payload.details.as_deref(), Some("meals"));
}
