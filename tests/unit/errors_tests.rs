/*!
 * Tests for error types
 */

use captionkeys::errors::{AppError, CaptionError, HotkeyError};

/// Test hotkey error messages name the offending input
#[test]
fn test_hotkey_error_display_shouldNameInput() {
    assert_eq!(
        HotkeyError::UnknownKey("hyper".to_string()).to_string(),
        "unknown key 'hyper'"
    );
    assert_eq!(
        HotkeyError::UnknownAction("fly".to_string()).to_string(),
        "unknown hotkey action 'fly'"
    );
}

/// Test caption status error formatting
#[test]
fn test_caption_status_error_shouldIncludeStatusAndReason() {
    let err = CaptionError::Status {
        status_code: 404,
        reason: "Not Found".to_string(),
    };
    assert_eq!(err.to_string(), "Failed to fetch caption data: 404 Not Found");
}

/// Test conversions into the application error
#[test]
fn test_app_error_from_withWrappedErrors_shouldPickVariant() {
    let err: AppError = HotkeyError::EmptyCombo.into();
    assert!(matches!(err, AppError::Hotkey(HotkeyError::EmptyCombo)));

    let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: AppError = CaptionError::from(parse).into();
    assert!(matches!(err, AppError::Caption(CaptionError::Parse(_))));

    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    assert!(matches!(AppError::from(io), AppError::File(_)));

    let err = AppError::from(anyhow::anyhow!("boom"));
    assert_eq!(err.to_string(), "Unknown error: boom");
}
