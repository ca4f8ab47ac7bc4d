use brime_client::error::AppError;
use std::error::Error;

#[test]
fn test_app_error_display_invalid_url() {
    let error = AppError::InvalidUrl("not a url".to_string());
    assert_eq!(error.to_string(), "invalid url: not a url");
    assert!(error.source().is_none());
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(ref e) => assert!(app_error.to_string().starts_with("json error: ") && e.is_syntax()),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_json_exposes_source() {
    let serde_error = serde_json::from_slice::<serde_json::Value>(b"").unwrap_err();
    let app_error = AppError::from(serde_error);
    assert!(app_error.source().is_some());
    assert!(app_error.to_string().contains("EOF"));
}

// reqwest::Error cannot be constructed directly; the Network variant is
// covered by the connection-refused test in application::test_client.
