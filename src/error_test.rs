use super::*;

#[test]
fn messages_name_the_failure() {
    assert_eq!(PageError::NoWindow.to_string(), "browser window unavailable");
    assert_eq!(PageError::MissingElement("#projectModal".to_owned()).to_string(), "element not found: #projectModal");
    assert_eq!(PageError::Js("QuotaExceededError".to_owned()).to_string(), "javascript error: QuotaExceededError");
}

#[test]
fn serde_errors_convert_to_config_variant() {
    let err = serde_json::from_str::<serde_json::Value>("{").expect_err("truncated json");
    let page_err = PageError::from(err);
    assert!(matches!(page_err, PageError::Config(_)));
    assert!(page_err.to_string().starts_with("invalid page config:"));
}
