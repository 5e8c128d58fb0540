use super::*;

#[test]
fn defaults_match_page_timings() {
    let config = PageConfig::default();
    assert_eq!(config.theme_storage_key, "theme");
    assert_eq!(config.skills_visibility_threshold, 0.5);
    assert_eq!(config.skill_fill_delay_ms, 200);
    assert_eq!(config.modal_open_delay_ms, 10);
    assert_eq!(config.modal_close_delay_ms, 300);
    assert_eq!(config.contact_send_delay_ms, 2000);
    assert_eq!(config.photo_pulse_delay_ms, 300);
    assert_eq!(config.photo_accept, "image/*");
    assert_eq!(config.tilt, TiltConfig::default());
    assert_eq!(config.parallax_rate, -0.25);
}

#[test]
fn partial_json_keeps_other_defaults() {
    let config = PageConfig::from_json(r#"{ "contact_send_delay_ms": 500, "tilt": { "reach_px": 120 } }"#)
        .expect("valid override");
    assert_eq!(config.contact_send_delay_ms, 500);
    assert_eq!(config.tilt.reach_px, 120.0);
    assert_eq!(config.tilt.perspective_px, 1000.0);
    assert_eq!(config.modal_close_delay_ms, 300);
}

#[test]
fn empty_object_is_default() {
    assert_eq!(PageConfig::from_json("{}").expect("valid override"), PageConfig::default());
}

#[test]
fn unknown_keys_are_ignored() {
    let config = PageConfig::from_json(r#"{ "animations": true }"#).expect("valid override");
    assert_eq!(config, PageConfig::default());
}

#[test]
fn section_ids_cannot_be_overridden() {
    let config = PageConfig::from_json(r#"{ "skills_section_id": "projets" }"#).expect("valid override");
    assert_eq!(config, PageConfig::default());
}

#[test]
fn threshold_is_clamped() {
    let config = PageConfig::from_json(r#"{ "skills_visibility_threshold": 3.0 }"#).expect("valid override");
    assert_eq!(config.skills_visibility_threshold, 1.0);
}

#[test]
fn malformed_json_is_config_error() {
    let err = PageConfig::from_json("{ nope").expect_err("malformed");
    assert!(matches!(err, PageError::Config(_)));
}

#[test]
fn wrong_type_is_config_error() {
    assert!(PageConfig::from_json(r#"{ "modal_open_delay_ms": "soon" }"#).is_err());
}

#[cfg(not(feature = "csr"))]
#[test]
fn load_without_browser_uses_defaults() {
    assert_eq!(PageConfig::load(), PageConfig::default());
}
