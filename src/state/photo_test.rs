use super::*;

const PNG_DATA_URL: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

#[test]
fn new_photo_rests_at_full_scale() {
    let photo = PhotoState::new("/assets/profile.jpg");
    assert_eq!(photo.src, "/assets/profile.jpg");
    assert_eq!(photo.scale, REST_SCALE);
    assert_eq!(photo.transform(), "scale(1)");
}

#[test]
fn loaded_replaces_source_with_decoded_data() {
    let mut photo = PhotoState::new("/assets/profile.jpg");
    photo.loaded(PNG_DATA_URL.to_owned());
    assert_eq!(photo.src, PNG_DATA_URL);
}

#[test]
fn loaded_pulses_then_settles() {
    let mut photo = PhotoState::new("/assets/profile.jpg");
    let seq = photo.loaded(PNG_DATA_URL.to_owned());
    assert_eq!(photo.scale, PULSE_SCALE);
    assert_eq!(photo.transform(), "scale(1.1)");

    assert!(photo.settle(seq));
    assert_eq!(photo.scale, REST_SCALE);
}

#[test]
fn stale_settle_does_not_cut_newer_pulse() {
    let mut photo = PhotoState::new("/assets/profile.jpg");
    let first = photo.loaded(PNG_DATA_URL.to_owned());
    let second = photo.loaded("data:image/gif;base64,R0lGODlhAQABAAAAACw=".to_owned());

    assert!(!photo.settle(first));
    assert_eq!(photo.scale, PULSE_SCALE);
    assert!(photo.settle(second));
    assert_eq!(photo.scale, REST_SCALE);
    assert!(photo.src.starts_with("data:image/gif"));
}
