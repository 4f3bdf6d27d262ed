use fnkit::keyboard::{self, KeyCode};

#[test]
fn arrow_key_values() {
    for key in ["ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight"] {
        assert!(keyboard::is_arrow_key(key), "{key}");
    }
    assert!(!keyboard::is_arrow_key("Enter"));
    assert!(!keyboard::is_arrow_key("arrowup"));
}

#[test]
fn arrow_key_codes() {
    assert!((37..=40).all(keyboard::is_arrow_key_code));
    assert!(!keyboard::is_arrow_key_code(13));
    assert!(!keyboard::is_arrow_key_code(999));
}

#[test]
fn codes_round_trip() {
    assert_eq!(KeyCode::from_code(27), Some(KeyCode::Esc));
    assert_eq!(KeyCode::Del as u32, 46);
    assert!(!KeyCode::Home.is_arrow());
}
