use fnkit::time;

#[test]
fn formats_hours_minutes_seconds() {
    assert_eq!(time::secs_to_hms(12345), "03:25:45");
    assert_eq!(time::secs_to_hms(0), "00:00:00");
    assert_eq!(time::secs_to_hms(59), "00:00:59");
    assert_eq!(time::secs_to_hms(3600), "01:00:00");
}

#[test]
fn negative_values_keep_sign() {
    assert_eq!(time::secs_to_hms(-61), "-00:01:01");
}

#[test]
fn hours_are_not_capped() {
    assert_eq!(time::secs_to_hms(100 * 3600 + 5), "100:00:05");
    assert_eq!(time::hms_parts(-3725), (1, 2, 5));
}
