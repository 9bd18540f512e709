use crate::{UNDEFINED_TIME, calendar, delta};

#[test]
fn test_calendar_utc() {
    assert_eq!(
        calendar(1257894000, true).to_string(),
        "Nov 10 23:00:00 UTC 2009"
    );
    assert_eq!(
        calendar(1136214245, true).to_string(),
        "Jan 02 15:04:05 UTC 2006"
    );
    assert_eq!(calendar(1, true).to_string(), "Jan 01 00:00:01 UTC 1970");
}

#[test]
fn test_calendar_undefined_renders_placeholder() {
    assert_eq!(
        calendar(UNDEFINED_TIME, true).to_string(),
        "--- -- --:--:-- UTC ----"
    );
    assert_eq!(
        calendar(UNDEFINED_TIME, false).to_string(),
        "--- -- --:--:-- ----"
    );
}

#[test]
fn test_calendar_placeholder_matches_render_width() {
    let placeholder = calendar(UNDEFINED_TIME, true).to_string();
    let rendered = calendar(1257894000, true).to_string();
    assert_eq!(placeholder.len(), rendered.len());
}

#[test]
fn test_calendar_unrepresentable_renders_placeholder() {
    // Far outside chrono's supported range.
    assert_eq!(
        calendar(i64::MAX, true).to_string(),
        "--- -- --:--:-- UTC ----"
    );
}

#[test]
fn test_calendar_local_renders_something() {
    // The local rendering depends on the host timezone; assert the shape,
    // not the values.
    let rendered = calendar(1257894000, false).to_string();
    assert!(!rendered.contains("---"));
    assert!(!rendered.contains("UTC"));
    assert_eq!(rendered.matches(':').count(), 2);
}

#[test]
fn test_delta_unit_selection() {
    assert_eq!(delta(0, 0).to_string(), "0 seconds");
    assert_eq!(delta(5, 6).to_string(), "1 second");
    assert_eq!(delta(0, 2).to_string(), "2 seconds");
    // 90 seconds does not exceed the 2-minute threshold.
    assert_eq!(delta(0, 90).to_string(), "90 seconds");
    assert_eq!(delta(0, 120).to_string(), "120 seconds");
    assert_eq!(delta(100, 280).to_string(), "3 minutes");
    assert_eq!(delta(0, 7201).to_string(), "2 hours");
    assert_eq!(delta(0, 3 * 86400).to_string(), "3 days");
}

#[test]
fn test_delta_is_symmetric() {
    assert_eq!(delta(280, 100).to_string(), delta(100, 280).to_string());
    assert_eq!(delta(-90, 0).to_string(), "90 seconds");
}
