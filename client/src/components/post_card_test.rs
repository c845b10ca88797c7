use super::*;

#[test]
fn short_date_keeps_calendar_day() {
    assert_eq!(short_date("2025-01-31T09:15:00.000+00:00"), "2025-01-31");
}

#[test]
fn short_date_passes_through_bare_dates() {
    assert_eq!(short_date("2025-01-31"), "2025-01-31");
    assert_eq!(short_date(""), "");
}

#[test]
fn empty_avatar_falls_back_to_placeholder() {
    assert_eq!(avatar_or_placeholder(""), PLACEHOLDER_AVATAR);
    assert_eq!(avatar_or_placeholder("https://a/b.png"), "https://a/b.png");
}
