use super::*;

#[test]
fn date_part_strips_time_component() {
    assert_eq!(date_part("2026-08-26T09:30:00Z"), "2026-08-26");
    assert_eq!(date_part("2026-08-26"), "2026-08-26");
    assert_eq!(date_part("oops"), "oops");
}

#[test]
fn format_date_renders_french_order() {
    assert_eq!(format_date("2025-01-07T09:30:00Z"), "07/01/2025");
    assert_eq!(format_date("2026-08-26"), "26/08/2026");
}

#[test]
fn format_date_passes_through_invalid_input() {
    assert_eq!(format_date("pas une date"), "pas une date");
    assert_eq!(format_date("2026-13-40"), "2026-13-40");
}

#[test]
fn format_datetime_keeps_hours_and_minutes() {
    assert_eq!(format_datetime("2025-01-07T09:30:45Z"), "07/01/2025 09:30");
    assert_eq!(format_datetime("2026-08-26"), "26/08/2026");
}

#[test]
fn is_same_day_compares_date_prefixes() {
    assert!(is_same_day("2026-08-26T23:59:59Z", "2026-08-26"));
    assert!(!is_same_day("2026-08-25T10:00:00Z", "2026-08-26"));
}

#[test]
fn previous_days_ends_at_today_inclusive() {
    let days = previous_days("2026-08-26", 3);
    assert_eq!(days, vec!["2026-08-24", "2026-08-25", "2026-08-26"]);
}

#[test]
fn previous_days_crosses_month_boundaries() {
    let days = previous_days("2026-03-02", 4);
    assert_eq!(
        days,
        vec!["2026-02-27", "2026-02-28", "2026-03-01", "2026-03-02"]
    );
}

#[test]
fn previous_days_handles_leap_years() {
    let days = previous_days("2024-03-01", 2);
    assert_eq!(days, vec!["2024-02-29", "2024-03-01"]);
}

#[test]
fn previous_days_rejects_invalid_input() {
    assert!(previous_days("pas une date", 7).is_empty());
}

#[test]
fn weekday_label_matches_known_dates() {
    assert_eq!(weekday_label("1970-01-01"), Some("Jeu"));
    assert_eq!(weekday_label("2024-02-29"), Some("Jeu"));
    assert_eq!(weekday_label("2026-08-26"), Some("Mer"));
    assert_eq!(weekday_label("invalid"), None);
}
