use super::*;

#[test]
fn parse_hex_rgb_supports_short_and_long_forms() {
    assert_eq!(parse_hex_rgb("#ABC"), Some((170, 187, 204)));
    assert_eq!(parse_hex_rgb("  #a1B2c3 "), Some((161, 178, 195)));
    assert_eq!(parse_hex_rgb("#FFD700"), Some((255, 215, 0)));
}

#[test]
fn parse_hex_rgb_rejects_invalid_inputs() {
    assert_eq!(parse_hex_rgb("FFD700"), None);
    assert_eq!(parse_hex_rgb("#12"), None);
    assert_eq!(parse_hex_rgb("#abcd"), None);
    assert_eq!(parse_hex_rgb("#12GG34"), None);
    assert_eq!(parse_hex_rgb("#+1f2f3"), None);
    // Multibyte input must fail cleanly rather than split a char.
    assert_eq!(parse_hex_rgb("#éa"), None);
}

#[test]
fn is_valid_hex_color_matches_settings_rules() {
    assert!(is_valid_hex_color("#FFD700"));
    assert!(is_valid_hex_color("#abc"));
    assert!(!is_valid_hex_color("gold"));
    assert!(!is_valid_hex_color("#FFD7"));
}

#[test]
fn normalize_hex_color_uses_canonical_lowercase() {
    assert_eq!(normalize_hex_color("#ABC", "#000000"), "#aabbcc");
    assert_eq!(normalize_hex_color("#A1B2C3", "#000000"), "#a1b2c3");
}

#[test]
fn normalize_hex_color_falls_back_to_default_gold() {
    assert_eq!(normalize_hex_color("bleu", "#e3f2fd"), "#e3f2fd");
    assert_eq!(normalize_hex_color("bleu", "invalide"), "#ffd700");
}
