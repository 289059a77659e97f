#![cfg(not(feature = "csr"))]

use super::*;

use salon_core::settings::FontSize;

#[test]
fn attribut_theme_maps_flag_to_value() {
    assert_eq!(attribut_theme(true), "dark");
    assert_eq!(attribut_theme(false), "light");
}

#[test]
fn variables_css_normalize_colors() {
    let settings = SiteSettings {
        primary_color: "#FD0".to_owned(),
        secondary_color: "#E3F2FD".to_owned(),
        ..SiteSettings::default()
    };
    let vars = variables_css(&settings);
    assert_eq!(vars[0], ("--primary-color", "#ffdd00".to_owned()));
    assert_eq!(vars[1], ("--secondary-color", "#e3f2fd".to_owned()));
}

#[test]
fn variables_css_fall_back_on_garbage() {
    let settings = SiteSettings {
        primary_color: "doré".to_owned(),
        ..SiteSettings::default()
    };
    let vars = variables_css(&settings);
    assert_eq!(vars[0].1, "#ffd700");
}

#[test]
fn font_size_variable_covers_all_sizes() {
    let petite = SiteSettings {
        font_size: FontSize::Petite,
        ..SiteSettings::default()
    };
    assert_eq!(variables_css(&petite)[2].1, "14px");
    let grande = SiteSettings {
        font_size: FontSize::Grande,
        ..SiteSettings::default()
    };
    assert_eq!(variables_css(&grande)[2].1, "18px");
}

#[test]
fn prefere_sombre_is_false_natively() {
    assert!(!prefere_sombre());
}
