use salon_core::settings::{FontSize, Theme};

use super::{taille_depuis, theme_depuis};

#[test]
fn theme_depuis_le_select() {
    assert_eq!(theme_depuis("clair"), Theme::Clair);
    assert_eq!(theme_depuis("sombre"), Theme::Sombre);
    assert_eq!(theme_depuis("auto"), Theme::Auto);
    assert_eq!(theme_depuis("autre"), Theme::Auto);
}

#[test]
fn taille_depuis_le_select() {
    assert_eq!(taille_depuis("petite"), FontSize::Petite);
    assert_eq!(taille_depuis("grande"), FontSize::Grande);
    assert_eq!(taille_depuis(""), FontSize::Moyenne);
}
