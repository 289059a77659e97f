use super::*;

#[test]
fn decodes_the_settings_row() {
    let body = r##"{
        "id": 1,
        "site_title": "Salon Awa",
        "site_subtitle": "Paiements",
        "welcome_message": "Bienvenue",
        "logo": null,
        "logo_url": null,
        "favicon": null,
        "favicon_url": "/media/favicon/fav.png",
        "theme": "sombre",
        "font_size": "grande",
        "primary_color": "#FFD700",
        "secondary_color": "#E3F2FD",
        "contact_email": "",
        "contact_phone": "",
        "meta_description": "desc",
        "created_at": "2026-01-05T10:00:00Z",
        "updated_at": "2026-08-01T10:00:00Z"
    }"##;
    let settings: SiteSettings = serde_json::from_str(body).unwrap();
    assert_eq!(settings.site_title, "Salon Awa");
    assert_eq!(settings.theme, Theme::Sombre);
    assert_eq!(settings.font_size, FontSize::Grande);
    assert_eq!(settings.favicon_url.as_deref(), Some("/media/favicon/fav.png"));
}

#[test]
fn defaults_match_the_backend_seed() {
    let settings = SiteSettings::default();
    assert_eq!(settings.site_title, "Salon de Paiement");
    assert_eq!(settings.primary_color, "#FFD700");
    assert_eq!(settings.secondary_color, "#E3F2FD");
    assert_eq!(settings.theme, Theme::Auto);
    assert_eq!(settings.font_size, FontSize::Moyenne);
}

#[test]
fn theme_resolution_honours_the_system_preference() {
    assert!(!Theme::Clair.en_sombre(true));
    assert!(Theme::Sombre.en_sombre(false));
    assert!(Theme::Auto.en_sombre(true));
    assert!(!Theme::Auto.en_sombre(false));
}

#[test]
fn font_sizes_map_to_pixels() {
    assert_eq!(FontSize::Petite.px(), 14);
    assert_eq!(FontSize::Moyenne.px(), 16);
    assert_eq!(FontSize::Grande.px(), 18);
}

#[test]
fn appearance_enums_use_french_wire_values() {
    assert_eq!(serde_json::to_string(&Theme::Clair).unwrap(), r#""clair""#);
    assert_eq!(serde_json::to_string(&FontSize::Moyenne).unwrap(), r#""moyenne""#);
    for t in Theme::ALL {
        assert_eq!(serde_json::to_string(&t).unwrap(), format!("\"{}\"", t.as_str()));
    }
    for f in FontSize::ALL {
        assert_eq!(serde_json::to_string(&f).unwrap(), format!("\"{}\"", f.as_str()));
    }
}

#[test]
fn payload_round_trips_from_the_row() {
    let settings = SiteSettings::default();
    let payload = settings.payload();
    assert_eq!(payload.site_title, "Salon de Paiement");
    assert_eq!(payload.valider(), Ok(()));
}

#[test]
fn payload_validation_checks_title_then_colors() {
    let mut payload = SiteSettings::default().payload();
    payload.site_title = "  ".to_string();
    assert_eq!(
        payload.valider(),
        Err(ValidationError::ChampRequis("Le titre du site"))
    );
    payload.site_title = "Salon".to_string();
    payload.primary_color = "doré".to_string();
    assert_eq!(payload.valider(), Err(ValidationError::CouleurPrincipaleFormat));
    payload.primary_color = "#FFD700".to_string();
    payload.secondary_color = "#12345".to_string();
    assert_eq!(payload.valider(), Err(ValidationError::CouleurSecondaireFormat));
}

#[test]
fn defaults_endpoint_shape_decodes_into_the_payload() {
    let body = r##"{
        "site_title": "Salon de Paiement",
        "site_subtitle": "Système de gestion de paiements",
        "welcome_message": "Bienvenue sur votre espace de gestion",
        "primary_color": "#FFD700",
        "secondary_color": "#E3F2FD",
        "contact_email": "",
        "contact_phone": "",
        "meta_description": "Système de gestion de paiements pour salon"
    }"##;
    let payload: SiteSettingsPayload = serde_json::from_str(body).unwrap();
    assert_eq!(payload.primary_color, "#FFD700");
    assert_eq!(payload.valider(), Ok(()));
}
