//! Site settings: branding, palette, and appearance preferences.
//!
//! The backend keeps a single settings row. Reads go through
//! `/api/settings/` (or the unauthenticated `/api/settings/public/`);
//! writes are partial updates of the branding fields. Theme and font size
//! are served with the row but not writable, so they act as defaults the
//! browser preference can override.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::{Deserialize, Serialize};

use crate::color::is_valid_hex_color;
use crate::validate::ValidationError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Clair,
    Sombre,
    #[default]
    Auto,
}

impl Theme {
    pub const ALL: [Self; 3] = [Self::Clair, Self::Sombre, Self::Auto];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Clair => "Clair",
            Self::Sombre => "Sombre",
            Self::Auto => "Auto",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clair => "clair",
            Self::Sombre => "sombre",
            Self::Auto => "auto",
        }
    }

    /// Resolve to dark or light, `Auto` following the system preference.
    #[must_use]
    pub fn en_sombre(self, prefere_sombre: bool) -> bool {
        match self {
            Self::Clair => false,
            Self::Sombre => true,
            Self::Auto => prefere_sombre,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Petite,
    #[default]
    Moyenne,
    Grande,
}

impl FontSize {
    pub const ALL: [Self; 3] = [Self::Petite, Self::Moyenne, Self::Grande];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Petite => "Petite",
            Self::Moyenne => "Moyenne",
            Self::Grande => "Grande",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Petite => "petite",
            Self::Moyenne => "moyenne",
            Self::Grande => "grande",
        }
    }

    /// Root font size applied to the document.
    #[must_use]
    pub fn px(self) -> u8 {
        match self {
            Self::Petite => 14,
            Self::Moyenne => 16,
            Self::Grande => 18,
        }
    }
}

/// The settings row, as served by both read endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub id: u64,
    pub site_title: String,
    #[serde(default)]
    pub site_subtitle: String,
    #[serde(default)]
    pub welcome_message: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub favicon_url: Option<String>,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub font_size: FontSize,
    pub primary_color: String,
    pub secondary_color: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            id: 0,
            site_title: "Salon de Paiement".to_string(),
            site_subtitle: "Système de gestion de paiements".to_string(),
            welcome_message: "Bienvenue sur votre espace de gestion".to_string(),
            logo_url: None,
            favicon_url: None,
            theme: Theme::Auto,
            font_size: FontSize::Moyenne,
            primary_color: "#FFD700".to_string(),
            secondary_color: "#E3F2FD".to_string(),
            contact_email: String::new(),
            contact_phone: String::new(),
            meta_description: "Système de gestion de paiements pour salon".to_string(),
            updated_at: String::new(),
        }
    }
}

impl SiteSettings {
    /// Seed the settings form from the current row.
    #[must_use]
    pub fn payload(&self) -> SiteSettingsPayload {
        SiteSettingsPayload {
            site_title: self.site_title.clone(),
            site_subtitle: self.site_subtitle.clone(),
            welcome_message: self.welcome_message.clone(),
            primary_color: self.primary_color.clone(),
            secondary_color: self.secondary_color.clone(),
            contact_email: self.contact_email.clone(),
            contact_phone: self.contact_phone.clone(),
            meta_description: self.meta_description.clone(),
        }
    }
}

/// Writable branding fields; also the shape of `/api/settings/defaults/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteSettingsPayload {
    pub site_title: String,
    #[serde(default)]
    pub site_subtitle: String,
    #[serde(default)]
    pub welcome_message: String,
    pub primary_color: String,
    pub secondary_color: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub meta_description: String,
}

impl SiteSettingsPayload {
    /// Form-side checks before submit.
    ///
    /// # Errors
    ///
    /// Returns a missing-title error, then the backend's color-format
    /// messages.
    pub fn valider(&self) -> Result<(), ValidationError> {
        if self.site_title.trim().is_empty() {
            return Err(ValidationError::ChampRequis("Le titre du site"));
        }
        if !is_valid_hex_color(&self.primary_color) {
            return Err(ValidationError::CouleurPrincipaleFormat);
        }
        if !is_valid_hex_color(&self.secondary_color) {
            return Err(ValidationError::CouleurSecondaireFormat);
        }
        Ok(())
    }
}
