//! Site-wide presentation state: settings row plus browser preferences.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use salon_core::settings::{SiteSettings, Theme};

/// Loaded settings and the browser's theming state. Defaults apply until
/// the public settings endpoint answers.
#[derive(Clone, Debug, Default)]
pub struct SiteState {
    pub settings: SiteSettings,
    /// Theme toggled on this browser, persisted across reloads.
    pub preference: Option<Theme>,
    pub prefere_sombre: bool,
}

impl SiteState {
    /// Theme in effect: a toggled preference wins over the served default.
    #[must_use]
    pub fn theme_effectif(&self) -> Theme {
        self.preference.unwrap_or(self.settings.theme)
    }

    /// Resolved dark-mode flag, `Auto` following the system color scheme.
    #[must_use]
    pub fn en_sombre(&self) -> bool {
        self.theme_effectif().en_sombre(self.prefere_sombre)
    }
}
