//! Session persistence in `localStorage`.
//!
//! The token, the serialized account and the theme preference live under
//! their own keys so the console survives a page reload without a login
//! round-trip. Reads are best-effort: a corrupt account entry is dropped
//! rather than kept around to fail again.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use salon_core::settings::Theme;
use salon_core::user::Utilisateur;

#[cfg(any(test, feature = "csr"))]
const CLE_TOKEN: &str = "authToken";
#[cfg(any(test, feature = "csr"))]
const CLE_UTILISATEUR: &str = "user";
#[cfg(any(test, feature = "csr"))]
const CLE_THEME: &str = "themePreference";

#[cfg(any(test, feature = "csr"))]
fn decoder_utilisateur(raw: &str) -> Option<Utilisateur> {
    serde_json::from_str(raw).ok()
}

#[cfg(any(test, feature = "csr"))]
fn decoder_theme(raw: &str) -> Option<Theme> {
    Theme::ALL.into_iter().find(|theme| theme.as_str() == raw)
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored session token.
pub fn charger_token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        local_storage()?.get_item(CLE_TOKEN).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Read the stored account, clearing the entry when it no longer decodes.
pub fn charger_utilisateur() -> Option<Utilisateur> {
    #[cfg(feature = "csr")]
    {
        let storage = local_storage()?;
        let raw = storage.get_item(CLE_UTILISATEUR).ok().flatten()?;
        match decoder_utilisateur(&raw) {
            Some(user) => Some(user),
            None => {
                let _ = storage.remove_item(CLE_UTILISATEUR);
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist a fresh login.
pub fn enregistrer_session(token: &str, user: &Utilisateur) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let _ = storage.set_item(CLE_TOKEN, token);
        if let Ok(raw) = serde_json::to_string(user) {
            let _ = storage.set_item(CLE_UTILISATEUR, &raw);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, user);
    }
}

/// Refresh only the stored account, after a profile reload.
pub fn enregistrer_utilisateur(user: &Utilisateur) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        if let Ok(raw) = serde_json::to_string(user) {
            let _ = storage.set_item(CLE_UTILISATEUR, &raw);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = user;
    }
}

/// Drop the stored session, on logout or token rejection. The theme
/// preference survives; it belongs to the browser, not the account.
pub fn effacer_session() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(CLE_TOKEN);
            let _ = storage.remove_item(CLE_UTILISATEUR);
        }
    }
}

/// Read the toggled theme, if one was ever chosen on this browser.
pub fn charger_preference_theme() -> Option<Theme> {
    #[cfg(feature = "csr")]
    {
        let raw = local_storage()?.get_item(CLE_THEME).ok().flatten()?;
        decoder_theme(&raw)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist a theme choice; it wins over the served default from then on.
pub fn enregistrer_preference_theme(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(CLE_THEME, theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}
