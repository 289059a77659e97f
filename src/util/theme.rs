//! Theme application on the live document.
//!
//! The resolved palette lands as CSS custom properties on the root
//! element and the dark flag as a `data-theme` attribute, so the
//! stylesheet stays the single source of visual truth.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(any(test, feature = "csr"))]
use salon_core::color::normalize_hex_color;
use salon_core::settings::SiteSettings;

#[cfg(any(test, feature = "csr"))]
const OR_DEFAUT: &str = "#FFD700";
#[cfg(any(test, feature = "csr"))]
const BLEU_DEFAUT: &str = "#E3F2FD";

#[cfg(any(test, feature = "csr"))]
fn attribut_theme(en_sombre: bool) -> &'static str {
    if en_sombre { "dark" } else { "light" }
}

/// CSS custom properties derived from the settings row. Colors are
/// normalized so a shorthand `#FD0` stored server-side still yields a
/// canonical value.
#[cfg(any(test, feature = "csr"))]
fn variables_css(settings: &SiteSettings) -> [(&'static str, String); 3] {
    [
        (
            "--primary-color",
            normalize_hex_color(&settings.primary_color, OR_DEFAUT),
        ),
        (
            "--secondary-color",
            normalize_hex_color(&settings.secondary_color, BLEU_DEFAUT),
        ),
        ("--font-size", format!("{}px", settings.font_size.px())),
    ]
}

/// Read the browser's color-scheme preference.
pub fn prefere_sombre() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Push the palette and the dark flag onto the document root.
pub fn appliquer(settings: &SiteSettings, en_sombre: bool) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(racine) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let _ = racine.set_attribute("data-theme", attribut_theme(en_sombre));
        if let Ok(racine) = racine.dyn_into::<web_sys::HtmlElement>() {
            let style = racine.style();
            for (nom, valeur) in variables_css(settings) {
                let _ = style.set_property(nom, &valeur);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (settings, en_sombre);
    }
}

/// Preview an unsaved palette. Only the two color properties move;
/// the rest of the theme waits for the settings round-trip.
pub fn previsualiser_couleurs(primaire: &str, secondaire: &str) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(racine) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        if let Ok(racine) = racine.dyn_into::<web_sys::HtmlElement>() {
            let style = racine.style();
            let _ = style.set_property(
                "--primary-color",
                &normalize_hex_color(primaire, OR_DEFAUT),
            );
            let _ = style.set_property(
                "--secondary-color",
                &normalize_hex_color(secondaire, BLEU_DEFAUT),
            );
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (primaire, secondaire);
    }
}

/// Update the tab title from the configured site title.
pub fn appliquer_titre(settings: &SiteSettings) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(&settings.site_title);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = settings;
    }
}
