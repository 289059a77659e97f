//! Current-day lookup for the dashboard's date-based aggregates.

/// Today's date as `YYYY-MM-DD`, empty outside a browser.
#[must_use]
pub fn aujourd_hui() -> String {
    #[cfg(feature = "csr")]
    {
        let iso = js_sys::Date::new_0().to_iso_string();
        iso.as_string()
            .map(|s| s.chars().take(10).collect())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
