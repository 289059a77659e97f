//! Endpoints of `/api/settings/`.
//!
//! The backend keeps a single settings row. The list endpoint therefore
//! answers with a one-element collection, and updates go through that
//! row's id.

#[cfg(feature = "csr")]
use salon_core::list::ListResponse;
use salon_core::settings::{SiteSettings, SiteSettingsPayload};

#[cfg(feature = "csr")]
use super::api;
use super::api::{ApiError, MessageReponse};

/// Fetch the settings without authentication, for the public pages.
///
/// # Errors
///
/// Returns `ApiError` when the request fails.
pub async fn publics() -> Result<SiteSettings, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::get_json("/settings/public/", None).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::HorsNavigateur)
    }
}

/// Fetch the settings row for the admin console.
///
/// # Errors
///
/// Returns `ApiError` when the request fails, or a decode error when the
/// collection is unexpectedly empty.
pub async fn charger(token: &str) -> Result<SiteSettings, ApiError> {
    #[cfg(feature = "csr")]
    {
        let liste: ListResponse<SiteSettings> = api::get_json("/settings/", Some(token)).await?;
        liste
            .into_items()
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::Decodage("paramètres absents".to_owned()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(ApiError::HorsNavigateur)
    }
}

/// Update the settings row. The backend treats every update as partial
/// and answers with the full row.
///
/// # Errors
///
/// Returns `ApiError` with the backend validation message on a 400.
pub async fn mettre_a_jour(
    token: &str,
    id: u64,
    payload: &SiteSettingsPayload,
) -> Result<SiteSettings, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::put_json(&format!("/settings/{id}/"), Some(token), payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id, payload);
        Err(ApiError::HorsNavigateur)
    }
}

/// Fetch the factory values used by the reset button.
///
/// # Errors
///
/// Returns `ApiError` when the request fails.
pub async fn valeurs_defaut(token: &str) -> Result<SiteSettingsPayload, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::get_json("/settings/defaults/", Some(token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(ApiError::HorsNavigateur)
    }
}

/// Drop the server-side settings cache after an update.
///
/// # Errors
///
/// Returns `ApiError` when the request fails.
pub async fn vider_cache(token: &str) -> Result<MessageReponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::post_empty("/settings/clear_cache/", Some(token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(ApiError::HorsNavigateur)
    }
}
