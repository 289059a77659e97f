//! Endpoints of `/api/prestations/`.

#[cfg(feature = "csr")]
use salon_core::list::ListResponse;
use salon_core::prestation::{Prestation, PrestationPayload};
use uuid::Uuid;

#[cfg(feature = "csr")]
use super::api;
use super::api::{ApiError, MessageReponse};

/// Fetch the catalog. List rows omit the price bounds.
///
/// # Errors
///
/// Returns `ApiError` when the request fails or the token is rejected.
pub async fn lister(token: &str) -> Result<Vec<Prestation>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let liste: ListResponse<Prestation> = api::get_json("/prestations/", Some(token)).await?;
        Ok(liste.into_items())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(ApiError::HorsNavigateur)
    }
}

/// Fetch the active prestations without a token, for the checkout flow.
/// The list endpoint is the only public one on this resource.
///
/// # Errors
///
/// Returns `ApiError` when the request fails.
pub async fn lister_publique() -> Result<Vec<Prestation>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let liste: ListResponse<Prestation> = api::get_json("/prestations/?actif=true", None).await?;
        Ok(liste.into_items())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::HorsNavigateur)
    }
}

/// Fetch one prestation with its price bounds.
///
/// # Errors
///
/// Returns `ApiError` when the request fails or the prestation is missing.
pub async fn detail(token: &str, id: Uuid) -> Result<Prestation, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::get_json(&format!("/prestations/{id}/"), Some(token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id);
        Err(ApiError::HorsNavigateur)
    }
}

/// Create a catalog entry.
///
/// # Errors
///
/// Returns `ApiError` with the backend validation message on a 400.
pub async fn creer(token: &str, payload: &PrestationPayload) -> Result<Prestation, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::post_json("/prestations/", Some(token), payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, payload);
        Err(ApiError::HorsNavigateur)
    }
}

/// Replace a catalog entry. Omitted optional fields are cleared.
///
/// # Errors
///
/// Returns `ApiError` with the backend validation message on a 400.
pub async fn modifier(
    token: &str,
    id: Uuid,
    payload: &PrestationPayload,
) -> Result<Prestation, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::put_json(&format!("/prestations/{id}/"), Some(token), payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id, payload);
        Err(ApiError::HorsNavigateur)
    }
}

/// Delete a prestation. Answers 400 when payments still reference it.
///
/// # Errors
///
/// Returns `ApiError` when the deletion is blocked or the request fails.
pub async fn supprimer(token: &str, id: Uuid) -> Result<MessageReponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::delete(&format!("/prestations/{id}/"), Some(token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id);
        Err(ApiError::HorsNavigateur)
    }
}

/// Put a prestation back in the catalog shown to clients.
///
/// # Errors
///
/// Returns `ApiError` when the request fails.
pub async fn activer(token: &str, id: Uuid) -> Result<MessageReponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::post_empty(&format!("/prestations/{id}/activer/"), Some(token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id);
        Err(ApiError::HorsNavigateur)
    }
}

/// Hide a prestation from the catalog without deleting it.
///
/// # Errors
///
/// Returns `ApiError` when the request fails.
pub async fn desactiver(token: &str, id: Uuid) -> Result<MessageReponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::post_empty(&format!("/prestations/{id}/desactiver/"), Some(token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id);
        Err(ApiError::HorsNavigateur)
    }
}

/// Seed the six standard salon prestations. Existing types are skipped.
///
/// # Errors
///
/// Returns `ApiError` when the request fails.
pub async fn creer_defaut(token: &str) -> Result<MessageReponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::post_empty("/prestations/creer_prestations_defaut/", Some(token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(ApiError::HorsNavigateur)
    }
}
