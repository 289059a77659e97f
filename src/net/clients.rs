//! Endpoints of `/api/clients/`.

use salon_core::client::{Client, ClientPayload};
#[cfg(feature = "csr")]
use salon_core::list::ListResponse;
use uuid::Uuid;

#[cfg(feature = "csr")]
use super::api;
use super::api::{ApiError, MessageReponse};

/// Fetch the full client list, newest first.
///
/// # Errors
///
/// Returns `ApiError` when the request fails or the token is rejected.
pub async fn lister(token: &str) -> Result<Vec<Client>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let liste: ListResponse<Client> = api::get_json("/clients/", Some(token)).await?;
        Ok(liste.into_items())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(ApiError::HorsNavigateur)
    }
}

/// Create a client record.
///
/// # Errors
///
/// Returns `ApiError` with the backend validation message on a 400.
pub async fn creer(token: &str, payload: &ClientPayload) -> Result<Client, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::post_json("/clients/", Some(token), payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, payload);
        Err(ApiError::HorsNavigateur)
    }
}

/// Replace a client record.
///
/// # Errors
///
/// Returns `ApiError` with the backend validation message on a 400.
pub async fn modifier(token: &str, id: Uuid, payload: &ClientPayload) -> Result<Client, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::put_json(&format!("/clients/{id}/"), Some(token), payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id, payload);
        Err(ApiError::HorsNavigateur)
    }
}

/// Delete a client. Answers 400 when payments still reference it.
///
/// # Errors
///
/// Returns `ApiError` when the deletion is blocked or the request fails.
pub async fn supprimer(token: &str, id: Uuid) -> Result<MessageReponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::delete(&format!("/clients/{id}/"), Some(token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id);
        Err(ApiError::HorsNavigateur)
    }
}

/// Reactivate a client.
///
/// # Errors
///
/// Returns `ApiError` when the request fails.
pub async fn activer(token: &str, id: Uuid) -> Result<MessageReponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::post_empty(&format!("/clients/{id}/activer/"), Some(token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id);
        Err(ApiError::HorsNavigateur)
    }
}

/// Deactivate a client without deleting its history.
///
/// # Errors
///
/// Returns `ApiError` when the request fails.
pub async fn desactiver(token: &str, id: Uuid) -> Result<MessageReponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::post_empty(&format!("/clients/{id}/desactiver/"), Some(token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id);
        Err(ApiError::HorsNavigateur)
    }
}

/// Look a client up by exact phone number. Public, used by the checkout
/// flow before any account exists.
///
/// # Errors
///
/// Returns a 404 `ApiError` when no client carries that number.
pub async fn rechercher_par_telephone(telephone: &str) -> Result<Client, ApiError> {
    #[cfg(feature = "csr")]
    {
        let corps = serde_json::json!({ "telephone": telephone });
        api::post_json("/clients/recherche_par_telephone/", None, &corps).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = telephone;
        Err(ApiError::HorsNavigateur)
    }
}
