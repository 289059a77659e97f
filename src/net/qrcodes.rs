//! Endpoints of `/api/qr-codes/`.

#[cfg(feature = "csr")]
use salon_core::list::ListResponse;
use salon_core::qr::{QrActionReponse, QrCode, QrCodeRow, QrGenerationPayload};
use uuid::Uuid;

#[cfg(feature = "csr")]
use super::api;
use super::api::{ApiError, MessageReponse};

/// Fetch all QR codes, newest first.
///
/// # Errors
///
/// Returns `ApiError` when the request fails or the token is rejected.
pub async fn lister(token: &str) -> Result<Vec<QrCodeRow>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let liste: ListResponse<QrCodeRow> = api::get_json("/qr-codes/", Some(token)).await?;
        Ok(liste.into_items())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(ApiError::HorsNavigateur)
    }
}

/// Generate a QR code for a client, image included.
///
/// # Errors
///
/// Returns a 404 `ApiError` when the client does not exist.
pub async fn generer_pour_client(
    token: &str,
    payload: &QrGenerationPayload,
) -> Result<QrCode, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::post_json("/qr-codes/generer_pour_client/", Some(token), payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, payload);
        Err(ApiError::HorsNavigateur)
    }
}

/// Record one scan. Rejected with a 400 when the code is expired.
///
/// # Errors
///
/// Returns `ApiError` when the code is invalid or the request fails.
pub async fn scanner(token: &str, id: Uuid) -> Result<QrActionReponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::post_empty(&format!("/qr-codes/{id}/scanner/"), Some(token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id);
        Err(ApiError::HorsNavigateur)
    }
}

/// Mark a code as used once its session completed.
///
/// # Errors
///
/// Returns `ApiError` when the code is invalid or the request fails.
pub async fn utiliser(token: &str, id: Uuid) -> Result<QrActionReponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::post_empty(&format!("/qr-codes/{id}/utiliser/"), Some(token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id);
        Err(ApiError::HorsNavigateur)
    }
}

/// Rebuild the PNG of a code whose image was lost.
///
/// # Errors
///
/// Returns `ApiError` when the request fails.
pub async fn regenerer_image(token: &str, id: Uuid) -> Result<QrActionReponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::post_empty(&format!("/qr-codes/{id}/regenerer_image/"), Some(token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id);
        Err(ApiError::HorsNavigateur)
    }
}

/// Purge codes expired for more than thirty days.
///
/// # Errors
///
/// Returns `ApiError` when the request fails.
pub async fn nettoyer_expires(token: &str) -> Result<QrActionReponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::get_json("/qr-codes/nettoyer_expires/", Some(token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(ApiError::HorsNavigateur)
    }
}

/// Delete one QR code.
///
/// # Errors
///
/// Returns `ApiError` when the request fails.
pub async fn supprimer(token: &str, id: Uuid) -> Result<MessageReponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::delete(&format!("/qr-codes/{id}/"), Some(token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id);
        Err(ApiError::HorsNavigateur)
    }
}
