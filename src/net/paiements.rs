//! Endpoints of `/api/paiements/`.

#[cfg(feature = "csr")]
use salon_core::list::ListResponse;
use salon_core::paiement::{Paiement, PaiementPayload, PaiementRow, StatutPaiement};
use uuid::Uuid;

#[cfg(feature = "csr")]
use super::api;
use super::api::{ApiError, MessageReponse};

/// Fetch payments, newest first. A non-empty `recherche` and a `statut`
/// narrow the query server-side.
///
/// # Errors
///
/// Returns `ApiError` when the request fails or the token is rejected.
pub async fn lister(
    token: &str,
    recherche: &str,
    statut: Option<StatutPaiement>,
) -> Result<Vec<PaiementRow>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let mut params = Vec::new();
        if !recherche.is_empty() {
            params.push(("search", recherche));
        }
        if let Some(statut) = statut {
            params.push(("statut", statut.as_str()));
        }
        let liste: ListResponse<PaiementRow> =
            api::get_json_query("/paiements/", Some(token), &params).await?;
        Ok(liste.into_items())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, recherche, statut);
        Err(ApiError::HorsNavigateur)
    }
}

/// Fetch one payment with its client and prestation expanded.
///
/// # Errors
///
/// Returns `ApiError` when the request fails or the payment is missing.
pub async fn detail(token: &str, id: Uuid) -> Result<Paiement, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::get_json(&format!("/paiements/{id}/"), Some(token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id);
        Err(ApiError::HorsNavigateur)
    }
}

/// Record a payment taken at the counter.
///
/// # Errors
///
/// Returns `ApiError` with the backend validation message on a 400.
pub async fn creer(token: &str, payload: &PaiementPayload) -> Result<Paiement, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::post_json("/paiements/", Some(token), payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, payload);
        Err(ApiError::HorsNavigateur)
    }
}

/// Apply edits to an existing payment record.
///
/// # Errors
///
/// Returns `ApiError` with the backend validation message on a 400.
pub async fn modifier(token: &str, id: Uuid, payload: &PaiementPayload) -> Result<Paiement, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::patch_json(&format!("/paiements/{id}/"), Some(token), payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id, payload);
        Err(ApiError::HorsNavigateur)
    }
}

/// Cancel a pending or in-progress payment by patching its status.
///
/// # Errors
///
/// Returns `ApiError` when the request fails.
pub async fn annuler(token: &str, id: Uuid) -> Result<Paiement, ApiError> {
    #[cfg(feature = "csr")]
    {
        let corps = serde_json::json!({ "statut": "annule" });
        api::patch_json(&format!("/paiements/{id}/"), Some(token), &corps).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id);
        Err(ApiError::HorsNavigateur)
    }
}

/// Delete a payment record.
///
/// # Errors
///
/// Returns `ApiError` when the deletion is blocked or the request fails.
pub async fn supprimer(token: &str, id: Uuid) -> Result<MessageReponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::delete(&format!("/paiements/{id}/"), Some(token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id);
        Err(ApiError::HorsNavigateur)
    }
}
