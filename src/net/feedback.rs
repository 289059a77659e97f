//! Endpoints of `/api/client-feedback/`.
//!
//! Submission is public so the thank-you page can collect a note without
//! authentication; the admin console reads the list and the aggregates.

use salon_core::feedback::{ClientFeedback, FeedbackPayload, FeedbackStats};
#[cfg(feature = "csr")]
use salon_core::list::ListResponse;
use uuid::Uuid;

#[cfg(feature = "csr")]
use super::api;
use super::api::{ApiError, MessageReponse};

/// Fetch feedback entries, newest first. A non-empty `recherche` and a
/// `note_max` ceiling narrow the query server-side.
///
/// # Errors
///
/// Returns `ApiError` when the request fails.
pub async fn lister(
    token: &str,
    recherche: &str,
    note_max: Option<u8>,
) -> Result<Vec<ClientFeedback>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let note_max = note_max.map(|note| note.to_string());
        let mut params = Vec::new();
        if !recherche.is_empty() {
            params.push(("search", recherche));
        }
        if let Some(note) = note_max.as_deref() {
            params.push(("max_rating", note));
        }
        let liste: ListResponse<ClientFeedback> =
            api::get_json_query("/client-feedback/", Some(token), &params).await?;
        Ok(liste.into_items())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, recherche, note_max);
        Err(ApiError::HorsNavigateur)
    }
}

/// Submit a rating from the checkout flow. No authentication.
///
/// # Errors
///
/// Returns `ApiError` with the backend validation message on a 400.
pub async fn soumettre(payload: &FeedbackPayload) -> Result<ClientFeedback, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::post_json("/client-feedback/", None, payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = payload;
        Err(ApiError::HorsNavigateur)
    }
}

/// Fetch the rating average and distribution.
///
/// # Errors
///
/// Returns `ApiError` when the request fails.
pub async fn statistiques(token: &str) -> Result<FeedbackStats, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::get_json("/client-feedback/statistiques/", Some(token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(ApiError::HorsNavigateur)
    }
}

/// Delete one feedback entry.
///
/// # Errors
///
/// Returns `ApiError` when the request fails.
pub async fn supprimer(token: &str, id: Uuid) -> Result<MessageReponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::delete(&format!("/client-feedback/{id}/"), Some(token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id);
        Err(ApiError::HorsNavigateur)
    }
}
