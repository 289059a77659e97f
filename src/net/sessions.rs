//! Endpoints of `/api/sessions-paiement/`.
//!
//! The whole resource is public: a client lands here by scanning a QR code,
//! before any identification. Sessions are addressed by their `session_id`
//! string rather than the row id.

#[cfg(test)]
#[path = "sessions_test.rs"]
mod sessions_test;

use salon_core::session::{
    AuthDirectePayload, AuthDirecteReponse, IdentificationPayload, InitiationPaiement,
    InitiationPayload, Recapitulatif, SelectionPrestationPayload, SessionPaiement,
};

#[cfg(feature = "csr")]
use super::api;
use super::api::ApiError;

#[cfg(any(test, feature = "csr"))]
fn session_path(session_id: &str) -> String {
    format!("/sessions-paiement/{session_id}/")
}

#[cfg(any(test, feature = "csr"))]
fn action_path(session_id: &str, action: &str) -> String {
    format!("/sessions-paiement/{session_id}/{action}/")
}

/// Open a fresh checkout session under the id carried by the QR code.
///
/// # Errors
///
/// Returns `ApiError` when the request fails or the id is already taken.
pub async fn demarrer(session_id: &str) -> Result<SessionPaiement, ApiError> {
    #[cfg(feature = "csr")]
    {
        let corps = serde_json::json!({ "session_id": session_id });
        api::post_json("/sessions-paiement/demarrer_session/", None, &corps).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session_id;
        Err(ApiError::HorsNavigateur)
    }
}

/// Fetch the current state of a session.
///
/// # Errors
///
/// Returns a 404 `ApiError` when the session id is unknown.
pub async fn detail(session_id: &str) -> Result<SessionPaiement, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::get_json(&session_path(session_id), None).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session_id;
        Err(ApiError::HorsNavigateur)
    }
}

/// Attach a client to the session by phone number, creating the record
/// when the number is unknown.
///
/// # Errors
///
/// Returns `ApiError` when the session is inactive or the client data is
/// rejected.
pub async fn identifier_client(
    session_id: &str,
    payload: &IdentificationPayload,
) -> Result<SessionPaiement, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::post_json(&action_path(session_id, "identifier_client"), None, payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session_id, payload);
        Err(ApiError::HorsNavigateur)
    }
}

/// Pick the prestation and the agreed amount.
///
/// # Errors
///
/// Returns `ApiError` when the amount falls outside the prestation's price
/// bounds or the session is inactive.
pub async fn selectionner_prestation(
    session_id: &str,
    payload: &SelectionPrestationPayload,
) -> Result<SessionPaiement, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::post_json(&action_path(session_id, "selectionner_prestation"), None, payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session_id, payload);
        Err(ApiError::HorsNavigateur)
    }
}

/// Start the payment itself. Mobile money answers with a redirect URL;
/// the other means settle immediately.
///
/// # Errors
///
/// Returns `ApiError` when the session is incomplete or the payment
/// provider refuses the initiation.
pub async fn initier_paiement(
    session_id: &str,
    payload: &InitiationPayload,
) -> Result<InitiationPaiement, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::post_json(&action_path(session_id, "initier_paiement"), None, payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session_id, payload);
        Err(ApiError::HorsNavigateur)
    }
}

/// Fetch the closing summary with the thank-you message.
///
/// # Errors
///
/// Returns a 404 `ApiError` when the session id is unknown.
pub async fn recapitulatif(session_id: &str) -> Result<Recapitulatif, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::get_json(&action_path(session_id, "recapitulatif"), None).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session_id;
        Err(ApiError::HorsNavigateur)
    }
}

/// Open a session and identify in one call, for clients arriving without
/// a QR code.
///
/// # Errors
///
/// Returns `ApiError` when the phone number is missing or the client data
/// is rejected.
pub async fn authentification_directe(
    payload: &AuthDirectePayload,
) -> Result<AuthDirecteReponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::post_json("/sessions-paiement/authentification_directe/", None, payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = payload;
        Err(ApiError::HorsNavigateur)
    }
}
