//! REST plumbing shared by the typed endpoint modules.
//!
//! Browser builds (csr): real HTTP calls via `gloo-net` against the salon
//! backend, with the session token sent as a `Token` authorization header.
//! Native builds: stubs returning [`ApiError::HorsNavigateur`] so the pure
//! helpers stay testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! The backend answers failures with `{"error": ...}` on its action
//! endpoints, `{"detail": ...}` from the framework layer, and
//! `{"champ": ["message", ...]}` maps on validation. [`message_from_body`]
//! flattens all three into one human-readable message.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;
use thiserror::Error;

/// Failure modes for a call against the salon backend.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Transport failure before any HTTP status was available.
    #[error("erreur réseau: {0}")]
    Reseau(String),
    /// Non-2xx response, with the backend message when one was provided.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// 2xx response whose body did not match the expected schema.
    #[error("réponse illisible: {0}")]
    Decodage(String),
    /// Call made outside a browser build.
    #[error("appel réseau indisponible hors navigateur")]
    HorsNavigateur,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the backend rejected the session token.
    #[must_use]
    pub fn est_non_authentifie(&self) -> bool {
        self.status() == Some(401)
    }

    /// True when the target resource does not exist.
    #[must_use]
    pub fn est_introuvable(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Plain `{"message": ...}` acknowledgement used by most write actions.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MessageReponse {
    #[serde(default)]
    pub message: String,
}

const API_BASE: &str = match option_env!("SALON_API_BASE") {
    Some(base) => base,
    None => "/api",
};

#[cfg(any(test, feature = "csr"))]
fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[cfg(any(test, feature = "csr"))]
fn auth_header(token: &str) -> String {
    format!("Token {token}")
}

/// Pull the most useful human message out of an error body.
#[cfg(any(test, feature = "csr"))]
fn message_from_body(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = value.get("error").and_then(serde_json::Value::as_str) {
            return msg.to_owned();
        }
        if let Some(msg) = value.get("detail").and_then(serde_json::Value::as_str) {
            return msg.to_owned();
        }
        // Champ -> [messages] des erreurs de validation.
        if let Some(map) = value.as_object() {
            for (champ, erreurs) in map {
                let premier = match erreurs {
                    serde_json::Value::String(texte) => Some(texte.clone()),
                    serde_json::Value::Array(items) => items
                        .first()
                        .and_then(serde_json::Value::as_str)
                        .map(str::to_owned),
                    _ => None,
                };
                if let Some(msg) = premier {
                    if champ == "non_field_errors" {
                        return msg;
                    }
                    return format!("{champ}: {msg}");
                }
            }
        }
    }
    format!("Erreur HTTP {status}")
}

#[cfg(feature = "csr")]
fn build(
    builder: gloo_net::http::RequestBuilder,
    token: Option<&str>,
) -> gloo_net::http::RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &auth_header(token)),
        None => builder,
    }
}

#[cfg(feature = "csr")]
async fn decode<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Reseau(e.to_string()))?;
    if !(200..300).contains(&status) {
        return Err(ApiError::Http {
            status,
            message: message_from_body(status, &body),
        });
    }
    serde_json::from_str(&body).map_err(|e| ApiError::Decodage(e.to_string()))
}

/// GET `path` and decode the JSON body.
///
/// # Errors
///
/// Returns `ApiError` on transport failure, non-2xx status, or schema mismatch.
#[cfg(feature = "csr")]
pub async fn get_json<T: serde::de::DeserializeOwned>(
    path: &str,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let resp = build(gloo_net::http::Request::get(&url(path)), token)
        .send()
        .await
        .map_err(|e| ApiError::Reseau(e.to_string()))?;
    decode(resp).await
}

/// GET `path` with query parameters and decode the JSON body.
///
/// # Errors
///
/// Returns `ApiError` on transport failure, non-2xx status, or schema mismatch.
#[cfg(feature = "csr")]
pub async fn get_json_query<T: serde::de::DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    params: &[(&str, &str)],
) -> Result<T, ApiError> {
    let requete = gloo_net::http::Request::get(&url(path)).query(params.iter().copied());
    let resp = build(requete, token)
        .send()
        .await
        .map_err(|e| ApiError::Reseau(e.to_string()))?;
    decode(resp).await
}

/// POST a JSON `body` to `path` and decode the JSON response.
///
/// # Errors
///
/// Returns `ApiError` on transport failure, non-2xx status, or schema mismatch.
#[cfg(feature = "csr")]
pub async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    let resp = build(gloo_net::http::Request::post(&url(path)), token)
        .json(body)
        .map_err(|e| ApiError::Reseau(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Reseau(e.to_string()))?;
    decode(resp).await
}

/// POST to `path` with an empty body and decode the JSON response.
///
/// # Errors
///
/// Returns `ApiError` on transport failure, non-2xx status, or schema mismatch.
#[cfg(feature = "csr")]
pub async fn post_empty<T: serde::de::DeserializeOwned>(
    path: &str,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let resp = build(gloo_net::http::Request::post(&url(path)), token)
        .send()
        .await
        .map_err(|e| ApiError::Reseau(e.to_string()))?;
    decode(resp).await
}

/// PUT a JSON `body` to `path` and decode the JSON response.
///
/// # Errors
///
/// Returns `ApiError` on transport failure, non-2xx status, or schema mismatch.
#[cfg(feature = "csr")]
pub async fn put_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    let resp = build(gloo_net::http::Request::put(&url(path)), token)
        .json(body)
        .map_err(|e| ApiError::Reseau(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Reseau(e.to_string()))?;
    decode(resp).await
}

/// PATCH a JSON `body` to `path` and decode the JSON response.
///
/// # Errors
///
/// Returns `ApiError` on transport failure, non-2xx status, or schema mismatch.
#[cfg(feature = "csr")]
pub async fn patch_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    let resp = build(gloo_net::http::Request::patch(&url(path)), token)
        .json(body)
        .map_err(|e| ApiError::Reseau(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Reseau(e.to_string()))?;
    decode(resp).await
}

/// DELETE `path`. Tolerates an empty 2xx body since some endpoints answer
/// 204 and others answer 200 with a message.
///
/// # Errors
///
/// Returns `ApiError` on transport failure or non-2xx status.
#[cfg(feature = "csr")]
pub async fn delete(path: &str, token: Option<&str>) -> Result<MessageReponse, ApiError> {
    let resp = build(gloo_net::http::Request::delete(&url(path)), token)
        .send()
        .await
        .map_err(|e| ApiError::Reseau(e.to_string()))?;
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Reseau(e.to_string()))?;
    if !(200..300).contains(&status) {
        return Err(ApiError::Http {
            status,
            message: message_from_body(status, &body),
        });
    }
    if body.trim().is_empty() {
        return Ok(MessageReponse::default());
    }
    serde_json::from_str(&body).map_err(|e| ApiError::Decodage(e.to_string()))
}
