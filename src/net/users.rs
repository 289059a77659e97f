//! Endpoints of `/api/utilisateurs/`, login and logout included.

#[cfg(feature = "csr")]
use salon_core::list::ListResponse;
use salon_core::user::{
    ChangePasswordPayload, LoginPayload, LoginReponse, Utilisateur, UtilisateurCreatePayload,
    UtilisateurUpdatePayload,
};

#[cfg(feature = "csr")]
use super::api;
use super::api::{ApiError, MessageReponse};

/// Exchange credentials for a session token.
///
/// # Errors
///
/// Returns a 401 `ApiError` on bad credentials and a 403 when the account
/// is deactivated.
pub async fn login(payload: &LoginPayload) -> Result<LoginReponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::post_json("/utilisateurs/login/", None, payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = payload;
        Err(ApiError::HorsNavigateur)
    }
}

/// Revoke the session token server-side.
///
/// # Errors
///
/// Returns `ApiError` when the request fails.
pub async fn logout(token: &str) -> Result<MessageReponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::post_empty("/utilisateurs/logout/", Some(token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(ApiError::HorsNavigateur)
    }
}

/// Fetch the account behind the current token.
///
/// # Errors
///
/// Returns a 401 `ApiError` when the token is stale or revoked.
pub async fn profil(token: &str) -> Result<Utilisateur, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::get_json("/utilisateurs/profile/", Some(token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(ApiError::HorsNavigateur)
    }
}

/// Fetch all accounts. Admin only; vendeurs get a 403.
///
/// # Errors
///
/// Returns `ApiError` when the request fails or the caller lacks the role.
pub async fn lister(token: &str) -> Result<Vec<Utilisateur>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let liste: ListResponse<Utilisateur> =
            api::get_json("/utilisateurs/", Some(token)).await?;
        Ok(liste.into_items())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(ApiError::HorsNavigateur)
    }
}

/// Create an account.
///
/// # Errors
///
/// Returns `ApiError` with the backend validation message on a 400.
pub async fn creer(token: &str, payload: &UtilisateurCreatePayload) -> Result<Utilisateur, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::post_json("/utilisateurs/", Some(token), payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, payload);
        Err(ApiError::HorsNavigateur)
    }
}

/// Update an account. Owners may edit themselves, admins anyone.
///
/// # Errors
///
/// Returns `ApiError` with the backend validation message on a 400.
pub async fn modifier(
    token: &str,
    id: u64,
    payload: &UtilisateurUpdatePayload,
) -> Result<Utilisateur, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::put_json(&format!("/utilisateurs/{id}/"), Some(token), payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id, payload);
        Err(ApiError::HorsNavigateur)
    }
}

/// Delete an account.
///
/// # Errors
///
/// Returns `ApiError` when the request fails or the caller lacks the role.
pub async fn supprimer(token: &str, id: u64) -> Result<MessageReponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::delete(&format!("/utilisateurs/{id}/"), Some(token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id);
        Err(ApiError::HorsNavigateur)
    }
}

/// Change the caller's password. The token is revoked on success, so the
/// caller must log in again.
///
/// # Errors
///
/// Returns `ApiError` when the current password is wrong or the new pair
/// is rejected.
pub async fn changer_mot_de_passe(
    token: &str,
    payload: &ChangePasswordPayload,
) -> Result<MessageReponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        api::post_json("/utilisateurs/change_password/", Some(token), payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, payload);
        Err(ApiError::HorsNavigateur)
    }
}
