#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn url_prefixes_api_base() {
    assert_eq!(url("/clients/"), "/api/clients/");
}

#[test]
fn auth_header_uses_token_scheme() {
    assert_eq!(auth_header("abc123"), "Token abc123");
}

#[test]
fn message_from_body_prefers_error_key() {
    let body = r#"{"error": "Client non trouvé"}"#;
    assert_eq!(message_from_body(404, body), "Client non trouvé");
}

#[test]
fn message_from_body_reads_detail_key() {
    let body = r#"{"detail": "Informations d'authentification non fournies."}"#;
    assert_eq!(
        message_from_body(401, body),
        "Informations d'authentification non fournies."
    );
}

#[test]
fn message_from_body_flattens_field_errors() {
    let body = r#"{"telephone": ["Le numéro de téléphone est requis"]}"#;
    assert_eq!(
        message_from_body(400, body),
        "telephone: Le numéro de téléphone est requis"
    );
}

#[test]
fn message_from_body_drops_non_field_errors_prefix() {
    let body = r#"{"non_field_errors": ["Les mots de passe ne correspondent pas"]}"#;
    assert_eq!(
        message_from_body(400, body),
        "Les mots de passe ne correspondent pas"
    );
}

#[test]
fn message_from_body_falls_back_on_garbage() {
    assert_eq!(message_from_body(502, "<html>Bad Gateway</html>"), "Erreur HTTP 502");
}

#[test]
fn message_from_body_falls_back_on_empty_object() {
    assert_eq!(message_from_body(500, "{}"), "Erreur HTTP 500");
}

#[test]
fn api_error_reports_auth_failures() {
    let err = ApiError::Http {
        status: 401,
        message: "Non authentifié".to_owned(),
    };
    assert!(err.est_non_authentifie());
    assert!(!err.est_introuvable());
    assert_eq!(err.status(), Some(401));
}

#[test]
fn api_error_reports_missing_resources() {
    let err = ApiError::Http {
        status: 404,
        message: "Client non trouvé".to_owned(),
    };
    assert!(err.est_introuvable());
    assert!(!err.est_non_authentifie());
}

#[test]
fn api_error_network_has_no_status() {
    let err = ApiError::Reseau("timeout".to_owned());
    assert_eq!(err.status(), None);
    assert!(!err.est_non_authentifie());
}

#[test]
fn api_error_display_uses_backend_message() {
    let err = ApiError::Http {
        status: 400,
        message: "Le montant doit être positif".to_owned(),
    };
    assert_eq!(err.to_string(), "Le montant doit être positif");
}

#[test]
fn message_reponse_default_is_empty() {
    let reponse = MessageReponse::default();
    assert!(reponse.message.is_empty());
}
