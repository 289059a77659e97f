//! Field validation mirroring the backend serializers.
//!
//! The backend answers bad input with French messages; running the same
//! checks before a request keeps forms responsive and keeps the wording
//! identical whichever side rejects first.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use thiserror::Error;

/// Validation failure with the backend's exact French wording.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Le numéro de téléphone doit être au format: '+999999999'. Jusqu'à 15 chiffres autorisés.")]
    TelephoneFormat,
    #[error("Le numéro de téléphone est requis")]
    TelephoneRequis,
    #[error("Adresse email invalide")]
    EmailFormat,
    #[error("Le montant doit être positif")]
    MontantNonPositif,
    #[error("Le montant ne peut pas être inférieur à {0} FCFA")]
    MontantSousMinimum(u32),
    #[error("Le montant ne peut pas dépasser {0} FCFA")]
    MontantAuDessusMaximum(u32),
    #[error("Le prix maximum doit être supérieur ou égal au prix minimum")]
    PrixMaxInferieur,
    #[error("L'opérateur mobile est requis pour les paiements Mobile Money")]
    OperateurRequis,
    #[error("L'opérateur mobile n'est requis que pour les paiements Mobile Money")]
    OperateurInattendu,
    #[error("La note doit être entre 1 et 5.")]
    NoteHorsBornes,
    #[error("La couleur principale doit être au format hexadécimal (#FFD700 ou #FD0)")]
    CouleurPrincipaleFormat,
    #[error("La couleur secondaire doit être au format hexadécimal (#E3F2FD ou #E3F)")]
    CouleurSecondaireFormat,
    #[error("Le mot de passe doit contenir au moins 8 caractères")]
    MotDePasseTropCourt,
    #[error("Les mots de passe ne correspondent pas")]
    MotsDePasseDifferents,
    #[error("{0} est requis")]
    ChampRequis(&'static str),
}

/// Phone check equivalent to the backend pattern `+?1?` then 9 to 15 digits.
#[must_use]
pub fn is_valid_telephone(value: &str) -> bool {
    let rest = value.strip_prefix('+').unwrap_or(value);
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    // A leading 1 is a country prefix, so one extra digit is allowed.
    let max = if rest.starts_with('1') { 16 } else { 15 };
    (9..=max).contains(&rest.len())
}

/// Validate a required phone field.
///
/// # Errors
///
/// Returns [`ValidationError::TelephoneRequis`] on empty input and
/// [`ValidationError::TelephoneFormat`] when the pattern does not match.
pub fn validate_telephone(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::TelephoneRequis);
    }
    if !is_valid_telephone(trimmed) {
        return Err(ValidationError::TelephoneFormat);
    }
    Ok(())
}

/// Loose shape check for an optional email field; empty passes.
///
/// # Errors
///
/// Returns [`ValidationError::EmailFormat`] when `value` is non-empty and
/// not of the `local@domain.tld` shape.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err(ValidationError::EmailFormat);
    };
    let domain_ok = match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    };
    if local.is_empty() || !domain_ok || trimmed.contains(char::is_whitespace) {
        return Err(ValidationError::EmailFormat);
    }
    Ok(())
}

/// Validate a feedback note, which must sit in `1..=5`.
///
/// # Errors
///
/// Returns [`ValidationError::NoteHorsBornes`] otherwise.
pub fn validate_rating(value: u8) -> Result<(), ValidationError> {
    if (1..=5).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::NoteHorsBornes)
    }
}

/// Validate a new password and its confirmation together.
///
/// # Errors
///
/// Returns [`ValidationError::MotDePasseTropCourt`] under 8 characters and
/// [`ValidationError::MotsDePasseDifferents`] on mismatch.
pub fn validate_password_pair(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password.chars().count() < 8 {
        return Err(ValidationError::MotDePasseTropCourt);
    }
    if password != confirm {
        return Err(ValidationError::MotsDePasseDifferents);
    }
    Ok(())
}

/// Reject blank required fields, naming the field in the message.
///
/// # Errors
///
/// Returns [`ValidationError::ChampRequis`] when `value` is blank.
pub fn validate_required(label: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::ChampRequis(label));
    }
    Ok(())
}
