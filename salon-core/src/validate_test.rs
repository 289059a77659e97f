use super::*;

#[test]
fn telephone_accepts_international_and_local_forms() {
    assert!(is_valid_telephone("+221771234567"));
    assert!(is_valid_telephone("771234567"));
    assert!(is_valid_telephone("0712345678"));
}

#[test]
fn telephone_allows_one_extra_digit_after_leading_one() {
    // Nine digits after the optional 1 prefix.
    assert!(is_valid_telephone("1123456789"));
    assert!(is_valid_telephone("112345678"));
    // 16 digits without the 1 prefix is over the limit.
    assert!(!is_valid_telephone("2345678901234567"));
}

#[test]
fn telephone_rejects_short_or_non_numeric_values() {
    assert!(!is_valid_telephone("12345678"));
    assert!(!is_valid_telephone("77 12 34 56"));
    assert!(!is_valid_telephone("++221771234567"));
    assert!(!is_valid_telephone(""));
}

#[test]
fn validate_telephone_distinguishes_missing_from_malformed() {
    assert_eq!(validate_telephone("  "), Err(ValidationError::TelephoneRequis));
    assert_eq!(validate_telephone("abc"), Err(ValidationError::TelephoneFormat));
    assert_eq!(validate_telephone("+221771234567"), Ok(()));
}

#[test]
fn validate_email_is_lenient_but_catches_obvious_errors() {
    assert_eq!(validate_email(""), Ok(()));
    assert_eq!(validate_email("awa@salon.sn"), Ok(()));
    assert_eq!(validate_email("sans-arobase"), Err(ValidationError::EmailFormat));
    assert_eq!(validate_email("a@b"), Err(ValidationError::EmailFormat));
    assert_eq!(validate_email("a b@salon.sn"), Err(ValidationError::EmailFormat));
}

#[test]
fn rating_must_be_between_one_and_five() {
    assert_eq!(validate_rating(0), Err(ValidationError::NoteHorsBornes));
    assert_eq!(validate_rating(1), Ok(()));
    assert_eq!(validate_rating(5), Ok(()));
    assert_eq!(validate_rating(6), Err(ValidationError::NoteHorsBornes));
}

#[test]
fn password_pair_enforces_length_then_match() {
    assert_eq!(
        validate_password_pair("court", "court"),
        Err(ValidationError::MotDePasseTropCourt)
    );
    assert_eq!(
        validate_password_pair("longmotdepasse", "autrechose"),
        Err(ValidationError::MotsDePasseDifferents)
    );
    assert_eq!(validate_password_pair("longmotdepasse", "longmotdepasse"), Ok(()));
}

#[test]
fn required_field_error_carries_the_label() {
    let err = validate_required("Le nom du client", " ").unwrap_err();
    assert_eq!(err.to_string(), "Le nom du client est requis");
    assert_eq!(validate_required("Le nom du client", "Ndiaye"), Ok(()));
}
