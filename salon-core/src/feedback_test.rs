use super::*;

#[test]
fn decodes_feedback_rows() {
    let body = r#"{
        "id": "3c2b1a09-8f7e-4d6c-b5a4-392817263544",
        "client_telephone": "+221771234567",
        "client_nom": "Ndiaye",
        "client_prenom": "Awa",
        "rating": 5,
        "comment": "Très satisfaite",
        "date_creation": "2026-08-26T11:00:00Z"
    }"#;
    let feedback: ClientFeedback = serde_json::from_str(body).unwrap();
    assert_eq!(feedback.rating, 5);
    assert_eq!(feedback.client_affichage(), "Awa Ndiaye");
}

#[test]
fn decodes_stats_with_string_keyed_distribution() {
    let body = r#"{
        "total_feedbacks": 10,
        "average_rating": 4.25,
        "rating_distribution": {"1": 0, "2": 1, "3": 1, "4": 3, "5": 5}
    }"#;
    let stats: FeedbackStats = serde_json::from_str(body).unwrap();
    assert_eq!(stats.distribution(), [0, 1, 1, 3, 5]);
    assert_eq!(stats.average_affichage(), "4.2");
}

#[test]
fn empty_stats_decode_to_zeroes() {
    let body = r#"{
        "total_feedbacks": 0,
        "average_rating": 0,
        "rating_distribution": {"1": 0, "2": 0, "3": 0, "4": 0, "5": 0}
    }"#;
    let stats: FeedbackStats = serde_json::from_str(body).unwrap();
    assert_eq!(stats.total_feedbacks, 0);
    assert_eq!(stats.distribution(), [0; 5]);
    assert_eq!(stats.average_affichage(), "0.0");
}

#[test]
fn payload_requires_note_phone_and_names() {
    let mut payload = FeedbackPayload {
        client_telephone: "+221771234567".to_string(),
        client_nom: "Ndiaye".to_string(),
        client_prenom: "Awa".to_string(),
        rating: 0,
        comment: None,
    };
    assert_eq!(payload.valider(), Err(ValidationError::NoteHorsBornes));
    payload.rating = 4;
    assert_eq!(payload.valider(), Ok(()));
    payload.client_telephone = String::new();
    assert_eq!(payload.valider(), Err(ValidationError::TelephoneRequis));
    payload.client_telephone = "+221771234567".to_string();
    payload.client_nom = "  ".to_string();
    assert_eq!(
        payload.valider(),
        Err(ValidationError::ChampRequis("Le nom du client"))
    );
}

#[test]
fn payload_serializes_missing_comment_as_null() {
    let payload = FeedbackPayload {
        client_telephone: "+221771234567".to_string(),
        client_nom: "Ndiaye".to_string(),
        client_prenom: "Awa".to_string(),
        rating: 4,
        comment: None,
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["comment"], serde_json::Value::Null);
    assert_eq!(json["rating"], 4);
}
