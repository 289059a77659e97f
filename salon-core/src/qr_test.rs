use super::*;

#[test]
fn enums_match_wire_values_and_labels() {
    for t in TypeQr::ALL {
        assert_eq!(serde_json::to_string(&t).unwrap(), format!("\"{}\"", t.as_str()));
    }
    for s in StatutQr::ALL {
        assert_eq!(serde_json::to_string(&s).unwrap(), format!("\"{}\"", s.as_str()));
    }
    assert_eq!(TypeQr::Identification.label(), "Identification Client");
    assert_eq!(TypeQr::Prestation.label(), "Sélection Prestation");
    assert_eq!(StatutQr::Genere.label(), "Généré");
    assert_eq!(StatutQr::Utilise.label(), "Utilisé");
}

#[test]
fn decodes_slim_list_rows() {
    let body = r#"{
        "id": "5a4b3c2d-1e0f-4a9b-8c7d-6e5f4a3b2c1d",
        "client_nom_complet": "Awa Ndiaye",
        "type_qrcode_display": "Identification Client",
        "statut_display": "Généré",
        "date_expiration": null,
        "est_expire": false,
        "date_creation": "2026-08-26T09:00:00Z"
    }"#;
    let row: QrCodeRow = serde_json::from_str(body).unwrap();
    assert_eq!(row.type_qrcode_display, "Identification Client");
    assert!(!row.est_expire);
    // Older list serializers omit the counter.
    assert_eq!(row.nombre_scans, 0);
}

#[test]
fn decodes_full_codes_with_either_image_key() {
    let with_image = r#"{
        "id": "5a4b3c2d-1e0f-4a9b-8c7d-6e5f4a3b2c1d",
        "client": "7a0f4a2e-90b1-4a6b-8a1e-2f3c5d6e7f80",
        "type_qrcode": "identification",
        "contenu": "https://salon.example/session/abc",
        "statut": "genere",
        "image": "/media/qr_codes/qr_abc.png",
        "nombre_scans": 2,
        "est_valide": true,
        "date_creation": "2026-08-26T09:00:00Z"
    }"#;
    let qr: QrCode = serde_json::from_str(with_image).unwrap();
    assert_eq!(qr.image.as_deref(), Some("/media/qr_codes/qr_abc.png"));
    assert_eq!(qr.type_qrcode, TypeQr::Identification);
    assert_eq!(qr.nombre_scans, 2);

    let legacy = r#"{
        "id": "5a4b3c2d-1e0f-4a9b-8c7d-6e5f4a3b2c1d",
        "type_qrcode": "paiement",
        "statut": "scanne",
        "image_qr": "/media/qr_codes/qr_old.png"
    }"#;
    let qr: QrCode = serde_json::from_str(legacy).unwrap();
    assert_eq!(qr.image.as_deref(), Some("/media/qr_codes/qr_old.png"));
    assert_eq!(qr.statut, StatutQr::Scanne);
}

#[test]
fn generation_payload_omits_absent_fields() {
    let payload = QrGenerationPayload {
        client_id: Uuid::nil(),
        type_qrcode: TypeQr::Identification,
        contenu: None,
        date_expiration: None,
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["type_qrcode"], "identification");
    assert!(json.get("contenu").is_none());
    assert!(json.get("date_expiration").is_none());
}

#[test]
fn action_answers_decode_their_varying_fields() {
    let scan = r#"{
        "message": "QR code scanné avec succès",
        "client": "Awa Ndiaye",
        "type": "Identification Client",
        "nombre_scans": 3
    }"#;
    let reponse: QrActionReponse = serde_json::from_str(scan).unwrap();
    assert_eq!(reponse.nombre_scans, Some(3));
    assert_eq!(reponse.type_affichage.as_deref(), Some("Identification Client"));

    let cleanup = r#"{"message": "4 QR codes expirés ont été supprimés"}"#;
    let reponse: QrActionReponse = serde_json::from_str(cleanup).unwrap();
    assert!(reponse.message.contains("supprimés"));
    assert_eq!(reponse.nombre_utilisations, None);
}
