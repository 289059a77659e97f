use super::*;

fn session_json(statut: &str, with_client: bool, with_prestation: bool) -> String {
    let client = if with_client {
        r#"{
            "id": "7a0f4a2e-90b1-4a6b-8a1e-2f3c5d6e7f80",
            "nom": "Ndiaye",
            "prenom": "Awa",
            "sexe": "F",
            "telephone": "+221771234567",
            "nom_complet": "Awa Ndiaye"
        }"#
    } else {
        "null"
    };
    let prestation = if with_prestation {
        r#"{
            "id": "0b7c9a10-2f3e-4d5c-9b8a-1c2d3e4f5a6b",
            "nom": "Shampoing",
            "type_prestation": "shampoing",
            "prix_min": 5000,
            "prix_affichage": "5,000 FCFA",
            "actif": true
        }"#
    } else {
        "null"
    };
    format!(
        r#"{{
            "id": "92b6f5e4-d3c2-41b0-9a8f-7e6d5c4b3a29",
            "session_id": "d4f0a1b2-c3e4-4f50-8a9b-0c1d2e3f4a5b",
            "client": {client},
            "prestation": {prestation},
            "montant_final": null,
            "statut": "{statut}",
            "etape_actuelle": 2,
            "est_active": true,
            "est_expire": false,
            "date_creation": "2026-08-26T09:00:00Z",
            "date_expiration": "2026-08-27T09:00:00Z",
            "paiement": null
        }}"#
    )
}

#[test]
fn decodes_detail_payload_with_nested_records() {
    let session: SessionPaiement =
        serde_json::from_str(&session_json("identification", true, true)).unwrap();
    assert_eq!(session.statut, SessionStatut::Identification);
    assert_eq!(session.client.as_ref().map(|c| c.prenom.as_str()), Some("Awa"));
    assert_eq!(
        session.prestation.as_ref().map(|p| p.nom.as_str()),
        Some("Shampoing")
    );
    assert!(session.est_active);
    assert_eq!(session.paiement, None);
}

#[test]
fn statut_maps_to_workflow_steps() {
    assert_eq!(SessionStatut::Scanne.etape(), 1);
    assert_eq!(SessionStatut::Identification.etape(), 2);
    assert_eq!(SessionStatut::PrestationSelectionnee.etape(), 3);
    assert_eq!(SessionStatut::PaiementInitie.etape(), 4);
    assert_eq!(SessionStatut::PaiementReussi.etape(), 4);
    assert_eq!(SessionStatut::PaiementEchoue.etape(), 4);
    assert_eq!(SessionStatut::Abandonne.etape(), 5);
    assert_eq!(SessionStatut::Expire.etape(), 5);
}

#[test]
fn terminal_statuses_end_the_workflow() {
    for statut in [
        SessionStatut::PaiementReussi,
        SessionStatut::Abandonne,
        SessionStatut::Expire,
    ] {
        assert!(statut.est_terminal());
    }
    assert!(!SessionStatut::PaiementEchoue.est_terminal());
    assert!(!SessionStatut::PaiementInitie.est_terminal());
}

#[test]
fn paiement_possible_needs_client_and_prestation_progress() {
    let no_client: SessionPaiement =
        serde_json::from_str(&session_json("prestation_selectionnee", false, true)).unwrap();
    assert!(!no_client.paiement_possible());

    let selected: SessionPaiement =
        serde_json::from_str(&session_json("prestation_selectionnee", true, false)).unwrap();
    assert!(selected.paiement_possible());

    let with_prestation: SessionPaiement =
        serde_json::from_str(&session_json("identification", true, true)).unwrap();
    assert!(with_prestation.paiement_possible());

    let fresh: SessionPaiement =
        serde_json::from_str(&session_json("identification", true, false)).unwrap();
    assert!(!fresh.paiement_possible());
}

#[test]
fn montant_affiche_prefers_the_negotiated_amount() {
    let mut session: SessionPaiement =
        serde_json::from_str(&session_json("prestation_selectionnee", true, true)).unwrap();
    assert_eq!(session.montant_affiche(), Some(5_000));
    session.montant_final = Some(7_500);
    assert_eq!(session.montant_affiche(), Some(7_500));
    session.prestation = None;
    session.montant_final = None;
    assert_eq!(session.montant_affiche(), None);
}

#[test]
fn payloads_omit_absent_optional_keys() {
    let identification = IdentificationPayload {
        telephone: "+221771234567".to_string(),
        client: None,
    };
    let json = serde_json::to_value(&identification).unwrap();
    assert!(json.get("client").is_none());

    let selection = SelectionPrestationPayload {
        prestation_id: Uuid::nil(),
        montant_final: None,
    };
    let json = serde_json::to_value(&selection).unwrap();
    assert!(json.get("montant_final").is_none());

    let initiation = InitiationPayload {
        moyen_paiement: MoyenPaiement::Espece,
        operateur_mobile: None,
    };
    let json = serde_json::to_value(&initiation).unwrap();
    assert!(json.get("operateur_mobile").is_none());
    assert_eq!(json["moyen_paiement"], "espece");
}

#[test]
fn decodes_initiation_and_recap_answers() {
    let body = r#"{
        "paiement_id": "f1e2d3c4-b5a6-4789-8abc-def012345678",
        "paiement_url": "https://pay.example/checkout/123",
        "montant": 5000,
        "moyen_paiement": "mobile_money"
    }"#;
    let initiation: InitiationPaiement = serde_json::from_str(body).unwrap();
    assert_eq!(initiation.paiement_url.as_deref(), Some("https://pay.example/checkout/123"));
    assert_eq!(initiation.montant, 5_000);

    let recap = format!(
        r#"{{
            "session": {},
            "paiement": null,
            "message_remerciement": "Merci Awa ! Votre shampoing a été enregistré avec succès."
        }}"#,
        session_json("paiement_reussi", true, true)
    );
    let recap: Recapitulatif = serde_json::from_str(&recap).unwrap();
    assert!(recap.message_remerciement.starts_with("Merci Awa"));
    assert_eq!(recap.session.statut, SessionStatut::PaiementReussi);
}
