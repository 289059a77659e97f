use super::*;

fn prestation_bornee(prix_min: Option<u32>, prix_max: Option<u32>) -> Prestation {
    let prix_min = prix_min.map_or("null".to_owned(), |v| v.to_string());
    let prix_max = prix_max.map_or("null".to_owned(), |v| v.to_string());
    let body = format!(
        r#"{{
            "id": "0b7c9a10-2f3e-4d5c-9b8a-1c2d3e4f5a6b",
            "nom": "Tresses",
            "type_prestation": "coiffure",
            "prix_min": {prix_min},
            "prix_max": {prix_max},
            "actif": true
        }}"#
    );
    serde_json::from_str(&body).unwrap()
}

fn session_avec_client(with_client: bool) -> SessionPaiement {
    let client = if with_client {
        r#"{
            "id": "7a0f4a2e-90b1-4a6b-8a1e-2f3c5d6e7f80",
            "nom": "Ndiaye",
            "prenom": "Awa",
            "sexe": "F",
            "telephone": "+221771234567"
        }"#
    } else {
        "null"
    };
    let body = format!(
        r#"{{
            "id": "92b6f5e4-d3c2-41b0-9a8f-7e6d5c4b3a29",
            "session_id": "d4f0a1b2-c3e4-4f50-8a9b-0c1d2e3f4a5b",
            "client": {client},
            "statut": "paiement_reussi"
        }}"#
    );
    serde_json::from_str(&body).unwrap()
}

fn formulaire_telephone(telephone: &str) -> FormulaireIdentification {
    FormulaireIdentification {
        telephone: telephone.to_owned(),
        ..FormulaireIdentification::default()
    }
}

#[test]
fn indice_suit_le_statut() {
    assert_eq!(indice_etape(SessionStatut::Scanne), 0);
    assert_eq!(indice_etape(SessionStatut::Identification), 1);
    assert_eq!(indice_etape(SessionStatut::PrestationSelectionnee), 2);
    assert_eq!(indice_etape(SessionStatut::PaiementInitie), 3);
    assert_eq!(indice_etape(SessionStatut::PaiementReussi), 3);
    assert_eq!(indice_etape(SessionStatut::PaiementEchoue), 3);
    assert_eq!(indice_etape(SessionStatut::Abandonne), 3);
    assert_eq!(indice_etape(SessionStatut::Expire), 3);
}

#[test]
fn identification_exige_un_telephone_valide() {
    assert_eq!(
        payload_identification(&formulaire_telephone("   ")),
        Err(ValidationError::TelephoneRequis)
    );
    assert_eq!(
        payload_identification(&formulaire_telephone("abc")),
        Err(ValidationError::TelephoneFormat)
    );
}

#[test]
fn identification_client_connu_sans_champs_personnels() {
    let payload = payload_identification(&formulaire_telephone("+221771234567")).unwrap();
    assert_eq!(payload.telephone, "+221771234567");
    let client = payload.client.unwrap();
    assert_eq!(client.nom, None);
    assert_eq!(client.sexe, None);
    assert_eq!(client.telephone, None);
    // A known number must serialize an empty client object.
    let json = serde_json::to_value(&client).unwrap();
    assert_eq!(json, serde_json::json!({}));
}

#[test]
fn identification_nouveau_client_porte_le_sexe() {
    let mut form = formulaire_telephone("+221771234567");
    form.nom = "  Ndiaye  ".to_owned();
    form.prenom = "Awa".to_owned();
    form.sexe = Sexe::M;
    form.email = "awa@example.com".to_owned();
    let payload = payload_identification(&form).unwrap();
    let client = payload.client.unwrap();
    assert_eq!(client.nom.as_deref(), Some("Ndiaye"));
    assert_eq!(client.sexe, Some(Sexe::M));
    assert_eq!(client.email.as_deref(), Some("awa@example.com"));
    assert_eq!(client.lieu_habitation, None);
}

#[test]
fn identification_email_invalide_rejete() {
    let mut form = formulaire_telephone("+221771234567");
    form.email = "pas-un-email".to_owned();
    assert_eq!(
        payload_identification(&form),
        Err(ValidationError::EmailFormat)
    );
}

#[test]
fn formulaire_prerempli_depuis_le_client() {
    let session = session_avec_client(true);
    let client = session.client.unwrap();
    let form = FormulaireIdentification::depuis_client(&client);
    assert_eq!(form.telephone, "+221771234567");
    assert_eq!(form.prenom, "Awa");
    assert_eq!(form.sexe, Sexe::F);
    assert_eq!(form.email, "");
}

#[test]
fn montant_vide_laisse_le_prix_de_base() {
    let prestation = prestation_bornee(Some(5_000), Some(20_000));
    assert_eq!(montant_negocie(&prestation, ""), Ok(None));
    assert_eq!(montant_negocie(&prestation, "   "), Ok(None));
}

#[test]
fn montant_negocie_respecte_les_bornes() {
    let prestation = prestation_bornee(Some(5_000), Some(20_000));
    assert_eq!(
        montant_negocie(&prestation, "abc"),
        Err(ValidationError::MontantNonPositif)
    );
    assert_eq!(
        montant_negocie(&prestation, "0"),
        Err(ValidationError::MontantNonPositif)
    );
    assert_eq!(
        montant_negocie(&prestation, "3000"),
        Err(ValidationError::MontantSousMinimum(5_000))
    );
    assert_eq!(
        montant_negocie(&prestation, "25000"),
        Err(ValidationError::MontantAuDessusMaximum(20_000))
    );
    assert_eq!(montant_negocie(&prestation, " 12000 "), Ok(Some(12_000)));
}

#[test]
fn prestation_retrouvee_par_id() {
    let liste = vec![prestation_bornee(Some(5_000), None)];
    assert!(prestation_par_id(&liste, "pas-un-uuid").is_none());
    assert!(prestation_par_id(&liste, "11111111-2222-3333-4444-555555555555").is_none());
    let trouvee = prestation_par_id(&liste, "0b7c9a10-2f3e-4d5c-9b8a-1c2d3e4f5a6b").unwrap();
    assert_eq!(trouvee.nom, "Tresses");
}

#[test]
fn avis_exige_une_note() {
    let session = session_avec_client(true);
    assert_eq!(
        payload_avis(&session, 0, "super"),
        Err(ValidationError::NoteHorsBornes)
    );
}

#[test]
fn avis_sans_client_identifie_rejete() {
    let session = session_avec_client(false);
    assert_eq!(
        payload_avis(&session, 5, ""),
        Err(ValidationError::TelephoneRequis)
    );
}

#[test]
fn chargement_distingue_reseau_et_500() {
    assert_eq!(
        message_chargement(&ApiError::Reseau("timeout".to_owned())),
        "Erreur de connexion au serveur. Veuillez vérifier votre connexion."
    );
    assert_eq!(
        message_chargement(&ApiError::Http {
            status: 500,
            message: "Erreur HTTP 500".to_owned(),
        }),
        "Erreur interne du serveur. Veuillez réessayer plus tard."
    );
    assert_eq!(
        message_chargement(&ApiError::Http {
            status: 403,
            message: "interdit".to_owned(),
        }),
        "Erreur lors du chargement de la session: interdit"
    );
}

#[test]
fn demarrage_distingue_400_et_409() {
    assert_eq!(
        message_demarrage(&ApiError::Http {
            status: 400,
            message: "session_id: format invalide".to_owned(),
        }),
        "Données invalides pour la création de session: session_id: format invalide"
    );
    assert_eq!(
        message_demarrage(&ApiError::Http {
            status: 409,
            message: "conflit".to_owned(),
        }),
        "Conflit: la session existe déjà ou est en cours d'utilisation."
    );
    assert_eq!(
        message_demarrage(&ApiError::Reseau("timeout".to_owned())),
        "Impossible d'initialiser la session: erreur réseau: timeout"
    );
}

#[test]
fn identification_refusee_par_statut() {
    assert_eq!(
        message_identification(&ApiError::Http {
            status: 404,
            message: "Session non trouvée".to_owned(),
        }),
        "Session non trouvée, veuillez recommencer"
    );
    assert_eq!(
        message_identification(&ApiError::Http {
            status: 409,
            message: "déjà identifié".to_owned(),
        }),
        "Conflit: client déjà identifié ou session en cours"
    );
    assert_eq!(
        message_identification(&ApiError::Http {
            status: 400,
            message: "telephone: ce champ est requis".to_owned(),
        }),
        "Données invalides: telephone: ce champ est requis"
    );
    // Other failures keep the backend's own message.
    assert_eq!(
        message_identification(&ApiError::Http {
            status: 403,
            message: "interdit".to_owned(),
        }),
        "interdit"
    );
}

#[test]
fn avis_reprend_le_client_de_la_session() {
    let session = session_avec_client(true);
    let payload = payload_avis(&session, 4, "  Très satisfaite  ").unwrap();
    assert_eq!(payload.client_telephone, "+221771234567");
    assert_eq!(payload.client_nom, "Ndiaye");
    assert_eq!(payload.client_prenom, "Awa");
    assert_eq!(payload.rating, 4);
    assert_eq!(payload.comment.as_deref(), Some("Très satisfaite"));

    let sans_commentaire = payload_avis(&session, 5, "   ").unwrap();
    assert_eq!(sans_commentaire.comment, None);
}
