use uuid::Uuid;

use salon_core::paiement::{MoyenPaiement, OperateurMobile, Paiement, PaiementRow, StatutPaiement};

use super::{
    correspond, moyen_depuis, moyen_filtre_depuis, operateur_depuis, payload_du_formulaire,
    statut_depuis, FormulairePaiement,
};

fn ligne(client: &str, prestation: &str, statut: StatutPaiement) -> PaiementRow {
    PaiementRow {
        id: Uuid::from_u128(7),
        client_nom_complet: Some(client.to_owned()),
        prestation_nom: Some(prestation.to_owned()),
        montant: 5000,
        moyen_paiement_affichage: "Espèce".to_owned(),
        statut,
        date_paiement: "2024-03-01T10:00:00Z".to_owned(),
    }
}

fn formulaire_complet() -> FormulairePaiement {
    FormulairePaiement {
        client: Uuid::from_u128(1).to_string(),
        prestation: Uuid::from_u128(2).to_string(),
        montant: "7500".to_owned(),
        moyen: MoyenPaiement::Espece,
        operateur: String::new(),
        numero_transaction: String::new(),
        reference_paiement: "  REF-2024-0042  ".to_owned(),
        notes: "  Règlement sur place  ".to_owned(),
    }
}

#[test]
fn correspond_filtre_par_statut() {
    let paiement = ligne("Aminata Diallo", "Coiffure", StatutPaiement::Reussi);
    assert!(correspond(&paiement, None, None, ""));
    assert!(correspond(&paiement, Some(StatutPaiement::Reussi), None, ""));
    assert!(!correspond(&paiement, Some(StatutPaiement::Annule), None, ""));
}

#[test]
fn correspond_filtre_par_moyen_sur_l_affichage() {
    let mut paiement = ligne("Aminata Diallo", "Coiffure", StatutPaiement::Reussi);
    assert!(correspond(&paiement, None, Some(MoyenPaiement::Espece), ""));
    assert!(!correspond(&paiement, None, Some(MoyenPaiement::MobileMoney), ""));

    // The operator suffix does not break the match.
    paiement.moyen_paiement_affichage = "Mobile Money (Wave)".to_owned();
    assert!(correspond(&paiement, None, Some(MoyenPaiement::MobileMoney), ""));
    assert!(!correspond(&paiement, None, Some(MoyenPaiement::CarteBancaire), ""));
}

#[test]
fn correspond_cherche_dans_les_deux_noms() {
    let paiement = ligne("Aminata Diallo", "Manucure", StatutPaiement::Reussi);
    assert!(correspond(&paiement, None, None, "aminata"));
    assert!(correspond(&paiement, None, None, "  MANU "));
    assert!(!correspond(&paiement, None, None, "pedicure"));
}

#[test]
fn statut_depuis_reconnait_les_valeurs_du_select() {
    assert_eq!(statut_depuis(""), None);
    assert_eq!(statut_depuis("reussi"), Some(StatutPaiement::Reussi));
    assert_eq!(statut_depuis("inconnu"), None);
}

#[test]
fn moyen_et_operateur_depuis_les_selects() {
    assert_eq!(moyen_depuis("mobile_money"), MoyenPaiement::MobileMoney);
    assert_eq!(moyen_depuis(""), MoyenPaiement::Espece);
    assert_eq!(
        moyen_filtre_depuis("carte_bancaire"),
        Some(MoyenPaiement::CarteBancaire)
    );
    assert_eq!(moyen_filtre_depuis(""), None);
    assert_eq!(operateur_depuis("wave"), Some(OperateurMobile::Wave));
    assert_eq!(operateur_depuis(""), None);
}

#[test]
fn formulaire_prerempli_depuis_le_paiement() {
    let paiement = Paiement {
        id: Uuid::from_u128(7),
        client: Uuid::from_u128(1),
        client_nom_complet: Some("Aminata Diallo".to_owned()),
        prestation: Uuid::from_u128(2),
        prestation_nom: Some("Coiffure".to_owned()),
        montant: 12_000,
        moyen_paiement: MoyenPaiement::MobileMoney,
        operateur_mobile: Some(OperateurMobile::Orange),
        moyen_paiement_affichage: "Mobile Money (Orange Money)".to_owned(),
        numero_transaction: Some("TX-2024-0889".to_owned()),
        reference_paiement: None,
        statut: StatutPaiement::Reussi,
        date_paiement: "2024-03-01T10:00:00Z".to_owned(),
        date_mise_a_jour: String::new(),
        notes: None,
    };
    let form = FormulairePaiement::depuis_paiement(&paiement);
    assert_eq!(form.client, Uuid::from_u128(1).to_string());
    assert_eq!(form.prestation, Uuid::from_u128(2).to_string());
    assert_eq!(form.montant, "12000");
    assert_eq!(form.moyen, MoyenPaiement::MobileMoney);
    assert_eq!(form.operateur, "orange");
    assert_eq!(form.numero_transaction, "TX-2024-0889");
    assert_eq!(form.reference_paiement, "");
    assert_eq!(form.notes, "");

    // Saving an untouched edit form keeps the record's content.
    let payload = payload_du_formulaire(&form).unwrap();
    assert_eq!(payload.client, paiement.client);
    assert_eq!(payload.montant, paiement.montant);
    assert_eq!(payload.operateur_mobile, paiement.operateur_mobile);
    assert_eq!(payload.numero_transaction, paiement.numero_transaction);
}

#[test]
fn payload_exige_les_selections() {
    let mut form = formulaire_complet();
    form.client = String::new();
    assert_eq!(
        payload_du_formulaire(&form),
        Err("Veuillez sélectionner un client".to_owned())
    );

    let mut form = formulaire_complet();
    form.prestation = "pas-un-uuid".to_owned();
    assert_eq!(
        payload_du_formulaire(&form),
        Err("Veuillez sélectionner une prestation".to_owned())
    );
}

#[test]
fn payload_mobile_money_sans_operateur_refuse() {
    let mut form = formulaire_complet();
    form.moyen = MoyenPaiement::MobileMoney;
    let erreur = payload_du_formulaire(&form).unwrap_err();
    assert!(erreur.contains("opérateur mobile"), "{erreur}");
}

#[test]
fn payload_complet_nettoie_les_notes() {
    let payload = payload_du_formulaire(&formulaire_complet()).unwrap();
    assert_eq!(payload.montant, 7500);
    assert_eq!(payload.notes.as_deref(), Some("Règlement sur place"));
    assert_eq!(payload.numero_transaction, None);
    assert_eq!(payload.reference_paiement.as_deref(), Some("REF-2024-0042"));
    assert_eq!(payload.operateur_mobile, None);
    assert_eq!(payload.statut, None);

    let mut form = formulaire_complet();
    form.notes = "   ".to_owned();
    form.moyen = MoyenPaiement::MobileMoney;
    form.operateur = "orange".to_owned();
    let payload = payload_du_formulaire(&form).unwrap();
    assert_eq!(payload.notes, None);
    assert_eq!(payload.operateur_mobile, Some(OperateurMobile::Orange));
}

#[test]
fn payload_montant_invalide_refuse() {
    let mut form = formulaire_complet();
    form.montant = "abc".to_owned();
    assert_eq!(
        payload_du_formulaire(&form),
        Err("Le montant doit être positif".to_owned())
    );

    form.montant = "0".to_owned();
    let erreur = payload_du_formulaire(&form).unwrap_err();
    assert_eq!(erreur, "Le montant doit être positif");
}
