use super::*;

use salon_core::paiement::StatutPaiement;

fn ligne(id: Uuid, date: &str) -> PaiementRow {
    PaiementRow {
        id,
        client_nom_complet: Some("Awa Diallo".to_owned()),
        prestation_nom: Some("Resserrage".to_owned()),
        montant: 12_500,
        moyen_paiement_affichage: "Espèce".to_owned(),
        statut: StatutPaiement::Reussi,
        date_paiement: date.to_owned(),
    }
}

#[test]
fn premier_chargement_sans_annonce() {
    let liste = vec![ligne(Uuid::new_v4(), "2025-03-01T10:00:00Z")];
    assert!(detecter_nouveau(None, &liste).is_none());
}

#[test]
fn meme_dernier_paiement_sans_annonce() {
    let id = Uuid::new_v4();
    let liste = vec![ligne(id, "2025-03-01T10:00:00Z")];
    assert!(detecter_nouveau(Some(id), &liste).is_none());
}

#[test]
fn nouveau_paiement_detecte() {
    let ancien = Uuid::new_v4();
    let nouveau = Uuid::new_v4();
    let liste = vec![
        ligne(ancien, "2025-03-01T10:00:00Z"),
        ligne(nouveau, "2025-03-01T11:30:00Z"),
    ];
    let detecte = detecter_nouveau(Some(ancien), &liste);
    assert_eq!(detecte.map(|p| p.id), Some(nouveau));
}

#[test]
fn paiement_en_attente_sans_annonce() {
    let ancien = Uuid::new_v4();
    let mut nouveau = ligne(Uuid::new_v4(), "2025-03-01T11:30:00Z");
    nouveau.statut = StatutPaiement::EnAttente;
    let liste = vec![ligne(ancien, "2025-03-01T10:00:00Z"), nouveau];
    assert!(detecter_nouveau(Some(ancien), &liste).is_none());
}

#[test]
fn liste_vide_sans_annonce() {
    assert!(detecter_nouveau(Some(Uuid::new_v4()), &[]).is_none());
}

#[test]
fn message_avec_client_et_montant_groupe() {
    let paiement = ligne(Uuid::new_v4(), "2025-03-01T10:00:00Z");
    assert_eq!(
        message_nouveau_paiement(&paiement),
        "Nouveau paiement reçu! Awa Diallo - 12,500 FCFA"
    );
}

#[test]
fn message_client_inconnu() {
    let mut paiement = ligne(Uuid::new_v4(), "2025-03-01T10:00:00Z");
    paiement.client_nom_complet = None;
    assert!(message_nouveau_paiement(&paiement).contains("Client inconnu"));
}
