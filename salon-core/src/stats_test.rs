use super::*;

fn client(sexe: &str, actif: bool) -> Client {
    serde_json::from_str(&format!(
        r#"{{
            "id": "{}",
            "nom": "Ndiaye",
            "prenom": "Awa",
            "sexe": "{sexe}",
            "telephone": "+221771234567",
            "actif": {actif}
        }}"#,
        uuid::Uuid::new_v4()
    ))
    .unwrap()
}

fn prestation(actif: bool) -> Prestation {
    serde_json::from_str(&format!(
        r#"{{
            "id": "{}",
            "nom": "Shampoing",
            "type_prestation": "shampoing",
            "prix_affichage": "5,000 FCFA",
            "actif": {actif}
        }}"#,
        uuid::Uuid::new_v4()
    ))
    .unwrap()
}

fn paiement(montant: u32, statut: &str, date: &str) -> PaiementRow {
    serde_json::from_str(&format!(
        r#"{{
            "id": "{}",
            "client_nom_complet": "Awa Ndiaye",
            "prestation_nom": "Shampoing",
            "montant": {montant},
            "moyen_paiement_affichage": "Espèce",
            "statut": "{statut}",
            "date_paiement": "{date}"
        }}"#,
        uuid::Uuid::new_v4()
    ))
    .unwrap()
}

const TODAY: &str = "2026-08-26";

#[test]
fn stats_count_clients_by_sexe_and_activity() {
    let clients = vec![client("M", true), client("F", true), client("F", false)];
    let stats = compute_dashboard_stats(&clients, &[], &[], TODAY);
    assert_eq!(stats.total_clients, 3);
    assert_eq!(stats.clients_actifs, 2);
    assert_eq!(stats.hommes, 1);
    assert_eq!(stats.femmes, 2);
}

#[test]
fn revenue_only_counts_successful_payments() {
    let paiements = vec![
        paiement(5_000, "reussi", "2026-08-26T09:00:00Z"),
        paiement(9_000, "reussi", "2026-08-25T09:00:00Z"),
        paiement(50_000, "en_attente", "2026-08-26T10:00:00Z"),
        paiement(7_000, "annule", "2026-08-26T11:00:00Z"),
    ];
    let stats = compute_dashboard_stats(&[], &[], &paiements, TODAY);
    assert_eq!(stats.chiffre_affaires, 14_000);
    assert_eq!(stats.total_paiements, 4);
    assert_eq!(stats.paiements_aujourd_hui, 3);
    assert_eq!(stats.taux_reussite, 50);
}

#[test]
fn success_rate_rounds_and_handles_empty_input() {
    let stats = compute_dashboard_stats(&[], &[], &[], TODAY);
    assert_eq!(stats.taux_reussite, 0);

    let paiements = vec![
        paiement(1_000, "reussi", "2026-08-26T09:00:00Z"),
        paiement(1_000, "reussi", "2026-08-26T09:01:00Z"),
        paiement(1_000, "echoue", "2026-08-26T09:02:00Z"),
    ];
    let stats = compute_dashboard_stats(&[], &[], &paiements, TODAY);
    // 2/3 rounds to 67.
    assert_eq!(stats.taux_reussite, 67);
}

#[test]
fn resume_paiements_counts_per_status() {
    assert_eq!(resume_paiements(&[]), ResumePaiements::default());

    let paiements = vec![
        paiement(5_000, "reussi", "2026-08-26T09:00:00Z"),
        paiement(9_000, "reussi", "2026-08-25T09:00:00Z"),
        paiement(50_000, "en_attente", "2026-08-26T10:00:00Z"),
        paiement(7_000, "annule", "2026-08-26T11:00:00Z"),
    ];
    let resume = resume_paiements(&paiements);
    assert_eq!(resume.total, 4);
    assert_eq!(resume.reussis, 2);
    assert_eq!(resume.en_attente, 1);
    assert_eq!(resume.chiffre_affaires, 14_000);
    assert_eq!(resume.taux_reussite, 50);
}

#[test]
fn prestation_counts_track_active_entries() {
    let prestations = vec![prestation(true), prestation(false), prestation(true)];
    let stats = compute_dashboard_stats(&[], &prestations, &[], TODAY);
    assert_eq!(stats.total_prestations, 3);
    assert_eq!(stats.prestations_actives, 2);
}

#[test]
fn recent_paiements_sorts_newest_first_and_truncates() {
    let paiements = vec![
        paiement(1, "reussi", "2026-08-20T09:00:00Z"),
        paiement(2, "reussi", "2026-08-26T09:00:00Z"),
        paiement(3, "reussi", "2026-08-23T09:00:00Z"),
    ];
    let recents = recent_paiements(&paiements, 2);
    assert_eq!(recents.len(), 2);
    assert_eq!(recents[0].montant, 2);
    assert_eq!(recents[1].montant, 3);
}

#[test]
fn dernier_paiement_id_tracks_the_newest_row() {
    assert_eq!(dernier_paiement_id(&[]), None);
    let paiements = vec![
        paiement(1, "reussi", "2026-08-20T09:00:00Z"),
        paiement(2, "en_attente", "2026-08-26T09:00:00Z"),
    ];
    assert_eq!(dernier_paiement_id(&paiements), Some(paiements[1].id));
}

#[test]
fn weekly_revenue_builds_seven_labelled_points() {
    let paiements = vec![
        paiement(5_000, "reussi", "2026-08-26T09:00:00Z"),
        paiement(3_000, "reussi", "2026-08-24T09:00:00Z"),
        paiement(9_000, "echoue", "2026-08-24T10:00:00Z"),
        paiement(2_000, "reussi", "2026-08-10T09:00:00Z"),
    ];
    let points = revenus_hebdo(&paiements, TODAY);
    assert_eq!(points.len(), 7);
    assert_eq!(points[0].jour, "2026-08-20");
    assert_eq!(points[6].jour, "2026-08-26");
    assert_eq!(points[6].montant, 5_000);
    assert_eq!(points[6].label, "Mer");
    // Failed payment on the 24th does not count.
    assert_eq!(points[4].montant, 3_000);
    // Out-of-window payment is ignored.
    assert_eq!(points.iter().map(|p| p.montant).sum::<u64>(), 8_000);
}

#[test]
fn status_distribution_covers_every_status() {
    let paiements = vec![
        paiement(1, "reussi", "2026-08-26T09:00:00Z"),
        paiement(1, "reussi", "2026-08-26T09:01:00Z"),
        paiement(1, "annule", "2026-08-26T09:02:00Z"),
    ];
    let repartition = repartition_statuts(&paiements);
    assert_eq!(repartition.len(), 5);
    assert!(repartition.contains(&(StatutPaiement::Reussi, 2)));
    assert!(repartition.contains(&(StatutPaiement::Annule, 1)));
    assert!(repartition.contains(&(StatutPaiement::EnCours, 0)));
}
