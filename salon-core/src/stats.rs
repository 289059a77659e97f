//! Aggregates computed client-side from the raw list endpoints.
//!
//! The dashboard loads clients, prestations, and payments once and derives
//! everything locally, so a poll cycle refreshes every card from three
//! requests. The payment page header reuses the same counters. Revenue only
//! counts successful payments.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use uuid::Uuid;

use crate::client::{Client, Sexe};
use crate::paiement::{PaiementRow, StatutPaiement};
use crate::prestation::Prestation;
use crate::time::{is_same_day, previous_days, weekday_label};

/// Card values for the dashboard header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_clients: usize,
    pub clients_actifs: usize,
    pub hommes: usize,
    pub femmes: usize,
    pub total_prestations: usize,
    pub prestations_actives: usize,
    pub total_paiements: usize,
    pub paiements_aujourd_hui: usize,
    pub chiffre_affaires: u64,
    pub taux_reussite: u8,
}

/// One bar of the trailing-week revenue chart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointRevenu {
    pub jour: String,
    pub label: String,
    pub montant: u64,
}

/// Header figures for the payment ledger page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResumePaiements {
    pub total: usize,
    pub reussis: usize,
    pub en_attente: usize,
    pub chiffre_affaires: u64,
    pub taux_reussite: u8,
}

/// Integer percentage, rounded half-up.
fn pourcentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let taux = (part * 100 + total / 2) / total;
    u8::try_from(taux).unwrap_or(100)
}

#[must_use]
pub fn resume_paiements(paiements: &[PaiementRow]) -> ResumePaiements {
    let reussis = paiements
        .iter()
        .filter(|p| p.statut == StatutPaiement::Reussi)
        .count();
    ResumePaiements {
        total: paiements.len(),
        reussis,
        en_attente: paiements
            .iter()
            .filter(|p| p.statut == StatutPaiement::EnAttente)
            .count(),
        chiffre_affaires: paiements
            .iter()
            .filter(|p| p.statut == StatutPaiement::Reussi)
            .map(|p| u64::from(p.montant))
            .sum(),
        taux_reussite: pourcentage(reussis, paiements.len()),
    }
}

#[must_use]
pub fn compute_dashboard_stats(
    clients: &[Client],
    prestations: &[Prestation],
    paiements: &[PaiementRow],
    today: &str,
) -> DashboardStats {
    let resume = resume_paiements(paiements);
    DashboardStats {
        total_clients: clients.len(),
        clients_actifs: clients.iter().filter(|c| c.actif).count(),
        hommes: clients.iter().filter(|c| c.sexe == Sexe::M).count(),
        femmes: clients.iter().filter(|c| c.sexe == Sexe::F).count(),
        total_prestations: prestations.len(),
        prestations_actives: prestations.iter().filter(|p| p.actif).count(),
        total_paiements: resume.total,
        paiements_aujourd_hui: paiements
            .iter()
            .filter(|p| is_same_day(&p.date_paiement, today))
            .count(),
        chiffre_affaires: resume.chiffre_affaires,
        taux_reussite: resume.taux_reussite,
    }
}

/// The `n` most recent payments, newest first.
#[must_use]
pub fn recent_paiements(paiements: &[PaiementRow], n: usize) -> Vec<PaiementRow> {
    let mut sorted: Vec<PaiementRow> = paiements.to_vec();
    // ISO timestamps order lexicographically.
    sorted.sort_by(|a, b| b.date_paiement.cmp(&a.date_paiement));
    sorted.truncate(n);
    sorted
}

/// Id of the newest payment, the poll loop's change marker.
#[must_use]
pub fn dernier_paiement(paiements: &[PaiementRow]) -> Option<&PaiementRow> {
    paiements
        .iter()
        .max_by(|a, b| a.date_paiement.cmp(&b.date_paiement))
}

#[must_use]
pub fn dernier_paiement_id(paiements: &[PaiementRow]) -> Option<Uuid> {
    dernier_paiement(paiements).map(|p| p.id)
}

/// Successful revenue per day over the trailing week ending at `today`.
#[must_use]
pub fn revenus_hebdo(paiements: &[PaiementRow], today: &str) -> Vec<PointRevenu> {
    previous_days(today, 7)
        .into_iter()
        .map(|jour| {
            let montant = paiements
                .iter()
                .filter(|p| {
                    p.statut == StatutPaiement::Reussi && is_same_day(&p.date_paiement, &jour)
                })
                .map(|p| u64::from(p.montant))
                .sum();
            let label = weekday_label(&jour).unwrap_or_default().to_string();
            PointRevenu { jour, label, montant }
        })
        .collect()
}

/// Payment counts per status, in the fixed status order.
#[must_use]
pub fn repartition_statuts(paiements: &[PaiementRow]) -> Vec<(StatutPaiement, usize)> {
    StatutPaiement::ALL
        .into_iter()
        .map(|statut| {
            let count = paiements.iter().filter(|p| p.statut == statut).count();
            (statut, count)
        })
        .collect()
}
