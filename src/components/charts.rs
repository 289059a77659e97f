//! CSS-only charts for the dashboard.
//!
//! Bars are plain divs whose heights come from [`hauteurs_barres`]; no
//! canvas involved, so the layout math stays testable natively.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use leptos::prelude::*;

use salon_core::money::format_grouped;
use salon_core::paiement::StatutPaiement;
use salon_core::stats::PointRevenu;

/// Scale `montants` linearly so the largest bar reaches `hauteur_max`
/// pixels. All-zero weeks stay flat.
fn hauteurs_barres(montants: &[u64], hauteur_max: u32) -> Vec<u32> {
    let plafond = montants.iter().copied().max().unwrap_or(0);
    if plafond == 0 {
        return vec![0; montants.len()];
    }
    montants
        .iter()
        .map(|montant| {
            let brut = u128::from(*montant) * u128::from(hauteur_max) / u128::from(plafond);
            u32::try_from(brut).unwrap_or(hauteur_max)
        })
        .collect()
}

/// Share of `partie` in `total`, rounded, as a 0..=100 percentage.
fn pourcentage(partie: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let brut = (partie * 100 + total / 2) / total;
    u32::try_from(brut).unwrap_or(100)
}

const HAUTEUR_GRAPHE: u32 = 120;

/// Revenue of the trailing week as one bar per day.
#[component]
pub fn GraphiqueRevenus(points: Vec<PointRevenu>) -> impl IntoView {
    let montants: Vec<u64> = points.iter().map(|p| p.montant).collect();
    let hauteurs = hauteurs_barres(&montants, HAUTEUR_GRAPHE);

    view! {
        <div class="graphe-revenus">
            {points
                .into_iter()
                .zip(hauteurs)
                .map(|(point, hauteur)| {
                    view! {
                        <div class="graphe-revenus__colonne">
                            <span class="graphe-revenus__montant">
                                {format_grouped(point.montant)}
                            </span>
                            <div
                                class="graphe-revenus__barre"
                                style=format!("height: {hauteur}px")
                            ></div>
                            <span class="graphe-revenus__jour">{point.label}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Payment counts by status, as labelled horizontal gauges.
#[component]
pub fn RepartitionStatuts(repartition: Vec<(StatutPaiement, usize)>) -> impl IntoView {
    let total: usize = repartition.iter().map(|(_, count)| count).sum();

    view! {
        <div class="repartition">
            {repartition
                .into_iter()
                .map(|(statut, count)| {
                    let part = pourcentage(count, total);
                    view! {
                        <div class="repartition__ligne">
                            <span class=format!(
                                "repartition__libelle repartition__libelle--{}",
                                statut.as_str(),
                            )>{statut.label()}</span>
                            <div class="repartition__gauge">
                                <div
                                    class="repartition__remplissage"
                                    style=format!("width: {part}%")
                                ></div>
                            </div>
                            <span class="repartition__compte">{count}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
