//! Dashboard page: headline figures, weekly revenue, recent payments.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It loads the three raw lists
//! once a session is available, derives every card locally, and polls so a
//! payment taken on another till shows up with a toast.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use uuid::Uuid;

use salon_core::money::format_fcfa;
use salon_core::paiement::PaiementRow;
#[cfg(any(test, feature = "csr"))]
use salon_core::paiement::StatutPaiement;
use salon_core::stats::{
    compute_dashboard_stats, dernier_paiement_id, recent_paiements, repartition_statuts,
    revenus_hebdo,
};
use salon_core::time::format_datetime;

use crate::components::charts::{GraphiqueRevenus, RepartitionStatuts};
use crate::components::stat_card::StatCard;
#[cfg(feature = "csr")]
use crate::components::toast_host::notifier;
use crate::state::auth::AuthState;
use crate::state::site::SiteState;
#[cfg(feature = "csr")]
use crate::state::toasts::ToastKind;
use crate::state::toasts::ToastState;
#[cfg(feature = "csr")]
use crate::util::auth::signaler_echec;
use crate::util::clock::aujourd_hui;

#[cfg(feature = "csr")]
const POLL_SECS: u64 = 10;
const RECENTS_AFFICHES: usize = 5;

/// The newest payment when it changed since the previous cycle and went
/// through. The first load never announces anything.
#[cfg(any(test, feature = "csr"))]
fn detecter_nouveau(avant: Option<Uuid>, paiements: &[PaiementRow]) -> Option<&PaiementRow> {
    let avant = avant?;
    let dernier = salon_core::stats::dernier_paiement(paiements)?;
    if dernier.id == avant || dernier.statut != StatutPaiement::Reussi {
        None
    } else {
        Some(dernier)
    }
}

#[cfg(any(test, feature = "csr"))]
fn message_nouveau_paiement(paiement: &PaiementRow) -> String {
    format!(
        "Nouveau paiement reçu! {} - {}",
        paiement.client_affichage(),
        format_fcfa(u64::from(paiement.montant)),
    )
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let site = expect_context::<RwSignal<SiteState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let clients = RwSignal::new(Vec::<salon_core::client::Client>::new());
    let prestations = RwSignal::new(Vec::<salon_core::prestation::Prestation>::new());
    let paiements = RwSignal::new(Vec::<PaiementRow>::new());
    let chargement = RwSignal::new(true);
    let erreur = RwSignal::new(None::<String>);
    let dernier = RwSignal::new(None::<Uuid>);

    let recharger = Callback::new(move |()| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            leptos::task::spawn_local(async move {
                let (clients_charges, prestations_chargees, paiements_charges) = futures::join!(
                    crate::net::clients::lister(&token),
                    crate::net::prestations::lister(&token),
                    crate::net::paiements::lister(&token, "", None),
                );
                match (clients_charges, prestations_chargees, paiements_charges) {
                    (Ok(liste_c), Ok(liste_pr), Ok(liste_pa)) => {
                        if let Some(nouveau) = detecter_nouveau(dernier.get_untracked(), &liste_pa)
                        {
                            notifier(toasts, ToastKind::Succes, message_nouveau_paiement(nouveau));
                        }
                        dernier.set(dernier_paiement_id(&liste_pa));
                        clients.set(liste_c);
                        prestations.set(liste_pr);
                        paiements.set(liste_pa);
                        erreur.set(None);
                    }
                    (Err(err), _, _) | (_, Err(err), _) | (_, _, Err(err)) => {
                        signaler_echec(auth, toasts, &err);
                        erreur.set(Some(err.to_string()));
                    }
                }
                chargement.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (dernier, toasts);
        }
    });

    let demande = RwSignal::new(false);
    Effect::new(move || {
        if demande.get() {
            return;
        }
        if !auth.get().est_connecte() {
            return;
        }
        demande.set(true);
        recharger.run(());
    });

    #[cfg(feature = "csr")]
    {
        let vivant = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let vivant_tache = vivant.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(POLL_SECS)).await;
                if !vivant_tache.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if !auth.get_untracked().est_connecte() {
                    continue;
                }
                recharger.run(());
            }
        });
        on_cleanup(move || vivant.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class="dashboard-page">
            <p class="dashboard-page__bienvenue">
                {move || site.get().settings.welcome_message.clone()}
            </p>
            <Show when=move || erreur.get().is_some()>
                <p class="page-erreur">{move || erreur.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !chargement.get()
                fallback=|| view! { <p class="page-chargement">"Chargement du tableau de bord..."</p> }
            >
                <div class="dashboard-page__cartes">
                    {move || {
                        let stats = compute_dashboard_stats(
                            &clients.get(),
                            &prestations.get(),
                            &paiements.get(),
                            &aujourd_hui(),
                        );
                        view! {
                            <StatCard
                                libelle="Clients".to_owned()
                                valeur=stats.total_clients.to_string()
                                icone="👥".to_owned()
                            />
                            <StatCard
                                libelle="Chiffre d'affaires".to_owned()
                                valeur=format_fcfa(stats.chiffre_affaires)
                                detail=format!("{} paiements", stats.total_paiements)
                                icone="💰".to_owned()
                            />
                            <StatCard
                                libelle="Paiements aujourd'hui".to_owned()
                                valeur=stats.paiements_aujourd_hui.to_string()
                                icone="💳".to_owned()
                            />
                            <StatCard
                                libelle="Taux de réussite".to_owned()
                                valeur=format!("{}%", stats.taux_reussite)
                                detail=format!(
                                    "{} prestations actives",
                                    stats.prestations_actives,
                                )
                                icone="✅".to_owned()
                            />
                        }
                    }}
                </div>
                <div class="dashboard-page__cartes">
                    {move || {
                        let stats = compute_dashboard_stats(
                            &clients.get(),
                            &prestations.get(),
                            &paiements.get(),
                            &aujourd_hui(),
                        );
                        view! {
                            <StatCard
                                libelle="Clients actifs".to_owned()
                                valeur=stats.clients_actifs.to_string()
                                icone="🟢".to_owned()
                            />
                            <StatCard
                                libelle="Hommes".to_owned()
                                valeur=stats.hommes.to_string()
                                icone="👨".to_owned()
                            />
                            <StatCard
                                libelle="Femmes".to_owned()
                                valeur=stats.femmes.to_string()
                                icone="👩".to_owned()
                            />
                        }
                    }}
                </div>
                <div class="dashboard-page__graphes">
                    {move || {
                        view! {
                            <GraphiqueRevenus points=revenus_hebdo(
                                &paiements.get(),
                                &aujourd_hui(),
                            )/>
                            <RepartitionStatuts repartition=repartition_statuts(&paiements.get())/>
                        }
                    }}
                </div>
                <section class="dashboard-page__recents">
                    <h2>"Paiements récents"</h2>
                    <ul class="liste-paiements">
                        {move || {
                            recent_paiements(&paiements.get(), RECENTS_AFFICHES)
                                .into_iter()
                                .map(|paiement| {
                                    let client = paiement.client_affichage().to_owned();
                                    let prestation = paiement.prestation_affichage().to_owned();
                                    let montant = format_fcfa(u64::from(paiement.montant));
                                    let date = format_datetime(&paiement.date_paiement);
                                    let badge = format!("badge badge--{}", paiement.statut.as_str());
                                    view! {
                                        <li class="liste-paiements__ligne">
                                            <span class="liste-paiements__client">{client}</span>
                                            <span class="liste-paiements__prestation">{prestation}</span>
                                            <span class="liste-paiements__montant">{montant}</span>
                                            <span class=badge>{paiement.statut.label()}</span>
                                            <span class="liste-paiements__date">{date}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </section>
            </Show>
        </div>
    }
}
