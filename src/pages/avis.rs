//! Feedback review: rating aggregates and the filtered comment list.

#[cfg(test)]
#[path = "avis_test.rs"]
mod avis_test;

use leptos::prelude::*;
use uuid::Uuid;

use salon_core::feedback::{ClientFeedback, FeedbackStats};
use salon_core::time::format_datetime;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::rating_stars::RatingStars;
use crate::components::stat_card::StatCard;
#[cfg(feature = "csr")]
use crate::components::toast_host::notifier;
use crate::state::auth::AuthState;
#[cfg(feature = "csr")]
use crate::state::toasts::ToastKind;
use crate::state::toasts::ToastState;
#[cfg(feature = "csr")]
use crate::util::auth::signaler_echec;

/// Bar width in percent for one note of the distribution.
fn largeur_barre(count: u64, total: u64) -> u64 {
    if total == 0 {
        0
    } else {
        count.saturating_mul(100) / total
    }
}

/// Average rounded to the nearest star for the header display.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn note_arrondie(moyenne: f64) -> u8 {
    moyenne.round().clamp(0.0, 5.0) as u8
}

fn commentaire_affichage(comment: Option<&str>) -> &str {
    match comment {
        Some(texte) if !texte.trim().is_empty() => texte,
        _ => "Aucun commentaire",
    }
}

/// Rating ceiling from the filter select, `""` meaning no ceiling.
fn note_max_depuis(valeur: &str) -> Option<u8> {
    valeur.parse().ok().filter(|note| (1..=5).contains(note))
}

#[component]
pub fn AvisPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let avis = RwSignal::new(Vec::<ClientFeedback>::new());
    let stats = RwSignal::new(FeedbackStats::default());
    let chargement = RwSignal::new(true);
    let recherche = RwSignal::new(String::new());
    let filtre_note = RwSignal::new(None::<u8>);
    let suppression = RwSignal::new(None::<Uuid>);

    let recharger = Callback::new(move |()| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            let texte = recherche.get_untracked().trim().to_owned();
            let note = filtre_note.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::feedback::lister(&token, &texte, note).await {
                    Ok(liste) => avis.set(liste),
                    Err(err) => signaler_echec(auth, toasts, &err),
                }
                chargement.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (avis, chargement, toasts);
        }
    });

    // The aggregates cover every entry, so they sit outside the filters.
    let charger_stats = Callback::new(move |()| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::feedback::statistiques(&token).await {
                    Ok(aggregats) => stats.set(aggregats),
                    Err(err) => signaler_echec(auth, toasts, &err),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = stats;
        }
    });

    let stats_chargees = RwSignal::new(false);
    Effect::new(move || {
        if !auth.get().est_connecte() {
            return;
        }
        recherche.track();
        filtre_note.track();
        recharger.run(());
        if !stats_chargees.get_untracked() {
            stats_chargees.set(true);
            charger_stats.run(());
        }
    });

    let confirmer_suppression = Callback::new(move |()| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            let Some(id) = suppression.get_untracked() else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::feedback::supprimer(&token, id).await {
                    Ok(reponse) => {
                        notifier(toasts, ToastKind::Succes, reponse.message);
                        recharger.run(());
                        charger_stats.run(());
                    }
                    Err(err) => signaler_echec(auth, toasts, &err),
                }
                suppression.set(None);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = suppression;
        }
    });

    view! {
        <div class="avis-page">
            <header class="page-entete">
                <select
                    class="champ"
                    on:change=move |ev| filtre_note.set(note_max_depuis(&event_target_value(&ev)))
                >
                    <option value="">"Toutes les notes"</option>
                    <option value="1">"1 étoile"</option>
                    <option value="2">"2 étoiles et moins"</option>
                    <option value="3">"3 étoiles et moins"</option>
                    <option value="4">"4 étoiles et moins"</option>
                    <option value="5">"5 étoiles"</option>
                </select>
                <input
                    class="champ champ--recherche"
                    type="search"
                    placeholder="Nom, prénom ou téléphone..."
                    prop:value=move || recherche.get()
                    on:input=move |ev| recherche.set(event_target_value(&ev))
                />
            </header>
            <Show
                when=move || !chargement.get()
                fallback=|| view! { <p class="page-chargement">"Chargement des avis..."</p> }
            >
                <div class="stat-grille">
                    {move || {
                        let stats = stats.get();
                        vec![
                            view! {
                                <StatCard
                                    libelle="Avis reçus".to_owned()
                                    valeur=stats.total_feedbacks.to_string()
                                    icone="⭐".to_owned()
                                />
                            },
                            view! {
                                <StatCard
                                    libelle="Note moyenne".to_owned()
                                    valeur=format!("{} / 5", stats.average_affichage())
                                    icone="📈".to_owned()
                                />
                            },
                        ]
                    }}
                </div>
                <section class="repartition-notes">
                    <h2>"Répartition des notes"</h2>
                    {move || {
                        let stats = stats.get();
                        let par_note = stats.distribution();
                        let total = stats.total_feedbacks;
                        (1..=5u8)
                            .rev()
                            .map(|note| {
                                let count = par_note[usize::from(note) - 1];
                                let largeur = largeur_barre(count, total);
                                view! {
                                    <div class="repartition-notes__ligne">
                                        <span class="repartition-notes__libelle">
                                            {format!("{note} ★")}
                                        </span>
                                        <div class="repartition-notes__piste">
                                            <div
                                                class="repartition-notes__barre"
                                                style=format!("width: {largeur}%")
                                            ></div>
                                        </div>
                                        <span class="repartition-notes__compte">
                                            {count.to_string()}
                                        </span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                    <p class="repartition-notes__moyenne">
                        {move || {
                            let stats = stats.get();
                            view! { <RatingStars note=note_arrondie(stats.average_rating)/> }
                        }}
                    </p>
                </section>
                <ul class="liste-avis">
                    {move || {
                        let est_admin = auth.get().est_admin();
                        avis.get()
                            .into_iter()
                            .map(|entree| {
                                let id = entree.id;
                                let commentaire =
                                    commentaire_affichage(entree.comment.as_deref()).to_owned();
                                view! {
                                    <li class="liste-avis__entree">
                                        <div class="liste-avis__entete">
                                            <strong>{entree.client_affichage()}</strong>
                                            <RatingStars note=entree.rating/>
                                            <span class="liste-avis__date">
                                                {format_datetime(&entree.date_creation)}
                                            </span>
                                        </div>
                                        <p class="liste-avis__commentaire">{commentaire}</p>
                                        <Show when=move || est_admin>
                                            <button
                                                class="btn btn--petit btn--danger"
                                                on:click=move |_| suppression.set(Some(id))
                                            >
                                                "Supprimer"
                                            </button>
                                        </Show>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
            <Show when=move || suppression.get().is_some()>
                <ConfirmDialog
                    titre="Supprimer l'avis".to_owned()
                    message="L'avis sera retiré définitivement.".to_owned()
                    libelle_confirmer="Supprimer".to_owned()
                    on_confirm=confirmer_suppression
                    on_cancel=Callback::new(move |()| suppression.set(None))
                />
            </Show>
        </div>
    }
}
