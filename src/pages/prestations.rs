//! Service catalog: search, create/edit with price bounds, activation.

#[cfg(test)]
#[path = "prestations_test.rs"]
mod prestations_test;

use leptos::prelude::*;
use uuid::Uuid;

use salon_core::prestation::{
    format_prix_affichage, valider_bornes_prix, Prestation, PrestationPayload, TypePrestation,
};
use salon_core::validate::{validate_required, ValidationError};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::stat_card::StatCard;
#[cfg(feature = "csr")]
use crate::components::toast_host::notifier;
use crate::state::auth::AuthState;
#[cfg(feature = "csr")]
use crate::state::toasts::ToastKind;
use crate::state::toasts::ToastState;
#[cfg(feature = "csr")]
use crate::util::auth::signaler_echec;

/// Raw form fields for the create/edit dialog. Prices stay as text until
/// validation.
#[derive(Clone, Debug, Default)]
struct FormulairePrestation {
    nom: String,
    type_prestation: TypePrestation,
    description: String,
    prix_min: String,
    prix_max: String,
    duree: String,
    actif: bool,
}

impl FormulairePrestation {
    /// Prefill from the full record fetched for edition.
    fn depuis_prestation(prestation: &Prestation) -> Self {
        Self {
            nom: prestation.nom.clone(),
            type_prestation: prestation.type_prestation,
            description: prestation.description.clone().unwrap_or_default(),
            prix_min: prestation.prix_min.map(|v| v.to_string()).unwrap_or_default(),
            prix_max: prestation.prix_max.map(|v| v.to_string()).unwrap_or_default(),
            duree: prestation
                .duree_estimee
                .map(|v| v.to_string())
                .unwrap_or_default(),
            actif: prestation.actif,
        }
    }
}

/// Parse a price field: empty means absent, anything non-numeric is a
/// positive-amount failure.
fn parse_montant(saisie: &str) -> Result<Option<u32>, ValidationError> {
    let saisie = saisie.trim();
    if saisie.is_empty() {
        return Ok(None);
    }
    match saisie.parse::<u32>() {
        Ok(valeur) => Ok(Some(valeur)),
        Err(_) => Err(ValidationError::MontantNonPositif),
    }
}

fn parse_duree(saisie: &str) -> Option<u32> {
    saisie.trim().parse().ok()
}

fn type_depuis(valeur: &str) -> TypePrestation {
    TypePrestation::ALL
        .into_iter()
        .find(|t| t.as_str() == valeur)
        .unwrap_or_default()
}

fn filtre_type_depuis(valeur: &str) -> Option<TypePrestation> {
    TypePrestation::ALL.into_iter().find(|t| t.as_str() == valeur)
}

fn filtre_actif_depuis(valeur: &str) -> Option<bool> {
    match valeur {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Card predicate combining the search box with the two dropdown filters.
fn correspond(
    prestation: &Prestation,
    recherche: &str,
    type_filtre: Option<TypePrestation>,
    actif: Option<bool>,
) -> bool {
    if type_filtre.is_some_and(|attendu| prestation.type_prestation != attendu) {
        return false;
    }
    if actif.is_some_and(|attendu| prestation.actif != attendu) {
        return false;
    }
    prestation.matches_search(recherche)
}

/// Check the form and build the request body.
fn payload_du_formulaire(
    form: &FormulairePrestation,
) -> Result<PrestationPayload, ValidationError> {
    validate_required("Le nom", &form.nom)?;
    let Some(prix_min) = parse_montant(&form.prix_min)? else {
        return Err(ValidationError::ChampRequis("Le prix minimum"));
    };
    if prix_min == 0 {
        return Err(ValidationError::MontantNonPositif);
    }
    let prix_max = parse_montant(&form.prix_max)?;
    valider_bornes_prix(prix_min, prix_max)?;
    let description = form.description.trim();
    Ok(PrestationPayload {
        nom: form.nom.trim().to_owned(),
        type_prestation: form.type_prestation,
        description: if description.is_empty() {
            None
        } else {
            Some(description.to_owned())
        },
        prix_min,
        prix_max,
        duree_estimee: parse_duree(&form.duree),
        actif: form.actif,
    })
}

/// Price label for a row: the server's display string when present, else
/// derived from the bounds.
fn prix_pour(prestation: &Prestation) -> String {
    if !prestation.prix_affichage.is_empty() {
        return prestation.prix_affichage.clone();
    }
    prestation
        .prix_min
        .map(|min| format_prix_affichage(min, prestation.prix_max))
        .unwrap_or_default()
}

#[component]
pub fn PrestationsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let prestations = RwSignal::new(Vec::<Prestation>::new());
    let chargement = RwSignal::new(true);
    let recherche = RwSignal::new(String::new());
    let filtre_type = RwSignal::new(None::<TypePrestation>);
    let filtre_actif = RwSignal::new(None::<bool>);

    let edite = RwSignal::new(None::<Option<Uuid>>);
    let formulaire = RwSignal::new(FormulairePrestation::default());
    let suppression = RwSignal::new(None::<Uuid>);

    let recharger = Callback::new(move |()| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::prestations::lister(&token).await {
                    Ok(liste) => prestations.set(liste),
                    Err(err) => signaler_echec(auth, toasts, &err),
                }
                chargement.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (prestations, chargement, toasts);
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

    let ouvrir_creation = move |_| {
        formulaire.set(FormulairePrestation {
            actif: true,
            ..FormulairePrestation::default()
        });
        edite.set(Some(None));
    };

    // List rows come from the slim serializer; the form needs the real
    // price bounds, so edition starts with a detail fetch.
    let ouvrir_edition = Callback::new(move |id: Uuid| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::prestations::detail(&token, id).await {
                    Ok(prestation) => {
                        formulaire.set(FormulairePrestation::depuis_prestation(&prestation));
                        edite.set(Some(Some(id)));
                    }
                    Err(err) => signaler_echec(auth, toasts, &err),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    });

    let enregistrer = Callback::new(move |payload: PrestationPayload| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            let cible = edite.get_untracked().flatten();
            leptos::task::spawn_local(async move {
                let resultat = match cible {
                    Some(id) => crate::net::prestations::modifier(&token, id, &payload).await,
                    None => crate::net::prestations::creer(&token, &payload).await,
                };
                match resultat {
                    Ok(_) => {
                        let message = if cible.is_some() {
                            "Prestation modifiée"
                        } else {
                            "Prestation créée"
                        };
                        notifier(toasts, ToastKind::Succes, message);
                        edite.set(None);
                        recharger.run(());
                    }
                    Err(err) => signaler_echec(auth, toasts, &err),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (payload, edite);
        }
    });

    let basculer_actif = Callback::new(move |prestation: Prestation| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            leptos::task::spawn_local(async move {
                let resultat = if prestation.actif {
                    crate::net::prestations::desactiver(&token, prestation.id).await
                } else {
                    crate::net::prestations::activer(&token, prestation.id).await
                };
                match resultat {
                    Ok(reponse) => {
                        notifier(toasts, ToastKind::Info, reponse.message);
                        recharger.run(());
                    }
                    Err(err) => signaler_echec(auth, toasts, &err),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = prestation;
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
                match crate::net::prestations::supprimer(&token, id).await {
                    Ok(reponse) => {
                        notifier(toasts, ToastKind::Succes, reponse.message);
                        recharger.run(());
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

    let creer_catalogue_defaut = move |_| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::prestations::creer_defaut(&token).await {
                    Ok(reponse) => {
                        notifier(toasts, ToastKind::Succes, reponse.message);
                        recharger.run(());
                    }
                    Err(err) => signaler_echec(auth, toasts, &err),
                }
            });
        }
    };

    view! {
        <div class="prestations-page">
            <header class="page-entete">
                <select
                    class="champ"
                    on:change=move |ev| filtre_type.set(filtre_type_depuis(&event_target_value(&ev)))
                >
                    <option value="">"Tous les types"</option>
                    {TypePrestation::ALL
                        .into_iter()
                        .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select
                    class="champ"
                    on:change=move |ev| filtre_actif.set(filtre_actif_depuis(&event_target_value(&ev)))
                >
                    <option value="">"Tous les statuts"</option>
                    <option value="true">"Actives"</option>
                    <option value="false">"Inactives"</option>
                </select>
                <input
                    class="champ champ--recherche"
                    type="search"
                    placeholder="Rechercher une prestation..."
                    prop:value=move || recherche.get()
                    on:input=move |ev| recherche.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=ouvrir_creation>
                    "+ Nouvelle prestation"
                </button>
            </header>
            <div class="stat-grille">
                {move || {
                    let liste = prestations.get();
                    let actives = liste.iter().filter(|p| p.actif).count();
                    view! {
                        <StatCard
                            libelle="Prestations actives".to_owned()
                            valeur=actives.to_string()
                            detail=format!("{} au catalogue", liste.len())
                            icone="✂️".to_owned()
                        />
                    }
                }}
            </div>
            <Show
                when=move || !chargement.get()
                fallback=|| view! { <p class="page-chargement">"Chargement des prestations..."</p> }
            >
                <Show when=move || prestations.get().is_empty()>
                    <div class="panneau-vide">
                        <p>"Aucune prestation dans le catalogue."</p>
                        <button class="btn" on:click=creer_catalogue_defaut>
                            "Créer les prestations par défaut"
                        </button>
                    </div>
                </Show>
                <div class="cartes-prestations">
                    {move || {
                        prestations
                            .get()
                            .into_iter()
                            .filter(|prestation| {
                                correspond(
                                    prestation,
                                    &recherche.get(),
                                    filtre_type.get(),
                                    filtre_actif.get(),
                                )
                            })
                            .map(|prestation| {
                                let pour_bascule = prestation.clone();
                                let id = prestation.id;
                                let prix = prix_pour(&prestation);
                                let duree = prestation
                                    .duree_estimee
                                    .map(|minutes| format!("{minutes} min"))
                                    .unwrap_or_default();
                                let badge = if prestation.actif {
                                    "badge badge--actif"
                                } else {
                                    "badge badge--inactif"
                                };
                                let bascule = if prestation.actif {
                                    "Désactiver"
                                } else {
                                    "Activer"
                                };
                                view! {
                                    <article class="carte-prestation">
                                        <header class="carte-prestation__entete">
                                            <h3>{prestation.nom.clone()}</h3>
                                            <span class=badge>
                                                {if prestation.actif { "Active" } else { "Inactive" }}
                                            </span>
                                        </header>
                                        <p class="carte-prestation__type">
                                            {prestation.type_prestation.label()}
                                        </p>
                                        <p class="carte-prestation__description">
                                            {prestation.description.clone().unwrap_or_default()}
                                        </p>
                                        <p class="carte-prestation__prix">{prix}</p>
                                        <p class="carte-prestation__duree">{duree}</p>
                                        <div class="carte-prestation__actions">
                                            <button
                                                class="btn btn--petit"
                                                on:click=move |_| ouvrir_edition.run(id)
                                            >
                                                "Modifier"
                                            </button>
                                            <button
                                                class="btn btn--petit"
                                                on:click=move |_| {
                                                    basculer_actif.run(pour_bascule.clone())
                                                }
                                            >
                                                {bascule}
                                            </button>
                                            <button
                                                class="btn btn--petit btn--danger"
                                                on:click=move |_| suppression.set(Some(id))
                                            >
                                                "Supprimer"
                                            </button>
                                        </div>
                                    </article>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
            <Show when=move || edite.get().is_some()>
                <PrestationFormDialog
                    formulaire=formulaire
                    edition=edite.get().is_some_and(|cible| cible.is_some())
                    on_cancel=Callback::new(move |()| edite.set(None))
                    on_submit=enregistrer
                />
            </Show>
            <Show when=move || suppression.get().is_some()>
                <ConfirmDialog
                    titre="Supprimer la prestation".to_owned()
                    message="La prestation sera retirée du catalogue. Les prestations déjà facturées ne peuvent pas être supprimées.".to_owned()
                    libelle_confirmer="Supprimer".to_owned()
                    on_confirm=confirmer_suppression
                    on_cancel=Callback::new(move |()| suppression.set(None))
                />
            </Show>
        </div>
    }
}

#[component]
fn PrestationFormDialog(
    formulaire: RwSignal<FormulairePrestation>,
    edition: bool,
    on_cancel: Callback<()>,
    on_submit: Callback<PrestationPayload>,
) -> impl IntoView {
    let erreur = RwSignal::new(String::new());

    let valider = Callback::new(move |()| {
        match payload_du_formulaire(&formulaire.get()) {
            Ok(payload) => {
                erreur.set(String::new());
                on_submit.run(payload);
            }
            Err(err) => erreur.set(err.to_string()),
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{if edition { "Modifier la prestation" } else { "Nouvelle prestation" }}</h2>
                <label class="dialog__label">
                    "Nom"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || formulaire.get().nom
                        on:input=move |ev| {
                            formulaire.update(|f| f.nom = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Type"
                    <select
                        class="dialog__input"
                        prop:value=move || formulaire.get().type_prestation.as_str().to_owned()
                        on:change=move |ev| {
                            formulaire
                                .update(|f| {
                                    f.type_prestation = type_depuis(&event_target_value(&ev));
                                });
                        }
                    >
                        {TypePrestation::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Description (optionnelle)"
                    <textarea
                        class="dialog__input"
                        prop:value=move || formulaire.get().description
                        on:input=move |ev| {
                            formulaire.update(|f| f.description = event_target_value(&ev));
                        }
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Prix minimum (FCFA)"
                    <input
                        class="dialog__input"
                        type="number"
                        min="0"
                        prop:value=move || formulaire.get().prix_min
                        on:input=move |ev| {
                            formulaire.update(|f| f.prix_min = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Prix maximum (optionnel)"
                    <input
                        class="dialog__input"
                        type="number"
                        min="0"
                        prop:value=move || formulaire.get().prix_max
                        on:input=move |ev| {
                            formulaire.update(|f| f.prix_max = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Durée estimée (minutes, optionnelle)"
                    <input
                        class="dialog__input"
                        type="number"
                        min="0"
                        prop:value=move || formulaire.get().duree
                        on:input=move |ev| {
                            formulaire.update(|f| f.duree = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label dialog__label--ligne">
                    <input
                        type="checkbox"
                        prop:checked=move || formulaire.get().actif
                        on:change=move |ev| {
                            formulaire.update(|f| f.actif = event_target_checked(&ev));
                        }
                    />
                    "Prestation active"
                </label>
                <Show when=move || !erreur.get().is_empty()>
                    <p class="dialog__erreur">{move || erreur.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Annuler"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| valider.run(())>
                        {if edition { "Enregistrer" } else { "Créer" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
