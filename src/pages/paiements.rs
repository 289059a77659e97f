//! Payment ledger: filters, manual capture and edition, cancellation.

#[cfg(test)]
#[path = "paiements_test.rs"]
mod paiements_test;

use leptos::prelude::*;
use uuid::Uuid;

use salon_core::client::Client;
use salon_core::money::format_fcfa;
use salon_core::paiement::{
    MoyenPaiement, OperateurMobile, Paiement, PaiementPayload, PaiementRow, StatutPaiement,
};
use salon_core::prestation::Prestation;
use salon_core::stats::resume_paiements;
use salon_core::time::format_datetime;

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

/// Raw form fields for the capture dialog. Selects carry ids as text.
#[derive(Clone, Debug)]
struct FormulairePaiement {
    client: String,
    prestation: String,
    montant: String,
    moyen: MoyenPaiement,
    operateur: String,
    numero_transaction: String,
    reference_paiement: String,
    notes: String,
}

impl Default for FormulairePaiement {
    fn default() -> Self {
        Self {
            client: String::new(),
            prestation: String::new(),
            montant: String::new(),
            moyen: MoyenPaiement::Espece,
            operateur: String::new(),
            numero_transaction: String::new(),
            reference_paiement: String::new(),
            notes: String::new(),
        }
    }
}

impl FormulairePaiement {
    /// Prefill from the full record fetched for edition.
    fn depuis_paiement(paiement: &Paiement) -> Self {
        Self {
            client: paiement.client.to_string(),
            prestation: paiement.prestation.to_string(),
            montant: paiement.montant.to_string(),
            moyen: paiement.moyen_paiement,
            operateur: paiement
                .operateur_mobile
                .map(|op| op.as_str().to_owned())
                .unwrap_or_default(),
            numero_transaction: paiement.numero_transaction.clone().unwrap_or_default(),
            reference_paiement: paiement.reference_paiement.clone().unwrap_or_default(),
            notes: paiement.notes.clone().unwrap_or_default(),
        }
    }
}

/// Empty optional field stays out of the payload entirely.
fn vide_en_none(valeur: &str) -> Option<String> {
    let valeur = valeur.trim();
    if valeur.is_empty() {
        None
    } else {
        Some(valeur.to_owned())
    }
}

fn statut_depuis(valeur: &str) -> Option<StatutPaiement> {
    StatutPaiement::ALL
        .into_iter()
        .find(|statut| statut.as_str() == valeur)
}

fn moyen_filtre_depuis(valeur: &str) -> Option<MoyenPaiement> {
    MoyenPaiement::ALL
        .into_iter()
        .find(|moyen| moyen.as_str() == valeur)
}

fn moyen_depuis(valeur: &str) -> MoyenPaiement {
    moyen_filtre_depuis(valeur).unwrap_or(MoyenPaiement::Espece)
}

fn operateur_depuis(valeur: &str) -> Option<OperateurMobile> {
    OperateurMobile::ALL
        .into_iter()
        .find(|operateur| operateur.as_str() == valeur)
}

/// Status and means filters plus a case-insensitive match over the display
/// names. Search and status also narrow the server query; rows are re-checked
/// locally so typing filters ahead of the refetch.
fn correspond(
    paiement: &PaiementRow,
    statut: Option<StatutPaiement>,
    moyen: Option<MoyenPaiement>,
    recherche: &str,
) -> bool {
    if let Some(attendu) = statut {
        if paiement.statut != attendu {
            return false;
        }
    }
    // Rows only carry the display string; `Mobile Money (Wave)` style values
    // keep the plain label as prefix.
    if let Some(attendu) = moyen {
        if !paiement.moyen_paiement_affichage.starts_with(attendu.label()) {
            return false;
        }
    }
    let recherche = recherche.trim().to_lowercase();
    if recherche.is_empty() {
        return true;
    }
    paiement.client_affichage().to_lowercase().contains(&recherche)
        || paiement
            .prestation_affichage()
            .to_lowercase()
            .contains(&recherche)
}

/// Check the form and build the request body. Select errors and the
/// operator rule share the same message channel.
fn payload_du_formulaire(form: &FormulairePaiement) -> Result<PaiementPayload, String> {
    let Ok(client) = Uuid::parse_str(form.client.trim()) else {
        return Err("Veuillez sélectionner un client".to_owned());
    };
    let Ok(prestation) = Uuid::parse_str(form.prestation.trim()) else {
        return Err("Veuillez sélectionner une prestation".to_owned());
    };
    let montant: u32 = form
        .montant
        .trim()
        .parse()
        .map_err(|_| "Le montant doit être positif".to_owned())?;
    let payload = PaiementPayload {
        client,
        prestation,
        montant,
        moyen_paiement: form.moyen,
        operateur_mobile: if form.moyen == MoyenPaiement::MobileMoney {
            operateur_depuis(&form.operateur)
        } else {
            None
        },
        numero_transaction: vide_en_none(&form.numero_transaction),
        reference_paiement: vide_en_none(&form.reference_paiement),
        notes: vide_en_none(&form.notes),
        statut: None,
    };
    payload.valider().map_err(|err| err.to_string())?;
    Ok(payload)
}

#[component]
pub fn PaiementsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let paiements = RwSignal::new(Vec::<PaiementRow>::new());
    let clients = RwSignal::new(Vec::<Client>::new());
    let prestations = RwSignal::new(Vec::<Prestation>::new());
    let chargement = RwSignal::new(true);

    let filtre_statut = RwSignal::new(None::<StatutPaiement>);
    let filtre_moyen = RwSignal::new(None::<MoyenPaiement>);
    let recherche = RwSignal::new(String::new());

    let saisie_ouverte = RwSignal::new(false);
    let edition = RwSignal::new(None::<Uuid>);
    let formulaire = RwSignal::new(FormulairePaiement::default());
    let annulation = RwSignal::new(None::<Uuid>);
    let suppression = RwSignal::new(None::<Uuid>);

    let recharger = Callback::new(move |()| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            let texte = recherche.get_untracked().trim().to_owned();
            let statut = filtre_statut.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::paiements::lister(&token, &texte, statut).await {
                    Ok(liste) => paiements.set(liste),
                    Err(err) => signaler_echec(auth, toasts, &err),
                }
                chargement.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (paiements, chargement, toasts);
        }
    });

    // The capture form needs both catalogs; one load is enough.
    let charger_references = Callback::new(move |()| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            leptos::task::spawn_local(async move {
                if let Ok(liste) = crate::net::clients::lister(&token).await {
                    clients.set(liste);
                }
                if let Ok(liste) = crate::net::prestations::lister(&token).await {
                    prestations.set(liste);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (clients, prestations);
        }
    });

    // The list reloads whenever a server-side filter changes; the catalogs
    // load once.
    let references_chargees = RwSignal::new(false);
    Effect::new(move || {
        if !auth.get().est_connecte() {
            return;
        }
        recherche.track();
        filtre_statut.track();
        recharger.run(());
        if !references_chargees.get_untracked() {
            references_chargees.set(true);
            charger_references.run(());
        }
    });

    let ouvrir_saisie = move |_| {
        edition.set(None);
        formulaire.set(FormulairePaiement::default());
        saisie_ouverte.set(true);
    };

    // List rows carry display names only; the form needs the raw ids, so
    // edition starts with a detail fetch.
    let ouvrir_edition = Callback::new(move |id: Uuid| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::paiements::detail(&token, id).await {
                    Ok(paiement) => {
                        formulaire.set(FormulairePaiement::depuis_paiement(&paiement));
                        edition.set(Some(id));
                        saisie_ouverte.set(true);
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

    let enregistrer = Callback::new(move |payload: PaiementPayload| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            let cible = edition.get_untracked();
            leptos::task::spawn_local(async move {
                let resultat = match cible {
                    Some(id) => crate::net::paiements::modifier(&token, id, &payload).await,
                    None => crate::net::paiements::creer(&token, &payload).await,
                };
                match resultat {
                    Ok(_) => {
                        let message = if cible.is_some() {
                            "Paiement modifié"
                        } else {
                            "Paiement enregistré"
                        };
                        notifier(toasts, ToastKind::Succes, message);
                        saisie_ouverte.set(false);
                        edition.set(None);
                        recharger.run(());
                    }
                    Err(err) => signaler_echec(auth, toasts, &err),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (payload, saisie_ouverte, edition);
        }
    });

    let confirmer_annulation = Callback::new(move |()| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            let Some(id) = annulation.get_untracked() else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::paiements::annuler(&token, id).await {
                    Ok(_) => {
                        notifier(toasts, ToastKind::Info, "Paiement annulé");
                        recharger.run(());
                    }
                    Err(err) => signaler_echec(auth, toasts, &err),
                }
                annulation.set(None);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = annulation;
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
                match crate::net::paiements::supprimer(&token, id).await {
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

    view! {
        <div class="paiements-page">
            <header class="page-entete">
                <select
                    class="champ"
                    on:change=move |ev| filtre_statut.set(statut_depuis(&event_target_value(&ev)))
                >
                    <option value="">"Tous les statuts"</option>
                    {StatutPaiement::ALL
                        .into_iter()
                        .map(|statut| {
                            view! { <option value=statut.as_str()>{statut.label()}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <select
                    class="champ"
                    on:change=move |ev| {
                        filtre_moyen.set(moyen_filtre_depuis(&event_target_value(&ev)))
                    }
                >
                    <option value="">"Tous les moyens"</option>
                    {MoyenPaiement::ALL
                        .into_iter()
                        .map(|moyen| {
                            view! { <option value=moyen.as_str()>{moyen.label()}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <input
                    class="champ champ--recherche"
                    type="search"
                    placeholder="Client ou prestation..."
                    prop:value=move || recherche.get()
                    on:input=move |ev| recherche.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=ouvrir_saisie>
                    "+ Nouveau paiement"
                </button>
            </header>
            <div class="stat-grille">
                {move || {
                    let resume = resume_paiements(&paiements.get());
                    view! {
                        <StatCard
                            libelle="Total paiements".to_owned()
                            valeur=resume.total.to_string()
                            icone="🧾".to_owned()
                        />
                        <StatCard
                            libelle="Chiffre d'affaires".to_owned()
                            valeur=format_fcfa(resume.chiffre_affaires)
                            detail="Paiements réussis".to_owned()
                            icone="💰".to_owned()
                        />
                        <StatCard
                            libelle="Réussis".to_owned()
                            valeur=resume.reussis.to_string()
                            detail=format!("{}% de réussite", resume.taux_reussite)
                            icone="✅".to_owned()
                        />
                        <StatCard
                            libelle="En attente".to_owned()
                            valeur=resume.en_attente.to_string()
                            icone="⏳".to_owned()
                        />
                    }
                }}
            </div>
            <Show
                when=move || !chargement.get()
                fallback=|| view! { <p class="page-chargement">"Chargement des paiements..."</p> }
            >
                <table class="tableau">
                    <thead>
                        <tr>
                            <th>"Client"</th>
                            <th>"Prestation"</th>
                            <th>"Montant"</th>
                            <th>"Moyen"</th>
                            <th>"Statut"</th>
                            <th>"Date"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let est_admin = auth.get().est_admin();
                            paiements
                                .get()
                                .into_iter()
                                .filter(|paiement| {
                                    correspond(
                                        paiement,
                                        filtre_statut.get(),
                                        filtre_moyen.get(),
                                        &recherche.get(),
                                    )
                                })
                                .map(|paiement| {
                                    let id = paiement.id;
                                    let annulable = paiement.statut.est_annulable();
                                    let badge = format!("badge badge--{}", paiement.statut.as_str());
                                    view! {
                                        <tr class="tableau__ligne">
                                            <td>{paiement.client_affichage().to_owned()}</td>
                                            <td>{paiement.prestation_affichage().to_owned()}</td>
                                            <td>{format_fcfa(u64::from(paiement.montant))}</td>
                                            <td>{paiement.moyen_paiement_affichage.clone()}</td>
                                            <td>
                                                <span class=badge>{paiement.statut.label()}</span>
                                            </td>
                                            <td>{format_datetime(&paiement.date_paiement)}</td>
                                            <td class="tableau__actions">
                                                <button
                                                    class="btn btn--petit"
                                                    on:click=move |_| ouvrir_edition.run(id)
                                                >
                                                    "Modifier"
                                                </button>
                                                <Show when=move || annulable>
                                                    <button
                                                        class="btn btn--petit"
                                                        on:click=move |_| annulation.set(Some(id))
                                                    >
                                                        "Annuler"
                                                    </button>
                                                </Show>
                                                <Show when=move || est_admin>
                                                    <button
                                                        class="btn btn--petit btn--danger"
                                                        on:click=move |_| suppression.set(Some(id))
                                                    >
                                                        "Supprimer"
                                                    </button>
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
            <Show when=move || saisie_ouverte.get()>
                <PaiementFormDialog
                    formulaire=formulaire
                    clients=clients
                    prestations=prestations
                    edition=edition.get().is_some()
                    on_cancel=Callback::new(move |()| {
                        saisie_ouverte.set(false);
                        edition.set(None);
                    })
                    on_submit=enregistrer
                />
            </Show>
            <Show when=move || annulation.get().is_some()>
                <ConfirmDialog
                    titre="Annuler le paiement".to_owned()
                    message="Le paiement passera au statut Annulé. Cette action est réservée aux paiements en attente ou en cours.".to_owned()
                    libelle_confirmer="Confirmer l'annulation".to_owned()
                    on_confirm=confirmer_annulation
                    on_cancel=Callback::new(move |()| annulation.set(None))
                />
            </Show>
            <Show when=move || suppression.get().is_some()>
                <ConfirmDialog
                    titre="Supprimer le paiement".to_owned()
                    message="Le paiement sera retiré définitivement du registre.".to_owned()
                    libelle_confirmer="Supprimer".to_owned()
                    on_confirm=confirmer_suppression
                    on_cancel=Callback::new(move |()| suppression.set(None))
                />
            </Show>
        </div>
    }
}

/// Capture form, shared between creation and edition. Picking a prestation
/// seeds the amount with its minimum price; the operator select only shows
/// for mobile money.
#[component]
fn PaiementFormDialog(
    formulaire: RwSignal<FormulairePaiement>,
    clients: RwSignal<Vec<Client>>,
    prestations: RwSignal<Vec<Prestation>>,
    edition: bool,
    on_cancel: Callback<()>,
    on_submit: Callback<PaiementPayload>,
) -> impl IntoView {
    let erreur = RwSignal::new(String::new());

    let choisir_prestation = move |ev: leptos::ev::Event| {
        let valeur = event_target_value(&ev);
        let defaut = Uuid::parse_str(&valeur).ok().and_then(|id| {
            prestations
                .get_untracked()
                .into_iter()
                .find(|p| p.id == id)
                .and_then(|p| p.montant_defaut())
        });
        formulaire.update(|f| {
            f.prestation = valeur;
            if let Some(montant) = defaut {
                f.montant = montant.to_string();
            }
        });
    };

    let valider = Callback::new(move |()| {
        match payload_du_formulaire(&formulaire.get()) {
            Ok(payload) => {
                erreur.set(String::new());
                on_submit.run(payload);
            }
            Err(message) => erreur.set(message),
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{if edition { "Modifier le paiement" } else { "Nouveau paiement" }}</h2>
                <label class="dialog__label">
                    "Client"
                    <select
                        class="dialog__input"
                        prop:value=move || formulaire.get().client
                        on:change=move |ev| {
                            formulaire.update(|f| f.client = event_target_value(&ev));
                        }
                    >
                        <option value="">"Sélectionner un client"</option>
                        {move || {
                            clients
                                .get()
                                .into_iter()
                                .filter(|client| client.actif)
                                .map(|client| {
                                    view! {
                                        <option value=client.id.to_string()>
                                            {client.nom_affichage()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="dialog__label">
                    "Prestation"
                    <select
                        class="dialog__input"
                        prop:value=move || formulaire.get().prestation
                        on:change=choisir_prestation
                    >
                        <option value="">"Sélectionner une prestation"</option>
                        {move || {
                            prestations
                                .get()
                                .into_iter()
                                .filter(|prestation| prestation.actif)
                                .map(|prestation| {
                                    view! {
                                        <option value=prestation.id.to_string()>
                                            {prestation.nom.clone()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="dialog__label">
                    "Montant (FCFA)"
                    <input
                        class="dialog__input"
                        type="number"
                        min="0"
                        prop:value=move || formulaire.get().montant
                        on:input=move |ev| {
                            formulaire.update(|f| f.montant = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Moyen de paiement"
                    <select
                        class="dialog__input"
                        prop:value=move || formulaire.get().moyen.as_str().to_owned()
                        on:change=move |ev| {
                            formulaire
                                .update(|f| {
                                    f.moyen = moyen_depuis(&event_target_value(&ev));
                                    if f.moyen != MoyenPaiement::MobileMoney {
                                        f.operateur = String::new();
                                    }
                                });
                        }
                    >
                        {MoyenPaiement::ALL
                            .into_iter()
                            .map(|moyen| {
                                view! { <option value=moyen.as_str()>{moyen.label()}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <Show when=move || formulaire.get().moyen == MoyenPaiement::MobileMoney>
                    <label class="dialog__label">
                        "Opérateur mobile"
                        <select
                            class="dialog__input"
                            prop:value=move || formulaire.get().operateur
                            on:change=move |ev| {
                                formulaire.update(|f| f.operateur = event_target_value(&ev));
                            }
                        >
                            <option value="">"Sélectionner un opérateur"</option>
                            {OperateurMobile::ALL
                                .into_iter()
                                .map(|operateur| {
                                    view! {
                                        <option value=operateur.as_str()>
                                            {operateur.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                </Show>
                <label class="dialog__label">
                    "Numéro de transaction (optionnel)"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || formulaire.get().numero_transaction
                        on:input=move |ev| {
                            formulaire.update(|f| f.numero_transaction = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Référence de paiement (optionnelle)"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || formulaire.get().reference_paiement
                        on:input=move |ev| {
                            formulaire.update(|f| f.reference_paiement = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Notes (optionnelles)"
                    <textarea
                        class="dialog__input"
                        prop:value=move || formulaire.get().notes
                        on:input=move |ev| {
                            formulaire.update(|f| f.notes = event_target_value(&ev));
                        }
                    ></textarea>
                </label>
                <Show when=move || !erreur.get().is_empty()>
                    <p class="dialog__erreur">{move || erreur.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Annuler"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| valider.run(())>
                        "Enregistrer"
                    </button>
                </div>
            </div>
        </div>
    }
}
