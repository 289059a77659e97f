//! Client directory: filtered table, create/edit, detail card, activation,
//! deletion, QR issue.

#[cfg(test)]
#[path = "clients_test.rs"]
mod clients_test;

use leptos::prelude::*;
use uuid::Uuid;

use salon_core::client::{Client, ClientPayload, Sexe};
use salon_core::qr::QrCode;
#[cfg(feature = "csr")]
use salon_core::qr::{QrGenerationPayload, TypeQr};
use salon_core::time::format_date;
use salon_core::validate::{
    validate_email, validate_required, validate_telephone, ValidationError,
};

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

/// Raw form fields for the create/edit dialog.
#[derive(Clone, Debug)]
struct FormulaireClient {
    nom: String,
    prenom: String,
    sexe: Sexe,
    telephone: String,
    email: String,
    date_anniversaire: String,
    lieu_habitation: String,
}

impl Default for FormulaireClient {
    fn default() -> Self {
        Self {
            nom: String::new(),
            prenom: String::new(),
            sexe: Sexe::F,
            telephone: String::new(),
            email: String::new(),
            date_anniversaire: String::new(),
            lieu_habitation: String::new(),
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

/// Check the form and build the request body, trimming every field.
fn payload_du_formulaire(form: &FormulaireClient) -> Result<ClientPayload, ValidationError> {
    validate_required("Le nom", &form.nom)?;
    validate_required("Le prénom", &form.prenom)?;
    validate_telephone(&form.telephone)?;
    validate_email(&form.email)?;
    Ok(ClientPayload {
        nom: Some(form.nom.trim().to_owned()),
        prenom: Some(form.prenom.trim().to_owned()),
        sexe: Some(form.sexe),
        telephone: Some(form.telephone.trim().to_owned()),
        email: vide_en_none(&form.email),
        date_anniversaire: vide_en_none(&form.date_anniversaire),
        lieu_habitation: vide_en_none(&form.lieu_habitation),
        actif: None,
    })
}

fn sexe_depuis(valeur: &str) -> Sexe {
    if valeur == "M" { Sexe::M } else { Sexe::F }
}

fn filtre_sexe_depuis(valeur: &str) -> Option<Sexe> {
    match valeur {
        "F" => Some(Sexe::F),
        "M" => Some(Sexe::M),
        _ => None,
    }
}

fn filtre_actif_depuis(valeur: &str) -> Option<bool> {
    match valeur {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Row predicate combining the search box with the two dropdown filters.
fn correspond(client: &Client, recherche: &str, sexe: Option<Sexe>, actif: Option<bool>) -> bool {
    if sexe.is_some_and(|attendu| client.sexe != attendu) {
        return false;
    }
    if actif.is_some_and(|attendu| client.actif != attendu) {
        return false;
    }
    client.matches_search(recherche)
}

#[component]
pub fn ClientsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let clients = RwSignal::new(Vec::<Client>::new());
    let chargement = RwSignal::new(true);
    let recherche = RwSignal::new(String::new());
    let filtre_sexe = RwSignal::new(None::<Sexe>);
    let filtre_actif = RwSignal::new(None::<bool>);

    // Dialog state: None = closed, Some(None) = create, Some(Some(id)) = edit.
    let edite = RwSignal::new(None::<Option<Uuid>>);
    let formulaire = RwSignal::new(FormulaireClient::default());
    let fiche = RwSignal::new(None::<Client>);
    let suppression = RwSignal::new(None::<Uuid>);
    let qr_emis = RwSignal::new(None::<QrCode>);

    let recharger = Callback::new(move |()| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::clients::lister(&token).await {
                    Ok(liste) => clients.set(liste),
                    Err(err) => signaler_echec(auth, toasts, &err),
                }
                chargement.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (clients, chargement, toasts);
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
        formulaire.set(FormulaireClient::default());
        edite.set(Some(None));
    };

    let ouvrir_edition = Callback::new(move |client: Client| {
        formulaire.set(FormulaireClient {
            nom: client.nom,
            prenom: client.prenom,
            sexe: client.sexe,
            telephone: client.telephone,
            email: client.email.unwrap_or_default(),
            date_anniversaire: client.date_anniversaire.unwrap_or_default(),
            lieu_habitation: client.lieu_habitation.unwrap_or_default(),
        });
        edite.set(Some(Some(client.id)));
    });

    let enregistrer = Callback::new(move |payload: ClientPayload| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            let cible = edite.get_untracked().flatten();
            leptos::task::spawn_local(async move {
                let resultat = match cible {
                    Some(id) => crate::net::clients::modifier(&token, id, &payload).await,
                    None => crate::net::clients::creer(&token, &payload).await,
                };
                match resultat {
                    Ok(_) => {
                        let message = if cible.is_some() {
                            "Client modifié"
                        } else {
                            "Client créé"
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

    let basculer_actif = Callback::new(move |client: Client| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            leptos::task::spawn_local(async move {
                let resultat = if client.actif {
                    crate::net::clients::desactiver(&token, client.id).await
                } else {
                    crate::net::clients::activer(&token, client.id).await
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
            let _ = client;
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
                match crate::net::clients::supprimer(&token, id).await {
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

    let emettre_qr = Callback::new(move |client_id: Uuid| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            leptos::task::spawn_local(async move {
                let payload = QrGenerationPayload {
                    client_id,
                    type_qrcode: TypeQr::Identification,
                    contenu: None,
                    date_expiration: None,
                };
                match crate::net::qrcodes::generer_pour_client(&token, &payload).await {
                    Ok(qr) => qr_emis.set(Some(qr)),
                    Err(err) => signaler_echec(auth, toasts, &err),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (client_id, qr_emis);
        }
    });

    view! {
        <div class="clients-page">
            <header class="page-entete">
                <select
                    class="champ"
                    on:change=move |ev| filtre_sexe.set(filtre_sexe_depuis(&event_target_value(&ev)))
                >
                    <option value="">"Tous les sexes"</option>
                    <option value="F">{Sexe::F.label()}</option>
                    <option value="M">{Sexe::M.label()}</option>
                </select>
                <select
                    class="champ"
                    on:change=move |ev| filtre_actif.set(filtre_actif_depuis(&event_target_value(&ev)))
                >
                    <option value="">"Tous les statuts"</option>
                    <option value="true">"Actifs"</option>
                    <option value="false">"Inactifs"</option>
                </select>
                <input
                    class="champ champ--recherche"
                    type="search"
                    placeholder="Rechercher un client..."
                    prop:value=move || recherche.get()
                    on:input=move |ev| recherche.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=ouvrir_creation>
                    "+ Nouveau client"
                </button>
            </header>
            <div class="stat-grille">
                {move || {
                    let liste = clients.get();
                    let actifs = liste.iter().filter(|c| c.actif).count();
                    let hommes = liste.iter().filter(|c| c.sexe == Sexe::M).count();
                    let femmes = liste.iter().filter(|c| c.sexe == Sexe::F).count();
                    view! {
                        <StatCard
                            libelle="Total clients".to_owned()
                            valeur=liste.len().to_string()
                            icone="👥".to_owned()
                        />
                        <StatCard
                            libelle="Clients actifs".to_owned()
                            valeur=actifs.to_string()
                            icone="✅".to_owned()
                        />
                        <StatCard
                            libelle="Hommes".to_owned()
                            valeur=hommes.to_string()
                            icone="👨".to_owned()
                        />
                        <StatCard
                            libelle="Femmes".to_owned()
                            valeur=femmes.to_string()
                            icone="👩".to_owned()
                        />
                    }
                }}
            </div>
            <Show
                when=move || !chargement.get()
                fallback=|| view! { <p class="page-chargement">"Chargement des clients..."</p> }
            >
                <table class="tableau">
                    <thead>
                        <tr>
                            <th>"Client"</th>
                            <th>"Téléphone"</th>
                            <th>"Sexe"</th>
                            <th>"Inscrit le"</th>
                            <th>"Statut"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            clients
                                .get()
                                .into_iter()
                                .filter(|client| {
                                    correspond(
                                        client,
                                        &recherche.get(),
                                        filtre_sexe.get(),
                                        filtre_actif.get(),
                                    )
                                })
                                .map(|client| {
                                    let pour_fiche = client.clone();
                                    let pour_edition = client.clone();
                                    let pour_bascule = client.clone();
                                    let id = client.id;
                                    let badge = if client.actif {
                                        "badge badge--actif"
                                    } else {
                                        "badge badge--inactif"
                                    };
                                    let bascule = if client.actif {
                                        "Désactiver"
                                    } else {
                                        "Activer"
                                    };
                                    view! {
                                        <tr class="tableau__ligne">
                                            <td>{client.nom_affichage()}</td>
                                            <td>{client.telephone.clone()}</td>
                                            <td>{client.sexe.label()}</td>
                                            <td>{format_date(&client.date_creation)}</td>
                                            <td>
                                                <span class=badge>
                                                    {if client.actif { "Actif" } else { "Inactif" }}
                                                </span>
                                            </td>
                                            <td class="tableau__actions">
                                                <button
                                                    class="btn btn--petit"
                                                    on:click=move |_| {
                                                        fiche.set(Some(pour_fiche.clone()))
                                                    }
                                                >
                                                    "Voir"
                                                </button>
                                                <button
                                                    class="btn btn--petit"
                                                    on:click=move |_| {
                                                        ouvrir_edition.run(pour_edition.clone())
                                                    }
                                                >
                                                    "Modifier"
                                                </button>
                                                <button
                                                    class="btn btn--petit"
                                                    on:click=move |_| emettre_qr.run(id)
                                                >
                                                    "QR"
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
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
            <Show when=move || edite.get().is_some()>
                <ClientFormDialog
                    formulaire=formulaire
                    edition=edite.get().is_some_and(|cible| cible.is_some())
                    on_cancel=Callback::new(move |()| edite.set(None))
                    on_submit=enregistrer
                />
            </Show>
            <Show when=move || suppression.get().is_some()>
                <ConfirmDialog
                    titre="Supprimer le client".to_owned()
                    message="Le client sera supprimé définitivement. Les clients ayant des paiements ne peuvent pas être supprimés.".to_owned()
                    libelle_confirmer="Supprimer".to_owned()
                    on_confirm=confirmer_suppression
                    on_cancel=Callback::new(move |()| suppression.set(None))
                />
            </Show>
            <Show when=move || fiche.get().is_some()>
                <FicheClientDialog fiche=fiche/>
            </Show>
            <Show when=move || qr_emis.get().is_some()>
                <QrEmisDialog qr=qr_emis/>
            </Show>
        </div>
    }
}

/// Create/edit form. Validation runs here so the backend's wording shows
/// up without a round-trip.
#[component]
fn ClientFormDialog(
    formulaire: RwSignal<FormulaireClient>,
    edition: bool,
    on_cancel: Callback<()>,
    on_submit: Callback<ClientPayload>,
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
                <h2>{if edition { "Modifier le client" } else { "Nouveau client" }}</h2>
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
                    "Prénom"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || formulaire.get().prenom
                        on:input=move |ev| {
                            formulaire.update(|f| f.prenom = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Sexe"
                    <select
                        class="dialog__input"
                        prop:value=move || formulaire.get().sexe.as_str().to_owned()
                        on:change=move |ev| {
                            formulaire.update(|f| f.sexe = sexe_depuis(&event_target_value(&ev)));
                        }
                    >
                        <option value="F">{Sexe::F.label()}</option>
                        <option value="M">{Sexe::M.label()}</option>
                    </select>
                </label>
                <label class="dialog__label">
                    "Téléphone"
                    <input
                        class="dialog__input"
                        type="tel"
                        placeholder="+22512345678"
                        prop:value=move || formulaire.get().telephone
                        on:input=move |ev| {
                            formulaire.update(|f| f.telephone = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Email (optionnel)"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || formulaire.get().email
                        on:input=move |ev| {
                            formulaire.update(|f| f.email = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Date d'anniversaire (optionnelle)"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || formulaire.get().date_anniversaire
                        on:input=move |ev| {
                            formulaire.update(|f| f.date_anniversaire = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Lieu d'habitation (optionnel)"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || formulaire.get().lieu_habitation
                        on:input=move |ev| {
                            formulaire.update(|f| f.lieu_habitation = event_target_value(&ev));
                        }
                    />
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

/// Read-only record card, opened from the "Voir" row action.
#[component]
fn FicheClientDialog(fiche: RwSignal<Option<Client>>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| fiche.set(None)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Fiche client"</h2>
                {move || {
                    fiche
                        .get()
                        .map(|client| {
                            view! {
                                <p class="dialog__message">{client.nom_affichage()}</p>
                                <dl class="fiche-client">
                                    <dt>"Téléphone"</dt>
                                    <dd>{client.telephone.clone()}</dd>
                                    <dt>"Sexe"</dt>
                                    <dd>{client.sexe.label()}</dd>
                                    <dt>"Email"</dt>
                                    <dd>
                                        {client.email.clone().unwrap_or_else(|| "-".to_owned())}
                                    </dd>
                                    <dt>"Date d'anniversaire"</dt>
                                    <dd>
                                        {client
                                            .date_anniversaire
                                            .as_deref()
                                            .map(format_date)
                                            .unwrap_or_else(|| "-".to_owned())}
                                    </dd>
                                    <dt>"Lieu d'habitation"</dt>
                                    <dd>
                                        {client
                                            .lieu_habitation
                                            .clone()
                                            .unwrap_or_else(|| "-".to_owned())}
                                    </dd>
                                    <dt>"Inscrit le"</dt>
                                    <dd>{format_date(&client.date_creation)}</dd>
                                    <dt>"Statut"</dt>
                                    <dd>{if client.actif { "Actif" } else { "Inactif" }}</dd>
                                </dl>
                            }
                        })
                }}
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| fiche.set(None)>
                        "Fermer"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Freshly generated QR code, image included, ready to hand over.
#[component]
fn QrEmisDialog(qr: RwSignal<Option<QrCode>>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| qr.set(None)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"QR code généré"</h2>
                {move || {
                    qr.get()
                        .map(|code| {
                            let client = code
                                .client_nom_complet
                                .unwrap_or_else(|| "Client".to_owned());
                            view! {
                                <p class="dialog__message">
                                    {client} " — " {code.type_qrcode.label()}
                                </p>
                                <Show when={
                                    let image = code.image.clone();
                                    move || image.is_some()
                                }>
                                    <img
                                        class="dialog__qr"
                                        src=code.image.clone().unwrap_or_default()
                                        alt="QR code"
                                    />
                                </Show>
                            }
                        })
                }}
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| qr.set(None)>
                        "Fermer"
                    </button>
                </div>
            </div>
        </div>
    }
}
