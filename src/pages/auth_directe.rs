//! QR-less client entry: check a phone number, then open a session.

#[cfg(test)]
#[path = "auth_directe_test.rs"]
mod auth_directe_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use salon_core::client::{Client, ClientPayload, Sexe};
use salon_core::session::{AuthDirectePayload, AuthDirecteReponse};
use salon_core::validate::{validate_email, validate_required, validate_telephone, ValidationError};

use crate::components::toast_host::notifier;
use crate::state::site::SiteState;
use crate::state::toasts::{ToastKind, ToastState};

fn vide_en_none(valeur: &str) -> Option<String> {
    let valeur = valeur.trim();
    if valeur.is_empty() {
        None
    } else {
        Some(valeur.to_owned())
    }
}

/// Registration fields, only required when the phone number is unknown.
#[derive(Clone, Debug)]
struct FormulaireNouveauClient {
    nom: String,
    prenom: String,
    sexe: Sexe,
    email: String,
    date_anniversaire: String,
    lieu_habitation: String,
}

impl Default for FormulaireNouveauClient {
    fn default() -> Self {
        Self {
            nom: String::new(),
            prenom: String::new(),
            sexe: Sexe::F,
            email: String::new(),
            date_anniversaire: String::new(),
            lieu_habitation: String::new(),
        }
    }
}

impl FormulaireNouveauClient {
    fn depuis_client(client: &Client) -> Self {
        Self {
            nom: client.nom.clone(),
            prenom: client.prenom.clone(),
            sexe: client.sexe,
            email: client.email.clone().unwrap_or_default(),
            date_anniversaire: client.date_anniversaire.clone().unwrap_or_default(),
            lieu_habitation: client.lieu_habitation.clone().unwrap_or_default(),
        }
    }
}

/// Body of the direct authentication. A known number sends an empty client
/// object, an unknown one the full registration form.
fn payload_auth(
    telephone: &str,
    existant: bool,
    form: &FormulaireNouveauClient,
) -> Result<AuthDirectePayload, ValidationError> {
    validate_telephone(telephone)?;
    let client = if existant {
        ClientPayload::default()
    } else {
        validate_required("Le nom", &form.nom)?;
        validate_required("Le prénom", &form.prenom)?;
        validate_email(&form.email)?;
        ClientPayload {
            nom: Some(form.nom.trim().to_owned()),
            prenom: Some(form.prenom.trim().to_owned()),
            sexe: Some(form.sexe),
            telephone: None,
            email: vide_en_none(&form.email),
            date_anniversaire: vide_en_none(&form.date_anniversaire),
            lieu_habitation: vide_en_none(&form.lieu_habitation),
            actif: None,
        }
    };
    Ok(AuthDirectePayload {
        telephone: telephone.trim().to_owned(),
        client: Some(client),
    })
}

/// Where the fresh session lives; the backend sends a ready-made URL.
fn cible_session(reponse: &AuthDirecteReponse) -> String {
    if reponse.redirect_url.is_empty() {
        format!("/session/{}", reponse.session.session_id)
    } else {
        reponse.redirect_url.clone()
    }
}

fn libelle_continuer(existant: bool, prenom: &str) -> String {
    if existant {
        format!("Continuer en tant que {prenom}")
    } else {
        "Continuer avec les nouvelles informations".to_owned()
    }
}

#[component]
pub fn AuthDirectePage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let site = expect_context::<RwSignal<SiteState>>();

    let telephone = RwSignal::new(String::new());
    let client_existant = RwSignal::new(false);
    let formulaire = RwSignal::new(FormulaireNouveauClient::default());
    let busy = RwSignal::new(false);

    // The async submit only records the target; the navigation itself
    // happens in the effect below.
    let cible = RwSignal::new(None::<String>);
    let naviguer = use_navigate();
    Effect::new(move || {
        if let Some(url) = cible.get() {
            naviguer(&url, NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            });
        }
    });

    let verifier = Callback::new(move |()| {
        if let Err(err) = validate_telephone(&telephone.get_untracked()) {
            notifier(toasts, ToastKind::Erreur, err.to_string());
            return;
        }
        #[cfg(feature = "csr")]
        {
            let numero = telephone.get_untracked().trim().to_owned();
            busy.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::clients::rechercher_par_telephone(&numero).await {
                    Ok(client) => {
                        formulaire.set(FormulaireNouveauClient::depuis_client(&client));
                        client_existant.set(true);
                        notifier(toasts, ToastKind::Succes, "Client trouvé !");
                    }
                    Err(err) if err.est_introuvable() => {
                        formulaire.set(FormulaireNouveauClient::default());
                        client_existant.set(false);
                        notifier(
                            toasts,
                            ToastKind::Info,
                            "Nouveau client, veuillez remplir les informations",
                        );
                    }
                    Err(err) => notifier(toasts, ToastKind::Erreur, err.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (busy, client_existant, formulaire);
        }
    });

    let continuer = Callback::new(move |()| {
        let payload = match payload_auth(
            &telephone.get_untracked(),
            client_existant.get_untracked(),
            &formulaire.get_untracked(),
        ) {
            Ok(payload) => payload,
            Err(err) => {
                notifier(toasts, ToastKind::Erreur, err.to_string());
                return;
            }
        };
        #[cfg(feature = "csr")]
        {
            busy.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::sessions::authentification_directe(&payload).await {
                    Ok(reponse) => {
                        notifier(
                            toasts,
                            ToastKind::Succes,
                            "Authentification réussie ! Redirection en cours...",
                        );
                        cible.set(Some(cible_session(&reponse)));
                    }
                    Err(err) => notifier(toasts, ToastKind::Erreur, err.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (payload, busy, cible);
        }
    });

    view! {
        <div class="auth-directe-page">
            <div class="auth-directe-carte">
                <h1>{move || site.get().settings.site_title}</h1>
                <p class="auth-directe-carte__sous-titre">
                    "Accès client direct. Entrez votre numéro de téléphone pour commencer."
                </p>
                <section class="session-section">
                    <h2>"Numéro de téléphone"</h2>
                    <form
                        class="auth-directe-carte__ligne"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            verifier.run(());
                        }
                    >
                        <input
                            class="dialog__input"
                            type="tel"
                            placeholder="+22507XXXXXXXX"
                            prop:value=move || telephone.get()
                            on:input=move |ev| telephone.set(event_target_value(&ev))
                        />
                        <button class="btn" type="submit" prop:disabled=move || busy.get()>
                            "Vérifier"
                        </button>
                    </form>
                </section>
                <Show when=move || {
                    !telephone.get().trim().is_empty() && !client_existant.get()
                }>
                    <section class="session-section">
                        <h2>"Nouveau client"</h2>
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
                                    let valeur = event_target_value(&ev);
                                    formulaire
                                        .update(|f| {
                                            f.sexe = if valeur == "M" { Sexe::M } else { Sexe::F };
                                        });
                                }
                            >
                                <option value="F">{Sexe::F.label()}</option>
                                <option value="M">{Sexe::M.label()}</option>
                            </select>
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
                                    formulaire
                                        .update(|f| f.date_anniversaire = event_target_value(&ev));
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
                                    formulaire
                                        .update(|f| f.lieu_habitation = event_target_value(&ev));
                                }
                            />
                        </label>
                    </section>
                </Show>
                <Show when=move || client_existant.get()>
                    <p class="auth-directe-carte__trouve">
                        "Client trouvé ! Continuez pour ouvrir votre session."
                    </p>
                </Show>
                <Show when=move || !telephone.get().trim().is_empty()>
                    <button
                        class="btn btn--primary btn--large"
                        prop:disabled=move || busy.get()
                        on:click=move |_| continuer.run(())
                    >
                        {move || {
                            libelle_continuer(client_existant.get(), &formulaire.get().prenom)
                        }}
                    </button>
                </Show>
            </div>
        </div>
    }
}
