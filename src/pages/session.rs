//! Public checkout workflow, reached by scanning a QR code.
//!
//! SYSTEM CONTEXT
//! ==============
//! The whole page runs without authentication. The backend owns the
//! session state machine; this page renders the step matching the
//! current `statut` and advances it through the workflow actions.
//! Mobile-money payments leave the page for the operator's checkout and
//! come back through the session URL.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use uuid::Uuid;

use salon_core::client::{Client, ClientPayload, Sexe};
use salon_core::feedback::FeedbackPayload;
use salon_core::money::format_fcfa;
use salon_core::paiement::{
    moyen_paiement_affichage, valider_moyen_operateur, MoyenPaiement, OperateurMobile,
};
use salon_core::prestation::Prestation;
use salon_core::session::{IdentificationPayload, Recapitulatif, SessionPaiement, SessionStatut};
#[cfg(feature = "csr")]
use salon_core::session::{InitiationPayload, SelectionPrestationPayload};
use salon_core::validate::{validate_email, validate_telephone, ValidationError};

use crate::components::rating_stars::RatingStars;
use crate::components::toast_host::notifier;
#[cfg(any(test, feature = "csr"))]
use crate::net::api::ApiError;
use crate::state::site::SiteState;
use crate::state::toasts::{ToastKind, ToastState};

const ETAPES: [&str; 4] = ["Identification", "Prestation", "Paiement", "Récapitulatif"];

/// Full-page message when the initial session fetch fails.
#[cfg(any(test, feature = "csr"))]
fn message_chargement(err: &ApiError) -> String {
    match err {
        ApiError::Reseau(_) => {
            "Erreur de connexion au serveur. Veuillez vérifier votre connexion.".to_owned()
        }
        err if err.status() == Some(500) => {
            "Erreur interne du serveur. Veuillez réessayer plus tard.".to_owned()
        }
        err => format!("Erreur lors du chargement de la session: {err}"),
    }
}

/// Full-page message when opening the session under a fresh id fails.
#[cfg(any(test, feature = "csr"))]
fn message_demarrage(err: &ApiError) -> String {
    match err.status() {
        Some(400) => format!("Données invalides pour la création de session: {err}"),
        Some(409) => "Conflit: la session existe déjà ou est en cours d'utilisation.".to_owned(),
        _ => format!("Impossible d'initialiser la session: {err}"),
    }
}

/// Toast for a refused identification.
#[cfg(any(test, feature = "csr"))]
fn message_identification(err: &ApiError) -> String {
    match err.status() {
        Some(400) => format!("Données invalides: {err}"),
        Some(404) => "Session non trouvée, veuillez recommencer".to_owned(),
        Some(409) => "Conflit: client déjà identifié ou session en cours".to_owned(),
        _ => err.to_string(),
    }
}

/// Index of the step the client is currently on, for the four progress
/// bars. Abandon and expiry stay pinned on the payment bar.
fn indice_etape(statut: SessionStatut) -> usize {
    usize::from(statut.etape().min(4)) - 1
}

fn vide_en_none(valeur: &str) -> Option<String> {
    let valeur = valeur.trim();
    if valeur.is_empty() {
        None
    } else {
        Some(valeur.to_owned())
    }
}

/// Raw identification form. The personal fields only matter for a phone
/// number the salon has not seen yet.
#[derive(Clone, Debug)]
struct FormulaireIdentification {
    telephone: String,
    nom: String,
    prenom: String,
    sexe: Sexe,
    email: String,
    date_anniversaire: String,
    lieu_habitation: String,
}

impl Default for FormulaireIdentification {
    fn default() -> Self {
        Self {
            telephone: String::new(),
            nom: String::new(),
            prenom: String::new(),
            sexe: Sexe::F,
            email: String::new(),
            date_anniversaire: String::new(),
            lieu_habitation: String::new(),
        }
    }
}

impl FormulaireIdentification {
    /// Prefill from the client already attached to the session.
    fn depuis_client(client: &Client) -> Self {
        Self {
            telephone: client.telephone.clone(),
            nom: client.nom.clone(),
            prenom: client.prenom.clone(),
            sexe: client.sexe,
            email: client.email.clone().unwrap_or_default(),
            date_anniversaire: client.date_anniversaire.clone().unwrap_or_default(),
            lieu_habitation: client.lieu_habitation.clone().unwrap_or_default(),
        }
    }
}

/// Build the identification body. The nested client object always goes
/// out; the backend ignores it when the phone number is already known.
fn payload_identification(
    form: &FormulaireIdentification,
) -> Result<IdentificationPayload, ValidationError> {
    validate_telephone(&form.telephone)?;
    validate_email(&form.email)?;
    let nouveau = !form.nom.trim().is_empty() || !form.prenom.trim().is_empty();
    Ok(IdentificationPayload {
        telephone: form.telephone.trim().to_owned(),
        client: Some(ClientPayload {
            nom: vide_en_none(&form.nom),
            prenom: vide_en_none(&form.prenom),
            sexe: if nouveau { Some(form.sexe) } else { None },
            telephone: None,
            email: vide_en_none(&form.email),
            date_anniversaire: vide_en_none(&form.date_anniversaire),
            lieu_habitation: vide_en_none(&form.lieu_habitation),
            actif: None,
        }),
    })
}

/// Negotiated amount for the selection step. Empty input leaves the
/// backend to seed the prestation's minimum price.
fn montant_negocie(
    prestation: &Prestation,
    saisie: &str,
) -> Result<Option<u32>, ValidationError> {
    let saisie = saisie.trim();
    if saisie.is_empty() {
        return Ok(None);
    }
    let montant: u32 = saisie
        .parse()
        .map_err(|_| ValidationError::MontantNonPositif)?;
    prestation.valider_montant(montant)?;
    Ok(Some(montant))
}

fn prestation_par_id(prestations: &[Prestation], valeur: &str) -> Option<Prestation> {
    let id = Uuid::parse_str(valeur.trim()).ok()?;
    prestations.iter().find(|p| p.id == id).cloned()
}

fn operateur_depuis(valeur: &str) -> Option<OperateurMobile> {
    OperateurMobile::ALL
        .into_iter()
        .find(|operateur| operateur.as_str() == valeur)
}

fn moyen_depuis(valeur: &str) -> MoyenPaiement {
    MoyenPaiement::ALL
        .into_iter()
        .find(|moyen| moyen.as_str() == valeur)
        .unwrap_or(MoyenPaiement::Espece)
}

/// Build the feedback body from the session's identified client.
fn payload_avis(
    session: &SessionPaiement,
    note: u8,
    commentaire: &str,
) -> Result<FeedbackPayload, ValidationError> {
    let client = session.client.as_ref();
    let payload = FeedbackPayload {
        client_telephone: client.map(|c| c.telephone.clone()).unwrap_or_default(),
        client_nom: client.map(|c| c.nom.clone()).unwrap_or_default(),
        client_prenom: client.map(|c| c.prenom.clone()).unwrap_or_default(),
        rating: note,
        comment: vide_en_none(commentaire),
    };
    payload.valider()?;
    Ok(payload)
}

#[component]
pub fn SessionPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let site = expect_context::<RwSignal<SiteState>>();

    let params = use_params_map();
    let session_id = move || params.read().get("session_id").unwrap_or_default();
    #[cfg(not(feature = "csr"))]
    let _ = session_id;

    let session = RwSignal::new(None::<SessionPaiement>);
    let chargement = RwSignal::new(true);
    let erreur_session = RwSignal::new(String::new());
    let prestations = RwSignal::new(Vec::<Prestation>::new());
    let recap = RwSignal::new(None::<Recapitulatif>);
    let envoi = RwSignal::new(false);

    let formulaire = RwSignal::new(FormulaireIdentification::default());
    let prestation_choisie = RwSignal::new(String::new());
    let montant_saisi = RwSignal::new(String::new());
    let moyen = RwSignal::new(MoyenPaiement::Espece);
    let operateur = RwSignal::new(String::new());

    let avis_ouvert = RwSignal::new(false);
    let au_revoir_ouvert = RwSignal::new(false);
    let note = RwSignal::new(0u8);
    let commentaire = RwSignal::new(String::new());

    let charger_session = Callback::new(move |()| {
        #[cfg(feature = "csr")]
        {
            let sid = session_id();
            if sid.is_empty() {
                erreur_session.set("Session introuvable ou non initialisée.".to_owned());
                chargement.set(false);
                return;
            }
            leptos::task::spawn_local(async move {
                match crate::net::sessions::detail(&sid).await {
                    Ok(s) => {
                        if let Some(client) = &s.client {
                            formulaire.set(FormulaireIdentification::depuis_client(client));
                        }
                        if let Some(prestation) = &s.prestation {
                            prestation_choisie.set(prestation.id.to_string());
                        }
                        let reussi = s.statut == SessionStatut::PaiementReussi;
                        session.set(Some(s));
                        if reussi && recap.get_untracked().is_none() {
                            if let Ok(r) = crate::net::sessions::recapitulatif(&sid).await {
                                recap.set(Some(r));
                            }
                        }
                    }
                    // An unknown id is a fresh QR scan: open the session
                    // under that id instead of failing.
                    Err(err) if err.est_introuvable() => {
                        match crate::net::sessions::demarrer(&sid).await {
                            Ok(s) => session.set(Some(s)),
                            Err(err) => erreur_session.set(message_demarrage(&err)),
                        }
                    }
                    Err(err) => erreur_session.set(message_chargement(&err)),
                }
                chargement.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (
                session,
                chargement,
                erreur_session,
                formulaire,
                prestation_choisie,
                recap,
            );
        }
    });

    let charger_prestations = Callback::new(move |()| {
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                if let Ok(liste) = crate::net::prestations::lister_publique().await {
                    prestations.set(liste);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = prestations;
        }
    });

    let demande = RwSignal::new(false);
    Effect::new(move || {
        if demande.get() {
            return;
        }
        demande.set(true);
        charger_session.run(());
        charger_prestations.run(());
    });

    let identifier = Callback::new(move |()| {
        let payload = match payload_identification(&formulaire.get_untracked()) {
            Ok(payload) => payload,
            Err(err) => {
                notifier(toasts, ToastKind::Erreur, err.to_string());
                return;
            }
        };
        #[cfg(feature = "csr")]
        {
            let sid = session_id();
            envoi.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::sessions::identifier_client(&sid, &payload).await {
                    Ok(s) => {
                        notifier(toasts, ToastKind::Succes, "Identification réussie");
                        session.set(Some(s));
                    }
                    Err(err) => {
                        notifier(toasts, ToastKind::Erreur, message_identification(&err));
                    }
                }
                envoi.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (payload, envoi, session);
        }
    });

    let valider_prestation = Callback::new(move |()| {
        let Some(prestation) =
            prestation_par_id(&prestations.get_untracked(), &prestation_choisie.get_untracked())
        else {
            notifier(toasts, ToastKind::Erreur, "Veuillez sélectionner une prestation");
            return;
        };
        let montant = match montant_negocie(&prestation, &montant_saisi.get_untracked()) {
            Ok(montant) => montant,
            Err(err) => {
                notifier(toasts, ToastKind::Erreur, err.to_string());
                return;
            }
        };
        #[cfg(feature = "csr")]
        {
            let sid = session_id();
            let payload = SelectionPrestationPayload {
                prestation_id: prestation.id,
                montant_final: montant,
            };
            envoi.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::sessions::selectionner_prestation(&sid, &payload).await {
                    Ok(s) => {
                        notifier(toasts, ToastKind::Succes, "Prestation enregistrée");
                        session.set(Some(s));
                    }
                    Err(err) => notifier(toasts, ToastKind::Erreur, err.to_string()),
                }
                envoi.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (prestation, montant, envoi, session);
        }
    });

    let initier = Callback::new(move |()| {
        let choix = moyen.get_untracked();
        let operateur_envoye = if choix == MoyenPaiement::MobileMoney {
            operateur_depuis(&operateur.get_untracked())
        } else {
            None
        };
        if let Err(err) = valider_moyen_operateur(choix, operateur_envoye) {
            notifier(toasts, ToastKind::Erreur, err.to_string());
            return;
        }
        #[cfg(feature = "csr")]
        {
            let sid = session_id();
            let payload = InitiationPayload {
                moyen_paiement: choix,
                operateur_mobile: operateur_envoye,
            };
            envoi.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::sessions::initier_paiement(&sid, &payload).await {
                    Ok(init) => {
                        notifier(toasts, ToastKind::Succes, "Paiement initié");
                        if let Some(url) = init.paiement_url {
                            if let Some(fenetre) = web_sys::window() {
                                let _ = fenetre.location().set_href(&url);
                            }
                            return;
                        }
                        // Immediate means settle server-side; refresh and close.
                        if let Ok(s) = crate::net::sessions::detail(&sid).await {
                            session.set(Some(s));
                        }
                        match crate::net::sessions::recapitulatif(&sid).await {
                            Ok(r) => {
                                if !r.message_remerciement.is_empty() {
                                    notifier(
                                        toasts,
                                        ToastKind::Succes,
                                        r.message_remerciement.clone(),
                                    );
                                }
                                recap.set(Some(r));
                            }
                            Err(err) => notifier(toasts, ToastKind::Erreur, err.to_string()),
                        }
                        envoi.set(false);
                    }
                    Err(err) => {
                        notifier(toasts, ToastKind::Erreur, err.to_string());
                        envoi.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (operateur_envoye, envoi, session, recap);
        }
    });

    let soumettre_avis = Callback::new(move |()| {
        let Some(s) = session.get_untracked() else {
            return;
        };
        let payload = match payload_avis(&s, note.get_untracked(), &commentaire.get_untracked()) {
            Ok(payload) => payload,
            Err(err) => {
                notifier(toasts, ToastKind::Erreur, err.to_string());
                return;
            }
        };
        #[cfg(feature = "csr")]
        {
            envoi.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::feedback::soumettre(&payload).await {
                    Ok(_) => {
                        notifier(toasts, ToastKind::Succes, "Merci pour votre avis !");
                        avis_ouvert.set(false);
                    }
                    Err(err) => notifier(toasts, ToastKind::Erreur, err.to_string()),
                }
                envoi.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (payload, avis_ouvert, envoi);
        }
    });

    let ouvrir_avis = Callback::new(move |()| {
        note.set(0);
        commentaire.set(String::new());
        avis_ouvert.set(true);
    });

    view! {
        <div class="session-page">
            <header class="session-entete">
                <h1>{move || site.get().settings.site_title}</h1>
                <p class="session-entete__sous-titre">
                    {move || site.get().settings.site_subtitle}
                </p>
            </header>
            <Show
                when=move || !chargement.get()
                fallback=|| view! { <p class="page-chargement">"Chargement de la session..."</p> }
            >
                {move || {
                    let message = erreur_session.get();
                    if !message.is_empty() {
                        return view! {
                            <div class="page-erreur">
                                <p>{message}</p>
                                <a class="btn" href="/">
                                    "Retour à l'accueil"
                                </a>
                            </div>
                        }
                            .into_any();
                    }
                    let Some(s) = session.get() else {
                        return view! {
                            <div class="page-erreur">
                                <p>"Session introuvable ou non initialisée."</p>
                                <a class="btn" href="/">
                                    "Retour à l'accueil"
                                </a>
                            </div>
                        }
                            .into_any();
                    };
                    if s.est_expire
                        || matches!(s.statut, SessionStatut::Expire | SessionStatut::Abandonne)
                    {
                        return view! {
                            <div class="session-expiree">
                                <h2>"Session expirée"</h2>
                                <p>
                                    "Cette session n'est plus active. Scannez un nouveau QR code au salon pour recommencer."
                                </p>
                            </div>
                        }
                            .into_any();
                    }
                    let actuel = indice_etape(s.statut);
                    let salutation = s
                        .client
                        .as_ref()
                        .map(|client| format!("Bonjour {} !", client.prenom));
                    let montant = s.montant_affiche();
                    let etape = match s.statut {
                        SessionStatut::Scanne => view! {
                            <IdentificationForm
                                formulaire=formulaire
                                envoi=envoi
                                on_submit=identifier
                            />
                        }
                            .into_any(),
                        SessionStatut::Identification => view! {
                            <PrestationChoix
                                prestations=prestations
                                prestation_choisie=prestation_choisie
                                montant_saisi=montant_saisi
                                envoi=envoi
                                on_submit=valider_prestation
                            />
                        }
                            .into_any(),
                        SessionStatut::PrestationSelectionnee => view! {
                            <MoyenChoix
                                moyen=moyen
                                operateur=operateur
                                montant=montant
                                envoi=envoi
                                on_submit=initier
                            />
                        }
                            .into_any(),
                        SessionStatut::PaiementInitie => view! {
                            <div class="session-attente">
                                <h2>"Paiement en cours"</h2>
                                <p>
                                    "Suivez les instructions de votre opérateur pour finaliser le paiement."
                                </p>
                            </div>
                        }
                            .into_any(),
                        SessionStatut::PaiementEchoue => view! {
                            <div class="session-echec">
                                <h2>"Paiement échoué"</h2>
                                <p>
                                    "Le paiement n'a pas abouti. Rapprochez-vous du salon pour réessayer."
                                </p>
                            </div>
                        }
                            .into_any(),
                        SessionStatut::PaiementReussi => view! {
                            <Show
                                when=move || recap.get().is_some()
                                fallback=|| {
                                    view! {
                                        <p class="page-chargement">
                                            "Chargement du récapitulatif..."
                                        </p>
                                    }
                                }
                            >
                                {move || {
                                    recap
                                        .get()
                                        .map(|r| {
                                            let prestation = r
                                                .session
                                                .prestation
                                                .as_ref()
                                                .map(|p| p.nom.clone())
                                                .unwrap_or_default();
                                            let montant = r
                                                .session
                                                .montant_affiche()
                                                .map(|m| format_fcfa(u64::from(m)))
                                                .unwrap_or_else(|| "—".to_owned());
                                            let reglement = r
                                                .paiement
                                                .as_ref()
                                                .map(|p| {
                                                    (
                                                        moyen_paiement_affichage(
                                                            p.moyen_paiement,
                                                            p.operateur_mobile,
                                                        ),
                                                        p.statut.label().to_owned(),
                                                    )
                                                });
                                            view! {
                                                <div class="session-recap">
                                                    <h2>"Paiement réussi !"</h2>
                                                    <p class="session-recap__merci">
                                                        {r.message_remerciement.clone()}
                                                    </p>
                                                    <dl class="session-recap__details">
                                                        <dt>"Prestation"</dt>
                                                        <dd>{prestation}</dd>
                                                        <dt>"Montant"</dt>
                                                        <dd>{montant}</dd>
                                                        {reglement
                                                            .map(|(moyen, statut)| {
                                                                view! {
                                                                    <dt>"Moyen"</dt>
                                                                    <dd>{moyen}</dd>
                                                                    <dt>"Statut"</dt>
                                                                    <dd>{statut}</dd>
                                                                }
                                                            })}
                                                    </dl>
                                                    <div class="session-recap__actions">
                                                        <button
                                                            class="btn"
                                                            on:click=move |_| au_revoir_ouvert.set(true)
                                                        >
                                                            "Ok"
                                                        </button>
                                                        <button
                                                            class="btn btn--primary"
                                                            on:click=move |_| ouvrir_avis.run(())
                                                        >
                                                            "Laisser un avis"
                                                        </button>
                                                    </div>
                                                </div>
                                            }
                                        })
                                }}
                            </Show>
                        }
                            .into_any(),
                        SessionStatut::Abandonne | SessionStatut::Expire => {
                            view! { <div></div> }.into_any()
                        }
                    };
                    view! {
                        <div class="session-corps">
                            {salutation.map(|texte| view! { <p class="session-salutation">{texte}</p> })}
                            <EtapesBarre actuel=actuel/>
                            {etape}
                        </div>
                    }
                        .into_any()
                }}
            </Show>
            <Show when=move || avis_ouvert.get()>
                <AvisDialog
                    note=note
                    commentaire=commentaire
                    envoi=envoi
                    on_submit=soumettre_avis
                    on_close=Callback::new(move |()| avis_ouvert.set(false))
                />
            </Show>
            <Show when=move || au_revoir_ouvert.get()>
                {move || {
                    let nom_client = session
                        .get()
                        .and_then(|s| s.client.map(|c| format!("{} {}", c.prenom, c.nom)))
                        .unwrap_or_default();
                    view! {
                        <AuRevoirDialog
                            nom_client=nom_client
                            on_close=Callback::new(move |()| au_revoir_ouvert.set(false))
                        />
                    }
                }}
            </Show>
        </div>
    }
}

/// Horizontal progress indicator over the four workflow steps.
#[component]
fn EtapesBarre(actuel: usize) -> impl IntoView {
    view! {
        <ol class="etapes">
            {ETAPES
                .into_iter()
                .enumerate()
                .map(|(indice, libelle)| {
                    let classe = if indice < actuel {
                        "etapes__etape etapes__etape--faite"
                    } else if indice == actuel {
                        "etapes__etape etapes__etape--active"
                    } else {
                        "etapes__etape"
                    };
                    view! { <li class=classe>{libelle}</li> }
                })
                .collect::<Vec<_>>()}
        </ol>
    }
}

/// Phone-first identification. The personal fields are only needed when
/// the number is new to the salon.
#[component]
fn IdentificationForm(
    formulaire: RwSignal<FormulaireIdentification>,
    envoi: RwSignal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="session-section">
            <h2>"Identifiez-vous"</h2>
            <label class="dialog__label">
                "Numéro de téléphone"
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
            <p class="session-section__aide">
                "Nouveau au salon ? Complétez aussi les informations ci-dessous."
            </p>
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
            <button
                class="btn btn--primary btn--large"
                prop:disabled=move || envoi.get()
                on:click=move |_| on_submit.run(())
            >
                "S'identifier"
            </button>
        </section>
    }
}

/// Prestation picker with an optional negotiated amount.
#[component]
fn PrestationChoix(
    prestations: RwSignal<Vec<Prestation>>,
    prestation_choisie: RwSignal<String>,
    montant_saisi: RwSignal<String>,
    envoi: RwSignal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="session-section">
            <h2>"Choisissez votre prestation"</h2>
            <label class="dialog__label">
                "Prestation"
                <select
                    class="dialog__input"
                    prop:value=move || prestation_choisie.get()
                    on:change=move |ev| prestation_choisie.set(event_target_value(&ev))
                >
                    <option value="">"Sélectionner une prestation"</option>
                    {move || {
                        prestations
                            .get()
                            .into_iter()
                            .map(|prestation| {
                                let libelle = if prestation.prix_affichage.is_empty() {
                                    prestation.nom.clone()
                                } else {
                                    format!("{} — {}", prestation.nom, prestation.prix_affichage)
                                };
                                view! {
                                    <option value=prestation.id.to_string()>{libelle}</option>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>
            <label class="dialog__label">
                "Montant convenu (optionnel, FCFA)"
                <input
                    class="dialog__input"
                    type="number"
                    min="0"
                    placeholder="Laisser vide pour le prix de base"
                    prop:value=move || montant_saisi.get()
                    on:input=move |ev| montant_saisi.set(event_target_value(&ev))
                />
            </label>
            <button
                class="btn btn--primary btn--large"
                prop:disabled=move || envoi.get()
                on:click=move |_| on_submit.run(())
            >
                "Valider la prestation"
            </button>
        </section>
    }
}

/// Payment mean selection; mobile money asks for the operator.
#[component]
fn MoyenChoix(
    moyen: RwSignal<MoyenPaiement>,
    operateur: RwSignal<String>,
    montant: Option<u32>,
    envoi: RwSignal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="session-section">
            <h2>"Réglez votre prestation"</h2>
            {montant
                .map(|m| {
                    view! {
                        <p class="session-section__montant">
                            "Montant à payer : " {format_fcfa(u64::from(m))}
                        </p>
                    }
                })}
            <label class="dialog__label">
                "Moyen de paiement"
                <select
                    class="dialog__input"
                    prop:value=move || moyen.get().as_str().to_owned()
                    on:change=move |ev| {
                        moyen.set(moyen_depuis(&event_target_value(&ev)));
                        if moyen.get_untracked() != MoyenPaiement::MobileMoney {
                            operateur.set(String::new());
                        }
                    }
                >
                    {MoyenPaiement::ALL
                        .into_iter()
                        .map(|choix| {
                            view! { <option value=choix.as_str()>{choix.label()}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <Show when=move || moyen.get() == MoyenPaiement::MobileMoney>
                <label class="dialog__label">
                    "Opérateur mobile"
                    <select
                        class="dialog__input"
                        prop:value=move || operateur.get()
                        on:change=move |ev| operateur.set(event_target_value(&ev))
                    >
                        <option value="">"Sélectionner un opérateur"</option>
                        {OperateurMobile::ALL
                            .into_iter()
                            .map(|choix| {
                                view! { <option value=choix.as_str()>{choix.label()}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </Show>
            <button
                class="btn btn--primary btn--large"
                prop:disabled=move || envoi.get()
                on:click=move |_| on_submit.run(())
            >
                "Payer"
            </button>
        </section>
    }
}

/// Farewell card; closing it for good leaves for the home page.
#[component]
fn AuRevoirDialog(nom_client: String, on_close: Callback<()>) -> impl IntoView {
    let nom_affiche = (!nom_client.is_empty()).then_some(nom_client);
    let quitter = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(fenetre) = web_sys::window() {
                let _ = fenetre.location().set_href("/");
            }
        }
        #[cfg(not(feature = "csr"))]
        on_close.run(());
    };
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Au revoir !"</h2>
                <p class="dialog__message">
                    "Merci pour votre visite ! Nous espérons vous revoir très prochainement."
                </p>
                {nom_affiche
                    .map(|nom| view! { <p class="session-recap__client">{nom}</p> })}
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=quitter>
                        "Fermer"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// End-of-checkout rating dialog.
#[component]
fn AvisDialog(
    note: RwSignal<u8>,
    commentaire: RwSignal<String>,
    envoi: RwSignal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Votre avis compte"</h2>
                <div class="dialog__etoiles">
                    {move || {
                        view! {
                            <RatingStars
                                note=note.get()
                                on_change=Callback::new(move |n| note.set(n))
                            />
                        }
                    }}
                </div>
                <label class="dialog__label">
                    "Commentaire (optionnel)"
                    <textarea
                        class="dialog__input"
                        prop:value=move || commentaire.get()
                        on:input=move |ev| commentaire.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Plus tard"
                    </button>
                    <button
                        class="btn btn--primary"
                        prop:disabled=move || envoi.get()
                        on:click=move |_| on_submit.run(())
                    >
                        "Envoyer"
                    </button>
                </div>
            </div>
        </div>
    }
}
