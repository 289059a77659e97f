//! QR code registry: generation, scan/use counters, expiry housekeeping.

#[cfg(test)]
#[path = "qr_codes_test.rs"]
mod qr_codes_test;

use leptos::prelude::*;
use uuid::Uuid;

use salon_core::client::Client;
use salon_core::qr::{QrCode, QrCodeRow, QrGenerationPayload, TypeQr};
use salon_core::time::format_datetime;

use crate::components::confirm_dialog::ConfirmDialog;
#[cfg(feature = "csr")]
use crate::components::toast_host::notifier;
use crate::state::auth::AuthState;
#[cfg(feature = "csr")]
use crate::state::toasts::ToastKind;
use crate::state::toasts::ToastState;
#[cfg(feature = "csr")]
use crate::util::auth::signaler_echec;

fn type_qr_depuis(valeur: &str) -> TypeQr {
    TypeQr::ALL
        .into_iter()
        .find(|type_qr| type_qr.as_str() == valeur)
        .unwrap_or(TypeQr::Identification)
}

/// Default encoded content: a check-in URL under a fresh session id.
fn contenu_defaut() -> String {
    format!("/session/{}", Uuid::new_v4())
}

fn expiration_affichage(date_expiration: Option<&str>) -> String {
    match date_expiration {
        Some(date) if !date.is_empty() => format_datetime(date),
        _ => "Sans expiration".to_owned(),
    }
}

fn classe_statut(est_expire: bool) -> &'static str {
    if est_expire {
        "badge badge--expire"
    } else {
        "badge badge--actif"
    }
}

#[component]
pub fn QrCodesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let codes = RwSignal::new(Vec::<QrCodeRow>::new());
    let clients = RwSignal::new(Vec::<Client>::new());
    let chargement = RwSignal::new(true);
    let generation_ouverte = RwSignal::new(false);
    let suppression = RwSignal::new(None::<Uuid>);

    let recharger = Callback::new(move |()| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::qrcodes::lister(&token).await {
                    Ok(liste) => codes.set(liste),
                    Err(err) => signaler_echec(auth, toasts, &err),
                }
                if let Ok(liste) = crate::net::clients::lister(&token).await {
                    clients.set(liste);
                }
                chargement.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (codes, clients, chargement, toasts);
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

    // scanner/utiliser/regenerer share the answer shape; one runner each.
    let scanner = Callback::new(move |id: Uuid| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::qrcodes::scanner(&token, id).await {
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
            let _ = id;
        }
    });

    let utiliser = Callback::new(move |id: Uuid| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::qrcodes::utiliser(&token, id).await {
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
            let _ = id;
        }
    });

    let regenerer = Callback::new(move |id: Uuid| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::qrcodes::regenerer_image(&token, id).await {
                    Ok(reponse) => notifier(toasts, ToastKind::Succes, reponse.message),
                    Err(err) => signaler_echec(auth, toasts, &err),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    });

    let nettoyer = move |_| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::qrcodes::nettoyer_expires(&token).await {
                    Ok(reponse) => {
                        notifier(toasts, ToastKind::Succes, reponse.message);
                        recharger.run(());
                    }
                    Err(err) => signaler_echec(auth, toasts, &err),
                }
            });
        }
    };

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
                match crate::net::qrcodes::supprimer(&token, id).await {
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
        <div class="qr-page">
            <header class="page-entete">
                <button class="btn btn--primary" on:click=move |_| generation_ouverte.set(true)>
                    "+ Générer un QR code"
                </button>
                <button class="btn" on:click=nettoyer>
                    "Nettoyer les expirés"
                </button>
            </header>
            <Show
                when=move || !chargement.get()
                fallback=|| view! { <p class="page-chargement">"Chargement des QR codes..."</p> }
            >
                <table class="tableau">
                    <thead>
                        <tr>
                            <th>"Client"</th>
                            <th>"Type"</th>
                            <th>"Statut"</th>
                            <th>"Scans"</th>
                            <th>"Expiration"</th>
                            <th>"Créé le"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            codes
                                .get()
                                .into_iter()
                                .map(|code| {
                                    let id = code.id;
                                    let client = code
                                        .client_nom_complet
                                        .clone()
                                        .unwrap_or_else(|| "Client inconnu".to_owned());
                                    view! {
                                        <tr class="tableau__ligne">
                                            <td>{client}</td>
                                            <td>{code.type_qrcode_display.clone()}</td>
                                            <td>
                                                <span class=classe_statut(code.est_expire)>
                                                    {code.statut_display.clone()}
                                                </span>
                                            </td>
                                            <td>{code.nombre_scans}</td>
                                            <td>
                                                {expiration_affichage(
                                                    code.date_expiration.as_deref(),
                                                )}
                                            </td>
                                            <td>{format_datetime(&code.date_creation)}</td>
                                            <td class="tableau__actions">
                                                <button
                                                    class="btn btn--petit"
                                                    on:click=move |_| scanner.run(id)
                                                >
                                                    "Scanner"
                                                </button>
                                                <button
                                                    class="btn btn--petit"
                                                    on:click=move |_| utiliser.run(id)
                                                >
                                                    "Utiliser"
                                                </button>
                                                <button
                                                    class="btn btn--petit"
                                                    on:click=move |_| regenerer.run(id)
                                                >
                                                    "Image"
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
            <Show when=move || generation_ouverte.get()>
                <GenerationDialog
                    clients=clients
                    on_close=Callback::new(move |()| {
                        generation_ouverte.set(false);
                        recharger.run(());
                    })
                />
            </Show>
            <Show when=move || suppression.get().is_some()>
                <ConfirmDialog
                    titre="Supprimer le QR code".to_owned()
                    message="Le QR code et son image seront supprimés.".to_owned()
                    libelle_confirmer="Supprimer".to_owned()
                    on_confirm=confirmer_suppression
                    on_cancel=Callback::new(move |()| suppression.set(None))
                />
            </Show>
        </div>
    }
}

/// Generation form; once the backend answers, the same dialog shows the
/// image so the code can be handed over immediately.
#[component]
fn GenerationDialog(clients: RwSignal<Vec<Client>>, on_close: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    #[cfg(not(feature = "csr"))]
    let _ = (auth, toasts);

    let client_choisi = RwSignal::new(String::new());
    let type_choisi = RwSignal::new(TypeQr::Identification);
    // A new check-in URL by default; scanning it opens a fresh session.
    let contenu = RwSignal::new(contenu_defaut());
    let erreur = RwSignal::new(String::new());
    let resultat = RwSignal::new(None::<QrCode>);

    let generer = Callback::new(move |()| {
        let Ok(client_id) = Uuid::parse_str(client_choisi.get_untracked().trim()) else {
            erreur.set("Veuillez sélectionner un client".to_owned());
            return;
        };
        erreur.set(String::new());
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            let texte = contenu.get_untracked().trim().to_owned();
            let payload = QrGenerationPayload {
                client_id,
                type_qrcode: type_choisi.get_untracked(),
                contenu: (!texte.is_empty()).then_some(texte),
                date_expiration: None,
            };
            leptos::task::spawn_local(async move {
                match crate::net::qrcodes::generer_pour_client(&token, &payload).await {
                    Ok(code) => resultat.set(Some(code)),
                    Err(err) => signaler_echec(auth, toasts, &err),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (client_id, resultat);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Générer un QR code"</h2>
                <Show
                    when=move || resultat.get().is_none()
                    fallback=move || {
                        resultat
                            .get()
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
                    }
                >
                    <label class="dialog__label">
                        "Client"
                        <select
                            class="dialog__input"
                            prop:value=move || client_choisi.get()
                            on:change=move |ev| client_choisi.set(event_target_value(&ev))
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
                        "Type de QR code"
                        <select
                            class="dialog__input"
                            prop:value=move || type_choisi.get().as_str().to_owned()
                            on:change=move |ev| {
                                type_choisi.set(type_qr_depuis(&event_target_value(&ev)));
                            }
                        >
                            {TypeQr::ALL
                                .into_iter()
                                .map(|type_qr| {
                                    view! {
                                        <option value=type_qr.as_str()>{type_qr.label()}</option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Contenu encodé"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || contenu.get()
                            on:input=move |ev| contenu.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !erreur.get().is_empty()>
                        <p class="dialog__erreur">{move || erreur.get()}</p>
                    </Show>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Fermer"
                    </button>
                    <Show when=move || resultat.get().is_none()>
                        <button class="btn btn--primary" on:click=move |_| generer.run(())>
                            "Générer"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
