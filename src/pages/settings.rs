//! Site settings: branding form, appearance preferences, maintenance.
//!
//! SYSTEM CONTEXT
//! ==============
//! Branding writes go through the backend's single settings row and come
//! back as the authoritative state, which then repaints the live theme.
//! Theme and font size are browser-side preferences: the backend serves
//! defaults but does not persist changes, so the selects here apply
//! immediately without a round-trip. The theme choice additionally sticks
//! in `localStorage` so it survives a reload.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use salon_core::color::normalize_hex_color;
use salon_core::settings::{FontSize, SiteSettingsPayload, Theme};

#[cfg(feature = "csr")]
use crate::components::toast_host::notifier;
use crate::state::auth::AuthState;
use crate::state::site::SiteState;
#[cfg(feature = "csr")]
use crate::state::toasts::ToastKind;
use crate::state::toasts::ToastState;
#[cfg(feature = "csr")]
use crate::util::auth::signaler_echec;
use crate::util::{storage, theme};

fn theme_depuis(valeur: &str) -> Theme {
    Theme::ALL
        .into_iter()
        .find(|theme| theme.as_str() == valeur)
        .unwrap_or(Theme::Auto)
}

fn taille_depuis(valeur: &str) -> FontSize {
    FontSize::ALL
        .into_iter()
        .find(|taille| taille.as_str() == valeur)
        .unwrap_or(FontSize::Moyenne)
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let site = expect_context::<RwSignal<SiteState>>();

    let formulaire = RwSignal::new(SiteSettingsPayload::default());
    let chargement = RwSignal::new(true);
    let id_reglages = RwSignal::new(0u64);

    let demande = RwSignal::new(false);
    Effect::new(move || {
        if demande.get() {
            return;
        }
        let etat = auth.get();
        if !etat.est_connecte() || !etat.est_admin() {
            return;
        }
        demande.set(true);
        #[cfg(feature = "csr")]
        {
            let Some(token) = etat.token else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::settings::charger(&token).await {
                    Ok(reglages) => {
                        formulaire.set(reglages.payload());
                        id_reglages.set(reglages.id);
                        site.update(|etat| etat.settings = reglages);
                    }
                    Err(err) => signaler_echec(auth, toasts, &err),
                }
                chargement.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (formulaire, chargement, id_reglages, site, toasts);
        }
    });

    let erreur = RwSignal::new(String::new());

    let enregistrer = Callback::new(move |()| {
        let payload = formulaire.get_untracked();
        if let Err(err) = payload.valider() {
            erreur.set(err.to_string());
            return;
        }
        erreur.set(String::new());
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            let id = id_reglages.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::settings::mettre_a_jour(&token, id, &payload).await {
                    Ok(reglages) => {
                        site.update(|etat| etat.settings = reglages);
                        let etat = site.get_untracked();
                        theme::appliquer(&etat.settings, etat.en_sombre());
                        theme::appliquer_titre(&etat.settings);
                        notifier(toasts, ToastKind::Succes, "Paramètres enregistrés");
                    }
                    Err(err) => signaler_echec(auth, toasts, &err),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = payload;
        }
    });

    // Reset seeds the form only; nothing changes until save.
    let remettre_defauts = move |_| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::settings::valeurs_defaut(&token).await {
                    Ok(defauts) => {
                        formulaire.set(defauts);
                        notifier(
                            toasts,
                            ToastKind::Info,
                            "Valeurs par défaut chargées. Enregistrez pour les appliquer.",
                        );
                    }
                    Err(err) => signaler_echec(auth, toasts, &err),
                }
            });
        }
    };

    let vider_cache = move |_| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::settings::vider_cache(&token).await {
                    Ok(reponse) => notifier(toasts, ToastKind::Succes, reponse.message),
                    Err(err) => signaler_echec(auth, toasts, &err),
                }
            });
        }
    };

    let changer_theme = move |ev: leptos::ev::Event| {
        let choix = theme_depuis(&event_target_value(&ev));
        storage::enregistrer_preference_theme(choix);
        site.update(|etat| etat.preference = Some(choix));
        let etat = site.get_untracked();
        theme::appliquer(&etat.settings, etat.en_sombre());
    };

    let changer_taille = move |ev: leptos::ev::Event| {
        let choix = taille_depuis(&event_target_value(&ev));
        site.update(|etat| etat.settings.font_size = choix);
        let etat = site.get_untracked();
        theme::appliquer(&etat.settings, etat.en_sombre());
    };

    view! {
        <div class="settings-page">
            <Show
                when=move || auth.get().est_admin()
                fallback=|| {
                    view! {
                        <div class="panneau-refus">
                            <h2>"Accès refusé"</h2>
                            <p>
                                "Les vendeurs n'ont pas accès aux paramètres. Contactez un administrateur pour toute modification."
                            </p>
                        </div>
                    }
                }
            >
                <Show
                    when=move || !chargement.get()
                    fallback=|| {
                        view! { <p class="page-chargement">"Chargement des paramètres..."</p> }
                    }
                >
                    <section class="settings-section">
                        <h2>"Identité du site"</h2>
                        <label class="dialog__label">
                            "Titre du site"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || formulaire.get().site_title
                                on:input=move |ev| {
                                    formulaire.update(|f| f.site_title = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            "Sous-titre"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || formulaire.get().site_subtitle
                                on:input=move |ev| {
                                    formulaire
                                        .update(|f| f.site_subtitle = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            "Message de bienvenue"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || formulaire.get().welcome_message
                                on:input=move |ev| {
                                    formulaire
                                        .update(|f| f.welcome_message = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            "Description (référencement)"
                            <textarea
                                class="dialog__input"
                                prop:value=move || formulaire.get().meta_description
                                on:input=move |ev| {
                                    formulaire
                                        .update(|f| f.meta_description = event_target_value(&ev));
                                }
                            ></textarea>
                        </label>
                    </section>
                    <section class="settings-section">
                        <h2>"Couleurs"</h2>
                        <label class="dialog__label">
                            "Couleur principale"
                            <input
                                class="dialog__input dialog__input--couleur"
                                type="color"
                                prop:value=move || {
                                    normalize_hex_color(&formulaire.get().primary_color, "#FFD700")
                                }
                                on:input=move |ev| {
                                    formulaire
                                        .update(|f| f.primary_color = event_target_value(&ev));
                                    let f = formulaire.get_untracked();
                                    theme::previsualiser_couleurs(
                                        &f.primary_color,
                                        &f.secondary_color,
                                    );
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            "Couleur secondaire"
                            <input
                                class="dialog__input dialog__input--couleur"
                                type="color"
                                prop:value=move || {
                                    normalize_hex_color(
                                        &formulaire.get().secondary_color,
                                        "#E3F2FD",
                                    )
                                }
                                on:input=move |ev| {
                                    formulaire
                                        .update(|f| f.secondary_color = event_target_value(&ev));
                                    let f = formulaire.get_untracked();
                                    theme::previsualiser_couleurs(
                                        &f.primary_color,
                                        &f.secondary_color,
                                    );
                                }
                            />
                        </label>
                    </section>
                    <section class="settings-section">
                        <h2>"Contact"</h2>
                        <label class="dialog__label">
                            "Email de contact"
                            <input
                                class="dialog__input"
                                type="email"
                                prop:value=move || formulaire.get().contact_email
                                on:input=move |ev| {
                                    formulaire
                                        .update(|f| f.contact_email = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            "Téléphone de contact"
                            <input
                                class="dialog__input"
                                type="tel"
                                prop:value=move || formulaire.get().contact_phone
                                on:input=move |ev| {
                                    formulaire
                                        .update(|f| f.contact_phone = event_target_value(&ev));
                                }
                            />
                        </label>
                    </section>
                    <section class="settings-section">
                        <h2>"Apparence (ce navigateur)"</h2>
                        <label class="dialog__label">
                            "Thème"
                            <select
                                class="dialog__input"
                                prop:value=move || site.get().theme_effectif().as_str().to_owned()
                                on:change=changer_theme
                            >
                                {Theme::ALL
                                    .into_iter()
                                    .map(|theme| {
                                        view! {
                                            <option value=theme.as_str()>{theme.label()}</option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <label class="dialog__label">
                            "Taille de police"
                            <select
                                class="dialog__input"
                                prop:value=move || {
                                    site.get().settings.font_size.as_str().to_owned()
                                }
                                on:change=changer_taille
                            >
                                {FontSize::ALL
                                    .into_iter()
                                    .map(|taille| {
                                        view! {
                                            <option value=taille.as_str()>{taille.label()}</option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                    </section>
                    <Show when=move || !erreur.get().is_empty()>
                        <p class="dialog__erreur">{move || erreur.get()}</p>
                    </Show>
                    <div class="settings-actions">
                        <button class="btn btn--primary" on:click=move |_| enregistrer.run(())>
                            "Enregistrer"
                        </button>
                        <button class="btn" on:click=remettre_defauts>
                            "Valeurs par défaut"
                        </button>
                        <button class="btn" on:click=vider_cache>
                            "Vider le cache"
                        </button>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
