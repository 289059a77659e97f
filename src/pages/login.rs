//! Login page for the back-office console.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use salon_core::user::LoginPayload;

#[cfg(feature = "csr")]
use crate::components::toast_host::notifier;
use crate::state::auth::AuthState;
use crate::state::site::SiteState;
#[cfg(feature = "csr")]
use crate::state::toasts::ToastKind;
use crate::state::toasts::ToastState;
use crate::util::auth::install_redirect_connecte;

/// Trim the form fields and require both before a submit goes out.
fn valider_formulaire(username: &str, password: &str) -> Result<LoginPayload, &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Le nom d'utilisateur est requis");
    }
    if password.is_empty() {
        return Err("Le mot de passe est requis");
    }
    Ok(LoginPayload {
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

/// Username + password form. A success stores the session and the
/// signed-in redirect takes over.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let site = expect_context::<RwSignal<SiteState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    #[cfg(not(feature = "csr"))]
    let _ = toasts;

    install_redirect_connecte(auth, use_navigate());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let erreur = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match valider_formulaire(&username.get(), &password.get()) {
            Ok(payload) => payload,
            Err(message) => {
                erreur.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        erreur.set(String::new());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::users::login(&payload).await {
                Ok(reponse) => {
                    crate::util::storage::enregistrer_session(&reponse.token, &reponse.user);
                    auth.update(|state| state.connecter(reponse.token, reponse.user));
                }
                Err(err) => {
                    erreur.set(err.to_string());
                    notifier(toasts, ToastKind::Erreur, err.to_string());
                    busy.set(false);
                }
            }
        });

        #[cfg(not(feature = "csr"))]
        {
            let _ = payload;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{move || site.get().settings.site_title.clone()}</h1>
                <p class="login-card__subtitle">
                    {move || site.get().settings.site_subtitle.clone()}
                </p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Nom d'utilisateur"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Mot de passe"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Connexion..." } else { "Se connecter" }}
                    </button>
                </form>
                <Show when=move || !erreur.get().is_empty()>
                    <p class="login-message login-message--erreur">{move || erreur.get()}</p>
                </Show>
            </div>
        </div>
    }
}
