//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Stylesheet, Title};
use leptos_router::{
    components::{ParentRoute, Route, Router, Routes},
    ParamSegment, StaticSegment,
};

use crate::components::layout::AdminShell;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    auth_directe::AuthDirectePage, avis::AvisPage, clients::ClientsPage,
    dashboard::DashboardPage, login::LoginPage, paiements::PaiementsPage,
    prestations::PrestationsPage, qr_codes::QrCodesPage, session::SessionPage,
    settings::SettingsPage, users::UsersPage,
};
use crate::state::{auth::AuthState, site::SiteState, toasts::ToastState};

/// Repaint when the system color scheme flips; only the `auto` theme
/// actually changes shade.
#[cfg(feature = "csr")]
fn suivre_scheme_systeme(site: RwSignal<SiteState>) {
    use wasm_bindgen::{closure::Closure, JsCast};

    let Some(mq) = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
    else {
        return;
    };
    let cb = Closure::wrap(Box::new(move || {
        site.update(|etat| etat.prefere_sombre = crate::util::theme::prefere_sombre());
        let etat = site.get_untracked();
        crate::util::theme::appliquer(&etat.settings, etat.en_sombre());
    }) as Box<dyn FnMut()>);
    mq.set_onchange(Some(cb.as_ref().unchecked_ref()));
    // App-lifetime listener.
    cb.forget();
}

/// Root application component.
///
/// Provides the shared state contexts, restores the stored session, loads
/// the public site settings, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restauree(
        crate::util::storage::charger_token(),
        crate::util::storage::charger_utilisateur(),
    ));
    let site = RwSignal::new(SiteState {
        preference: crate::util::storage::charger_preference_theme(),
        prefere_sombre: crate::util::theme::prefere_sombre(),
        ..SiteState::default()
    });
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(site);
    provide_context(toasts);

    #[cfg(feature = "csr")]
    {
        // Confirm the restored token against the profile endpoint; a
        // rejected token drops the stored session.
        if let Some(token) = auth.get_untracked().token {
            leptos::task::spawn_local(async move {
                match crate::net::users::profil(&token).await {
                    Ok(user) => {
                        crate::util::storage::enregistrer_utilisateur(&user);
                        auth.update(|state| state.connecter(token, user));
                    }
                    Err(err) if err.est_non_authentifie() => {
                        crate::util::storage::effacer_session();
                        auth.update(AuthState::deconnecter);
                    }
                    Err(_) => auth.update(|state| state.loading = false),
                }
            });
        }

        leptos::task::spawn_local(async move {
            match crate::net::settings::publics().await {
                Ok(reglages) => site.update(|etat| etat.settings = reglages),
                // Defaults hold until the next full load.
                Err(err) => log::warn!("réglages publics indisponibles: {err}"),
            }
            let etat = site.get_untracked();
            crate::util::theme::appliquer(&etat.settings, etat.en_sombre());
            crate::util::theme::appliquer_titre(&etat.settings);
        });

        suivre_scheme_systeme(site);
    }

    view! {
        <Stylesheet id="salon" href="/styles.css"/>
        <Title text="Salon"/>

        <Router>
            <Routes fallback=|| "Page introuvable.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("auth-directe") view=AuthDirectePage/>
                <Route
                    path=(StaticSegment("session"), ParamSegment("session_id"))
                    view=SessionPage
                />
                <ParentRoute path=StaticSegment("") view=AdminShell>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("paiements") view=PaiementsPage/>
                    <Route path=StaticSegment("clients") view=ClientsPage/>
                    <Route path=StaticSegment("prestations") view=PrestationsPage/>
                    <Route path=StaticSegment("avis") view=AvisPage/>
                    <Route path=StaticSegment("qr-codes") view=QrCodesPage/>
                    <Route path=StaticSegment("users") view=UsersPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                    <Route path=StaticSegment("") view=DashboardPage/>
                </ParentRoute>
            </Routes>
            <ToastHost/>
        </Router>
    }
}
