//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page applies the same signed-out redirect, and the
//! login page bounces already-signed-in users back to the dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::components::toast_host::notifier;
use crate::net::api::ApiError;
use crate::state::auth::AuthState;
use crate::state::toasts::{ToastKind, ToastState};

/// Redirect to `/login` whenever auth has settled with no session.
pub fn install_redirect_non_connecte<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && !state.est_connecte() {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect to `/dashboard` whenever a session is already present.
pub fn install_redirect_connecte<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.est_connecte() {
            navigate("/dashboard", NavigateOptions::default());
        }
    });
}

/// Toast a request failure. A rejected token additionally drops the
/// session, which sends the redirect effect back to the login page.
pub fn signaler_echec(auth: RwSignal<AuthState>, toasts: RwSignal<ToastState>, err: &ApiError) {
    #[cfg(feature = "csr")]
    log::error!("appel API en échec: {err}");
    if err.est_non_authentifie() {
        crate::util::storage::effacer_session();
        auth.update(AuthState::deconnecter);
    }
    notifier(toasts, ToastKind::Erreur, err.to_string());
}
