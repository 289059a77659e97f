//! Notification stack rendered above every page.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::state::toasts::DUREE_AFFICHAGE_MS;
use crate::state::toasts::{Toast, ToastKind, ToastState};

/// Queue a toast and schedule its dismissal.
///
/// The timer only runs in the browser; native tests observe the push
/// without the removal.
pub fn notifier(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let id = toasts.try_update(|state| state.pousser(kind, message.into()));
    #[cfg(feature = "csr")]
    {
        if let Some(id) = id {
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(DUREE_AFFICHAGE_MS).await;
                let _ = toasts.try_update(|state| state.retirer(id));
            });
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

/// Fixed overlay listing the queued toasts, newest at the bottom.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let Toast { id, kind, message } = toast;
                    view! {
                        <div class=format!("toast {}", kind.classe())>
                            <span class="toast__message">{message}</span>
                            <button
                                class="toast__close"
                                on:click=move |_| toasts.update(|state| state.retirer(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
