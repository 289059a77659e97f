//! Modal confirmation dialog for destructive actions.

use leptos::prelude::*;

/// Backdrop-covering dialog with cancel and confirm buttons. Clicking the
/// backdrop cancels; clicks inside the card stay inside.
#[component]
pub fn ConfirmDialog(
    titre: String,
    message: String,
    #[prop(default = String::from("Confirmer"))] libelle_confirmer: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{titre}</h2>
                <p class="dialog__message">{message}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Annuler"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        {libelle_confirmer}
                    </button>
                </div>
            </div>
        </div>
    }
}
