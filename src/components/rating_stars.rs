//! Five-star rating display, optionally clickable.

use leptos::prelude::*;

fn classe_etoile(position: u8, note: u8) -> &'static str {
    if position <= note {
        "etoiles__etoile etoiles__etoile--pleine"
    } else {
        "etoiles__etoile"
    }
}

/// Row of five stars filled up to `note`. With `on_change` set the stars
/// become buttons and report the clicked position.
#[component]
pub fn RatingStars(note: u8, #[prop(optional)] on_change: Option<Callback<u8>>) -> impl IntoView {
    view! {
        <span class="etoiles">
            {(1..=5u8)
                .map(|position| match on_change {
                    Some(on_change) => view! {
                        <button
                            class=classe_etoile(position, note)
                            type="button"
                            on:click=move |_| on_change.run(position)
                        >
                            "★"
                        </button>
                    }
                        .into_any(),
                    None => view! {
                        <span class=classe_etoile(position, note)>"★"</span>
                    }
                        .into_any(),
                })
                .collect::<Vec<_>>()}
        </span>
    }
}
