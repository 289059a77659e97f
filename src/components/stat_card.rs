//! Metric card used on the dashboard grid and the page header strips.

use leptos::prelude::*;

/// One headline figure with its label and an optional caption underneath.
#[component]
pub fn StatCard(
    libelle: String,
    valeur: String,
    #[prop(optional)] detail: Option<String>,
    #[prop(default = String::from("📊"))] icone: String,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__icone">{icone}</span>
            <div class="stat-card__corps">
                <span class="stat-card__valeur">{valeur}</span>
                <span class="stat-card__libelle">{libelle}</span>
                {detail.map(|texte| view! { <span class="stat-card__detail">{texte}</span> })}
            </div>
        </div>
    }
}
