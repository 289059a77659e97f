//! Admin console shell: sidebar navigation, header, page outlet.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use salon_core::settings::Theme;
use salon_core::user::Utilisateur;

use crate::state::auth::AuthState;
use crate::state::site::SiteState;
use crate::util::auth::install_redirect_non_connecte;
use crate::util::{storage, theme};

/// One sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub chemin: &'static str,
    pub libelle: &'static str,
    pub icone: &'static str,
}

/// Sidebar entries for a role. Vendeurs get the operational pages;
/// admins additionally manage accounts and settings.
pub fn nav_items(est_admin: bool) -> Vec<NavItem> {
    let mut items = vec![
        NavItem {
            chemin: "/dashboard",
            libelle: "Tableau de bord",
            icone: "📊",
        },
        NavItem {
            chemin: "/paiements",
            libelle: "Paiements",
            icone: "💳",
        },
        NavItem {
            chemin: "/clients",
            libelle: "Clients",
            icone: "👥",
        },
        NavItem {
            chemin: "/prestations",
            libelle: "Prestations",
            icone: "💆",
        },
        NavItem {
            chemin: "/avis",
            libelle: "Avis",
            icone: "⭐",
        },
        NavItem {
            chemin: "/qr-codes",
            libelle: "QR Codes",
            icone: "🔲",
        },
    ];
    if est_admin {
        items.push(NavItem {
            chemin: "/users",
            libelle: "Utilisateurs",
            icone: "👤",
        });
        items.push(NavItem {
            chemin: "/settings",
            libelle: "Paramètres",
            icone: "⚙️",
        });
    }
    items
}

/// Header title for the current path.
pub fn titre_pour(chemin: &str) -> &'static str {
    nav_items(true)
        .into_iter()
        .find(|item| item.chemin == chemin)
        .map_or("Tableau de bord", |item| item.libelle)
}

/// Console chrome around the protected pages. Redirects to the login
/// page once auth has settled without a session.
#[component]
pub fn AdminShell() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let site = expect_context::<RwSignal<SiteState>>();

    install_redirect_non_connecte(auth, use_navigate());

    let chemin = use_location().pathname;

    // Flip to the opposite of whatever is showing and remember it.
    let basculer_theme = move |_: leptos::ev::MouseEvent| {
        let choix = if site.get_untracked().en_sombre() {
            Theme::Clair
        } else {
            Theme::Sombre
        };
        storage::enregistrer_preference_theme(choix);
        site.update(|etat| etat.preference = Some(choix));
        let etat = site.get_untracked();
        theme::appliquer(&etat.settings, etat.en_sombre());
    };

    // Revoke the token server-side, then leave through a full reload so
    // every per-page signal starts clean.
    let deconnexion = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let token = auth.get_untracked().token;
            leptos::task::spawn_local(async move {
                if let Some(token) = token {
                    let _ = crate::net::users::logout(&token).await;
                }
                crate::util::storage::effacer_session();
                auth.update(AuthState::deconnecter);
                if let Some(fenetre) = web_sys::window() {
                    let _ = fenetre.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <Show
            when=move || !auth.get().loading
            fallback=|| view! { <div class="chargement-plein-ecran">"Chargement..."</div> }
        >
            <div class="admin-shell">
                <aside class="admin-shell__sidebar">
                    <div class="admin-shell__marque">
                        <span class="admin-shell__titre-site">
                            {move || site.get().settings.site_title.clone()}
                        </span>
                        <span class="admin-shell__sous-titre">
                            {move || site.get().settings.site_subtitle.clone()}
                        </span>
                    </div>
                    <nav class="admin-shell__nav">
                        {move || {
                            let actif = chemin.get();
                            nav_items(auth.get().est_admin())
                                .into_iter()
                                .map(|item| {
                                    let classe = if actif == item.chemin {
                                        "nav-item nav-item--actif"
                                    } else {
                                        "nav-item"
                                    };
                                    view! {
                                        <a class=classe href=item.chemin>
                                            <span class="nav-item__icone">{item.icone}</span>
                                            <span class="nav-item__libelle">{item.libelle}</span>
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </nav>
                </aside>
                <div class="admin-shell__contenu">
                    <header class="admin-shell__entete">
                        <h1 class="admin-shell__titre-page">
                            {move || titre_pour(&chemin.get())}
                        </h1>
                        <div class="admin-shell__utilisateur">
                            <span class="admin-shell__nom">
                                {move || {
                                    auth.get()
                                        .user
                                        .as_ref()
                                        .map(Utilisateur::nom_affichage)
                                        .unwrap_or_default()
                                }}
                            </span>
                            <span class="admin-shell__role">
                                {move || auth.get().user.as_ref().map_or("", |u| u.role.label())}
                            </span>
                            <button
                                class="btn btn--discret"
                                title="Basculer le thème"
                                on:click=basculer_theme
                            >
                                {move || if site.get().en_sombre() { "☀️" } else { "🌙" }}
                            </button>
                            <button
                                class="btn btn--discret"
                                title="Se déconnecter"
                                on:click=deconnexion
                            >
                                "Déconnexion"
                            </button>
                        </div>
                    </header>
                    <main class="admin-shell__principal">
                        <Outlet/>
                    </main>
                </div>
            </div>
        </Show>
    }
}
