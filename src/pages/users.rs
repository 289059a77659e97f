//! Back-office accounts: admin-only CRUD plus password self-service.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use salon_core::time::format_date;
use salon_core::user::{
    ChangePasswordPayload, Role, Utilisateur, UtilisateurCreatePayload, UtilisateurUpdatePayload,
};
use salon_core::validate::{validate_email, ValidationError};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::stat_card::StatCard;
#[cfg(feature = "csr")]
use crate::components::toast_host::notifier;
use crate::state::auth::AuthState;
#[cfg(feature = "csr")]
use crate::state::toasts::ToastKind;
use crate::state::toasts::ToastState;
#[cfg(feature = "csr")]
use crate::util::auth::signaler_echec;
#[cfg(feature = "csr")]
use crate::util::storage::effacer_session;

/// Raw form fields shared by the create and edit dialogs. The password
/// pair only matters on create.
#[derive(Clone, Debug)]
struct FormulaireCompte {
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    role: Role,
    telephone: String,
    password: String,
    password_confirm: String,
    actif: bool,
}

impl Default for FormulaireCompte {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            role: Role::Vendeur,
            telephone: String::new(),
            password: String::new(),
            password_confirm: String::new(),
            actif: true,
        }
    }
}

fn role_depuis(valeur: &str) -> Role {
    if valeur == "admin" { Role::Admin } else { Role::Vendeur }
}

fn telephone_optionnel(valeur: &str) -> Option<String> {
    let valeur = valeur.trim();
    if valeur.is_empty() {
        None
    } else {
        Some(valeur.to_owned())
    }
}

fn payload_creation(form: &FormulaireCompte) -> Result<UtilisateurCreatePayload, ValidationError> {
    validate_email(&form.email)?;
    let payload = UtilisateurCreatePayload {
        username: form.username.trim().to_owned(),
        email: form.email.trim().to_owned(),
        password: form.password.clone(),
        password_confirm: form.password_confirm.clone(),
        first_name: form.first_name.trim().to_owned(),
        last_name: form.last_name.trim().to_owned(),
        role: form.role,
        telephone: telephone_optionnel(&form.telephone),
    };
    payload.valider()?;
    Ok(payload)
}

fn payload_modification(
    form: &FormulaireCompte,
) -> Result<UtilisateurUpdatePayload, ValidationError> {
    validate_email(&form.email)?;
    Ok(UtilisateurUpdatePayload {
        email: form.email.trim().to_owned(),
        first_name: form.first_name.trim().to_owned(),
        last_name: form.last_name.trim().to_owned(),
        role: form.role,
        telephone: telephone_optionnel(&form.telephone),
        actif: form.actif,
    })
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let comptes = RwSignal::new(Vec::<Utilisateur>::new());
    let chargement = RwSignal::new(true);

    // None = closed, Some(None) = create, Some(Some(id)) = edit.
    let edite = RwSignal::new(None::<Option<u64>>);
    let formulaire = RwSignal::new(FormulaireCompte::default());
    let suppression = RwSignal::new(None::<u64>);
    let mot_de_passe_ouvert = RwSignal::new(false);

    let recharger = Callback::new(move |()| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::users::lister(&token).await {
                    Ok(liste) => comptes.set(liste),
                    Err(err) => signaler_echec(auth, toasts, &err),
                }
                chargement.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (comptes, chargement, toasts);
        }
    });

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
        recharger.run(());
    });

    let ouvrir_creation = move |_| {
        formulaire.set(FormulaireCompte::default());
        edite.set(Some(None));
    };

    let ouvrir_edition = Callback::new(move |compte: Utilisateur| {
        formulaire.set(FormulaireCompte {
            username: compte.username,
            email: compte.email,
            first_name: compte.first_name,
            last_name: compte.last_name,
            role: compte.role,
            telephone: compte.telephone.unwrap_or_default(),
            password: String::new(),
            password_confirm: String::new(),
            actif: compte.actif,
        });
        edite.set(Some(Some(compte.id)));
    });

    let enregistrer = Callback::new(move |()| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            let cible = edite.get_untracked().flatten();
            let form = formulaire.get_untracked();
            leptos::task::spawn_local(async move {
                let resultat = match cible {
                    Some(id) => match payload_modification(&form) {
                        Ok(payload) => {
                            crate::net::users::modifier(&token, id, &payload).await.map(|_| ())
                        }
                        Err(err) => {
                            notifier(toasts, ToastKind::Erreur, err.to_string());
                            return;
                        }
                    },
                    None => match payload_creation(&form) {
                        Ok(payload) => {
                            crate::net::users::creer(&token, &payload).await.map(|_| ())
                        }
                        Err(err) => {
                            notifier(toasts, ToastKind::Erreur, err.to_string());
                            return;
                        }
                    },
                };
                match resultat {
                    Ok(()) => {
                        let message = if cible.is_some() {
                            "Compte modifié"
                        } else {
                            "Compte créé"
                        };
                        notifier(toasts, ToastKind::Succes, message);
                        edite.set(None);
                        recharger.run(());
                    }
                    Err(err) => signaler_echec(auth, toasts, &err),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (edite, formulaire);
        }
    });

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
                match crate::net::users::supprimer(&token, id).await {
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
        <div class="users-page">
            <Show
                when=move || auth.get().est_admin()
                fallback=|| {
                    view! {
                        <div class="panneau-refus">
                            <h2>"Accès refusé"</h2>
                            <p>"La gestion des comptes est réservée aux administrateurs."</p>
                        </div>
                    }
                }
            >
                <header class="page-entete">
                    <button class="btn btn--primary" on:click=ouvrir_creation>
                        "+ Nouveau compte"
                    </button>
                    <button class="btn" on:click=move |_| mot_de_passe_ouvert.set(true)>
                        "Changer mon mot de passe"
                    </button>
                </header>
                <div class="stat-grille">
                    {move || {
                        let liste = comptes.get();
                        let admins = liste.iter().filter(|c| c.role == Role::Admin).count();
                        let vendeurs = liste.iter().filter(|c| c.role == Role::Vendeur).count();
                        view! {
                            <StatCard
                                libelle="Comptes".to_owned()
                                valeur=liste.len().to_string()
                                icone="👥".to_owned()
                            />
                            <StatCard
                                libelle="Administrateurs".to_owned()
                                valeur=admins.to_string()
                                icone="🗝️".to_owned()
                            />
                            <StatCard
                                libelle="Vendeurs".to_owned()
                                valeur=vendeurs.to_string()
                                icone="🛍️".to_owned()
                            />
                        }
                    }}
                </div>
                <Show
                    when=move || !chargement.get()
                    fallback=|| {
                        view! { <p class="page-chargement">"Chargement des comptes..."</p> }
                    }
                >
                    <table class="tableau">
                        <thead>
                            <tr>
                                <th>"Utilisateur"</th>
                                <th>"Email"</th>
                                <th>"Rôle"</th>
                                <th>"Statut"</th>
                                <th>"Créé le"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let soi = auth.get().user.map(|user| user.id);
                                comptes
                                    .get()
                                    .into_iter()
                                    .map(|compte| {
                                        let pour_edition = compte.clone();
                                        let id = compte.id;
                                        let est_soi = soi == Some(id);
                                        let badge = if compte.actif {
                                            "badge badge--actif"
                                        } else {
                                            "badge badge--inactif"
                                        };
                                        view! {
                                            <tr class="tableau__ligne">
                                                <td>
                                                    {compte.nom_affichage()}
                                                    <span class="tableau__sous-texte">
                                                        {format!("@{}", compte.username)}
                                                    </span>
                                                </td>
                                                <td>{compte.email.clone()}</td>
                                                <td>{compte.role.label()}</td>
                                                <td>
                                                    <span class=badge>
                                                        {if compte.actif { "Actif" } else { "Inactif" }}
                                                    </span>
                                                </td>
                                                <td>{format_date(&compte.date_creation)}</td>
                                                <td class="tableau__actions">
                                                    <button
                                                        class="btn btn--petit"
                                                        on:click=move |_| {
                                                            ouvrir_edition.run(pour_edition.clone())
                                                        }
                                                    >
                                                        "Modifier"
                                                    </button>
                                                    <Show when=move || !est_soi>
                                                        <button
                                                            class="btn btn--petit btn--danger"
                                                            on:click=move |_| suppression.set(Some(id))
                                                        >
                                                            "Supprimer"
                                                        </button>
                                                    </Show>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
                <Show when=move || edite.get().is_some()>
                    <CompteFormDialog
                        formulaire=formulaire
                        edition=edite.get().is_some_and(|cible| cible.is_some())
                        on_cancel=Callback::new(move |()| edite.set(None))
                        on_submit=enregistrer
                    />
                </Show>
                <Show when=move || suppression.get().is_some()>
                    <ConfirmDialog
                        titre="Supprimer le compte".to_owned()
                        message="Le compte sera supprimé et ses accès révoqués.".to_owned()
                        libelle_confirmer="Supprimer".to_owned()
                        on_confirm=confirmer_suppression
                        on_cancel=Callback::new(move |()| suppression.set(None))
                    />
                </Show>
                <Show when=move || mot_de_passe_ouvert.get()>
                    <MotDePasseDialog on_close=Callback::new(move |()| {
                        mot_de_passe_ouvert.set(false)
                    })/>
                </Show>
            </Show>
        </div>
    }
}

/// Create/edit form. On create the password pair is checked with the
/// same rules the backend applies; on edit it is absent.
#[component]
fn CompteFormDialog(
    formulaire: RwSignal<FormulaireCompte>,
    edition: bool,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let erreur = RwSignal::new(String::new());

    let valider = Callback::new(move |()| {
        let form = formulaire.get();
        let controle = if edition {
            payload_modification(&form).map(|_| ())
        } else {
            payload_creation(&form).map(|_| ())
        };
        match controle {
            Ok(()) => {
                erreur.set(String::new());
                on_submit.run(());
            }
            Err(err) => erreur.set(err.to_string()),
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{if edition { "Modifier le compte" } else { "Nouveau compte" }}</h2>
                <Show when=move || !edition>
                    <label class="dialog__label">
                        "Nom d'utilisateur"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || formulaire.get().username
                            on:input=move |ev| {
                                formulaire.update(|f| f.username = event_target_value(&ev));
                            }
                        />
                    </label>
                </Show>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || formulaire.get().email
                        on:input=move |ev| {
                            formulaire.update(|f| f.email = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Prénom"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || formulaire.get().first_name
                        on:input=move |ev| {
                            formulaire.update(|f| f.first_name = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Nom"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || formulaire.get().last_name
                        on:input=move |ev| {
                            formulaire.update(|f| f.last_name = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Rôle"
                    <select
                        class="dialog__input"
                        prop:value=move || formulaire.get().role.as_str().to_owned()
                        on:change=move |ev| {
                            formulaire.update(|f| f.role = role_depuis(&event_target_value(&ev)));
                        }
                    >
                        {Role::ALL
                            .into_iter()
                            .map(|role| {
                                view! { <option value=role.as_str()>{role.label()}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Téléphone (optionnel)"
                    <input
                        class="dialog__input"
                        type="tel"
                        prop:value=move || formulaire.get().telephone
                        on:input=move |ev| {
                            formulaire.update(|f| f.telephone = event_target_value(&ev));
                        }
                    />
                </label>
                <Show when=move || !edition>
                    <label class="dialog__label">
                        "Mot de passe"
                        <input
                            class="dialog__input"
                            type="password"
                            prop:value=move || formulaire.get().password
                            on:input=move |ev| {
                                formulaire.update(|f| f.password = event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Confirmer le mot de passe"
                        <input
                            class="dialog__input"
                            type="password"
                            prop:value=move || formulaire.get().password_confirm
                            on:input=move |ev| {
                                formulaire.update(|f| f.password_confirm = event_target_value(&ev));
                            }
                        />
                    </label>
                </Show>
                <Show when=move || edition>
                    <label class="dialog__label dialog__label--case">
                        <input
                            type="checkbox"
                            prop:checked=move || formulaire.get().actif
                            on:change=move |ev| {
                                formulaire.update(|f| f.actif = event_target_checked(&ev));
                            }
                        />
                        "Compte actif"
                    </label>
                </Show>
                <Show when=move || !erreur.get().is_empty()>
                    <p class="dialog__erreur">{move || erreur.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Annuler"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| valider.run(())>
                        {if edition { "Enregistrer" } else { "Créer" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Password change for the signed-in account. A success revokes the
/// token server-side, so the session is dropped and the login page takes
/// over.
#[component]
fn MotDePasseDialog(on_close: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    #[cfg(not(feature = "csr"))]
    let _ = (auth, toasts);

    let actuel = RwSignal::new(String::new());
    let nouveau = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let erreur = RwSignal::new(String::new());

    let valider = Callback::new(move |()| {
        let payload = ChangePasswordPayload {
            current_password: actuel.get_untracked(),
            new_password: nouveau.get_untracked(),
            new_password_confirm: confirmation.get_untracked(),
        };
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
            leptos::task::spawn_local(async move {
                match crate::net::users::changer_mot_de_passe(&token, &payload).await {
                    Ok(reponse) => {
                        notifier(toasts, ToastKind::Succes, reponse.message);
                        effacer_session();
                        auth.update(AuthState::deconnecter);
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

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Changer mon mot de passe"</h2>
                <p class="dialog__message">
                    "Une reconnexion sera nécessaire après le changement."
                </p>
                <label class="dialog__label">
                    "Mot de passe actuel"
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || actuel.get()
                        on:input=move |ev| actuel.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Nouveau mot de passe"
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || nouveau.get()
                        on:input=move |ev| nouveau.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Confirmer le nouveau mot de passe"
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || confirmation.get()
                        on:input=move |ev| confirmation.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || !erreur.get().is_empty()>
                    <p class="dialog__erreur">{move || erreur.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Annuler"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| valider.run(())>
                        "Changer"
                    </button>
                </div>
            </div>
        </div>
    }
}
