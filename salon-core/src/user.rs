//! Back-office accounts, roles, and the permission map the UI gates on.
//!
//! Unlike the other entities, accounts use the auth system's integer ids.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::{Deserialize, Serialize};

use crate::validate::{validate_password_pair, ValidationError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Vendeur,
}

/// UI capabilities granted per role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Permission {
    ViewDashboard,
    ManageUsers,
    ManageClients,
    ManagePrestations,
    ManagePaiements,
    ManageSessions,
    ViewReports,
    ManageSystem,
}

impl Role {
    pub const ALL: [Self; 2] = [Self::Admin, Self::Vendeur];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrateur",
            Self::Vendeur => "Vendeur",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Vendeur => "vendeur",
        }
    }

    /// Permissions of this role. Vendeurs run the day-to-day operations;
    /// only admins touch accounts and system settings.
    #[must_use]
    pub fn permissions(self) -> &'static [Permission] {
        match self {
            Self::Admin => &[
                Permission::ViewDashboard,
                Permission::ManageUsers,
                Permission::ManageClients,
                Permission::ManagePrestations,
                Permission::ManagePaiements,
                Permission::ManageSessions,
                Permission::ViewReports,
                Permission::ManageSystem,
            ],
            Self::Vendeur => &[
                Permission::ViewDashboard,
                Permission::ManageClients,
                Permission::ManagePrestations,
                Permission::ManagePaiements,
                Permission::ManageSessions,
                Permission::ViewReports,
            ],
        }
    }

    #[must_use]
    pub fn a_permission(self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}

/// One back-office account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Utilisateur {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default = "default_actif")]
    pub actif: bool,
    #[serde(default)]
    pub date_creation: String,
    #[serde(default)]
    pub date_modification: String,
}

fn default_actif() -> bool {
    true
}

impl Utilisateur {
    /// Display name: `first_name last_name` when set, else the username.
    #[must_use]
    pub fn nom_affichage(&self) -> String {
        let complet = format!("{} {}", self.first_name, self.last_name);
        let complet = complet.trim();
        if complet.is_empty() {
            self.username.clone()
        } else {
            complet.to_string()
        }
    }

    #[must_use]
    pub fn est_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Body for creating an account; the password is confirmed client-side and
/// again by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UtilisateurCreatePayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
}

impl UtilisateurCreatePayload {
    /// Form-side checks before submit.
    ///
    /// # Errors
    ///
    /// Returns a missing-username error, then the password pair rules.
    pub fn valider(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::ChampRequis("Le nom d'utilisateur"));
        }
        validate_password_pair(&self.password, &self.password_confirm)
    }
}

/// Body for updating an account; the password never travels this path.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UtilisateurUpdatePayload {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    pub actif: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

/// Answer of `/api/utilisateurs/login/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginReponse {
    pub token: String,
    pub user: Utilisateur,
    #[serde(default)]
    pub message: String,
}

/// Body of `/api/utilisateurs/change_password/`. A success invalidates the
/// token, so the caller must log in again.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ChangePasswordPayload {
    pub current_password: String,
    pub new_password: String,
    pub new_password_confirm: String,
}

impl ChangePasswordPayload {
    /// Form-side checks before submit.
    ///
    /// # Errors
    ///
    /// Returns a missing-current-password error, then the password pair
    /// rules on the new one.
    pub fn valider(&self) -> Result<(), ValidationError> {
        if self.current_password.is_empty() {
            return Err(ValidationError::ChampRequis("Le mot de passe actuel"));
        }
        validate_password_pair(&self.new_password, &self.new_password_confirm)
    }
}
