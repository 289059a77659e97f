//! Auth-session state for the signed-in back-office user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and role-aware components read this to coordinate login
//! redirects and admin-only rendering. The token doubles as the
//! `Authorization` header value source for every admin call.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use salon_core::user::{Permission, Utilisateur};

/// Authentication state: the session token, the account behind it, and
/// whether the startup validation is still running.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<Utilisateur>,
    pub loading: bool,
}

impl AuthState {
    /// State restored from storage before the profile check confirms it.
    #[must_use]
    pub fn restauree(token: Option<String>, user: Option<Utilisateur>) -> Self {
        let loading = token.is_some();
        Self { token, user, loading }
    }

    #[must_use]
    pub fn est_connecte(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    #[must_use]
    pub fn est_admin(&self) -> bool {
        self.user.as_ref().is_some_and(Utilisateur::est_admin)
    }

    #[must_use]
    pub fn a_permission(&self, permission: Permission) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.role.a_permission(permission))
    }

    /// Install a fresh login.
    pub fn connecter(&mut self, token: String, user: Utilisateur) {
        self.token = Some(token);
        self.user = Some(user);
        self.loading = false;
    }

    /// Drop the session, locally only.
    pub fn deconnecter(&mut self) {
        self.token = None;
        self.user = None;
        self.loading = false;
    }
}
