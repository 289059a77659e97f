//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, submits, dialogs)
//! and delegates shared rendering details to `components`. The admin pages
//! render inside the `AdminShell` outlet; `login`, `session`, and
//! `auth_directe` stand alone.

pub mod auth_directe;
pub mod avis;
pub mod clients;
pub mod dashboard;
pub mod login;
pub mod paiements;
pub mod prestations;
pub mod qr_codes;
pub mod session;
pub mod settings;
pub mod users;
