//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome and shared widgets while reading
//! state from the Leptos context providers installed in `app`.

pub mod charts;
pub mod confirm_dialog;
pub mod layout;
pub mod rating_stars;
pub mod stat_card;
pub mod toast_host;
