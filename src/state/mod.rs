//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each domain keeps a small plain model provided to the tree as an
//! `RwSignal` context, so components depend on focused state instead of
//! one global store.

pub mod auth;
pub mod site;
pub mod toasts;
