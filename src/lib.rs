//! # salon-admin
//!
//! Leptos + WASM frontend for a salon payment management system: an
//! admin console (clients, prestations, paiements, QR codes, accounts,
//! settings, feedback) plus the public QR-driven checkout workflow.
//!
//! This crate contains pages, components, application state, and the
//! typed HTTP bindings to the backend API. Domain types and validation
//! live in the `salon-core` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
