//! Typed HTTP bindings for the salon backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the transport plumbing; the other modules map one backend
//! resource each onto the wire types from `salon_core`.

// Native builds stub out the request bodies, leaving no await points.
#![allow(clippy::unused_async)]

pub mod api;
pub mod clients;
pub mod feedback;
pub mod paiements;
pub mod prestations;
pub mod qrcodes;
pub mod sessions;
pub mod settings;
pub mod users;
