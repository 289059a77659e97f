//! Domain model and pure business logic for the salon payment console.
//!
//! This crate mirrors the REST backend's wire format (French field names,
//! lowercase snake_case status strings, DRF-style list envelopes) and owns
//! every piece of logic that does not need a browser: display formatting,
//! input validation, dashboard aggregation, and the checkout-session step
//! machine. The `salon-admin` UI crate renders what this crate computes.
//!
//! Everything here compiles and tests natively; no WASM or DOM types leak in.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`client`] | Client records, sex enum, search predicate |
//! | [`prestation`] | Service catalog entries, price range display and checks |
//! | [`paiement`] | Payments, means/status enums, mobile-money operator rule |
//! | [`session`] | Checkout sessions and the step 1-5 workflow derivation |
//! | [`feedback`] | Client ratings and their aggregate statistics |
//! | [`qr`] | Check-in QR codes and validity derivation |
//! | [`user`] | Back-office accounts, roles, and permissions |
//! | [`settings`] | Site settings singleton, theme and font-size enums |
//! | [`stats`] | Dashboard aggregation over fetched collections |
//! | [`list`] | Bare-array / paginated-envelope list decoding |
//! | [`money`] | FCFA amounts: tolerant decoding and grouped formatting |
//! | [`time`] | ISO-8601 string slicing and civil date arithmetic |
//! | [`color`] | Hex color parsing and normalization |
//! | [`validate`] | Form-level input checks shared across pages |

pub mod client;
pub mod color;
pub mod feedback;
pub mod list;
pub mod money;
pub mod paiement;
pub mod prestation;
pub mod qr;
pub mod session;
pub mod settings;
pub mod stats;
pub mod time;
pub mod user;
pub mod validate;
