//! Browser glue helpers shared across pages and components.

pub mod auth;
pub mod clock;
pub mod storage;
pub mod theme;
