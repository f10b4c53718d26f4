//! Promodesk
//!
//! Client-side state for a promotions dashboard: the canonical in-memory
//! promotion collection, the views derived from it, the create/edit form
//! state machine and the single-slot advisory shown after each operation.
//!
//! Everything in this crate is synchronous and free of I/O. The remote
//! gateway and the controller that drives these pieces live in
//! `promodesk-app`.

pub mod forms;
pub mod locale;
pub mod notifications;
pub mod prelude;
pub mod promotions;
pub mod store;
pub mod views;
