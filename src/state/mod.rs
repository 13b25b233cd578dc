//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data with pure transitions so it can be tested without a
//! browser; components wrap it in `RwSignal`.

pub mod auth;
