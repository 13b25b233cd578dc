//! Networking modules for the identity service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the identity check; `types` defines the wire schema of the
//! profile it may return.

pub mod api;
pub mod types;
