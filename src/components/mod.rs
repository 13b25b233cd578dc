//! Reusable UI components.

pub mod auth_gate;
pub mod spinner;
