//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! so the gate can be driven by fakes in tests.

pub mod browser;
pub mod cookie;
