//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages resolve route-scoped inputs and delegate rendering to `components`.

pub mod home;
