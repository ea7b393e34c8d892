//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, fetches, session
//! updates) and delegates rendering details to `components`. Pure input
//! validation lives in `query` so every page applies identical rules.

pub mod home;
pub mod login;
pub mod precios;
pub(crate) mod query;
pub mod uof;
pub mod up;
