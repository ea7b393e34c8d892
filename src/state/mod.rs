//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! All mutable state lives in `RwSignal` contexts provided by `App`; no
//! module-level singletons, so tests can construct state directly.

pub mod session;
