//! Networking modules for the market API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the configured client and its cross-cutting request/response
//! handling, `api` wraps individual endpoints, and `types` defines the
//! response schema shared with the backend.

pub mod api;
pub mod http;
pub mod types;
