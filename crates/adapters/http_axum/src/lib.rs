//! # coverctl-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Accept **device events** (remote/switch payloads) for a named
//!   controller and run the cover action they are bound to
//! - Invoke cover actions directly (`/api/controllers/{name}/actions/{action}`)
//! - Report controller status as JSON
//!
//! ## Dependency rule
//! Depends on `coverctl-app` (for the registry and port traits) and
//! `coverctl-domain` (for request/response types). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
