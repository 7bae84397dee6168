//! # coverctl-domain
//!
//! Pure domain model for the coverctl cover controller.
//!
//! ## Responsibilities
//! - Error conventions shared by every layer
//! - Define the **cover vocabulary**: actions, capability flags, reported
//!   states, service calls, per-controller configuration
//! - Define **device events** and the **decoders** that classify vendor
//!   remote payloads into canonical action names
//! - Define **action mappings** from decoded device actions to cover actions
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod cover;
pub mod device;
