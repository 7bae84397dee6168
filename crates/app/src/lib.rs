//! # coverctl-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **platform port** adapters must implement:
//!   - `CoverPlatform` — service calls, capability queries, state and
//!     attribute reads against cover entities
//! - Define the **use cases**:
//!   - `CoverController` — capability-gated open/close/stop/toggle/tilt for
//!     one cover, with a soft-movement timer and a debounced tilt cache
//!   - `ControllerRegistry` — decode device events and route them to named
//!     controllers
//! - Provide **in-process infrastructure** (the movement timer) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `coverctl-domain` only (plus `tokio` for timers).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod movement;
pub mod ports;
pub mod services;
