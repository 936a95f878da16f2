//! # vrp-dispatch
//!
//! Greedy multi-vehicle dispatch over precomputed distance and duration
//! matrices. Clients are split among vehicles by a fixed quota and each
//! vehicle orders its visits with a nearest-neighbor rule, producing one
//! depot-to-depot round trip per vehicle.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Route, Solution, Fleet)
//! - [`distance`] — Cost matrices with bounds-checked lookups
//! - [`constructive`] — Nearest-neighbor route builder
//! - [`json`] — Input/output documents
//! - [`error`] — Fatal run errors

pub mod constructive;
pub mod distance;
pub mod error;
pub mod json;
pub mod models;
