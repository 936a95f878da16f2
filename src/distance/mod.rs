//! Distance and travel time matrices.
//!
//! Matrices arrive precomputed and are not trusted to be complete: every
//! lookup is bounds-checked and reports a [`MatrixError`] for holes.

mod matrix;
mod travel;

pub use matrix::{CostMatrix, MatrixError};
pub use travel::{Leg, TravelMatrices};
