//! Domain model types for greedy dispatch.
//!
//! Routes as depot-to-depot stop sequences with accumulated costs, the
//! solution that collects them, and the fleet that decides how many
//! vehicles run and how many clients each one takes.

mod fleet;
mod route;
mod solution;

pub use fleet::Fleet;
pub use route::{Route, DEPOT};
pub use solution::Solution;
