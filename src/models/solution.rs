//! Solution type.

use super::Route;

/// The routes built for one dispatch run.
///
/// Clients left over when the builder stops are kept in `unassigned`
/// rather than silently disappearing.
///
/// # Examples
///
/// ```
/// use vrp_dispatch::models::{Route, Solution};
///
/// let mut sol = Solution::new();
/// sol.add_route(Route::new(0));
/// sol.add_unassigned(4);
/// assert_eq!(sol.num_routes(), 1);
/// assert_eq!(sol.unassigned(), &[4]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solution {
    routes: Vec<Route>,
    unassigned: Vec<usize>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a route to this solution.
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Marks a client as unassigned.
    pub fn add_unassigned(&mut self, client: usize) {
        self.unassigned.push(client);
    }

    /// Routes in vehicle order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes emitted.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Clients no route visits, in ascending index order.
    pub fn unassigned(&self) -> &[usize] {
        &self.unassigned
    }

    /// Number of unassigned clients.
    pub fn num_unassigned(&self) -> usize {
        self.unassigned.len()
    }

    /// Total number of clients served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Total distance across all routes.
    pub fn total_distance(&self) -> f64 {
        self.routes.iter().map(Route::distance).sum()
    }

    /// Total duration across all routes.
    pub fn total_duration(&self) -> f64 {
        self.routes.iter().map(Route::duration).sum()
    }
}
