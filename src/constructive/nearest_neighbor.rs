//! Quota-split nearest-neighbor route construction.
//!
//! Vehicles are filled one after another: each starts at the depot and keeps
//! moving to the closest client nobody has visited yet, until it has taken
//! its quota of clients. The last vehicle ignores the quota and sweeps up
//! whatever is left.
//!
//! # Complexity
//!
//! O(v · n²) matrix lookups, v = vehicles, n = clients.
//!
//! # Degradation
//!
//! A missing matrix entry never aborts a run. The edge is logged, cannot be
//! chosen as nearest during that scan, and contributes zero cost when it is
//! part of a route.

use tracing::{debug, info, warn};

use crate::distance::{Leg, TravelMatrices};
use crate::models::{Fleet, Route, Solution, DEPOT};

/// Builds one round trip per vehicle with a greedy nearest-neighbor rule.
///
/// The set of unvisited clients is owned by a single [`build`](Self::build)
/// call and shared across all vehicles of that run.
///
/// # Examples
///
/// ```
/// use vrp_dispatch::constructive::RouteBuilder;
/// use vrp_dispatch::distance::{CostMatrix, TravelMatrices};
/// use vrp_dispatch::models::Fleet;
///
/// let d = CostMatrix::from_values(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 1.0],
///     vec![2.0, 1.0, 0.0],
/// ]);
/// let tm = TravelMatrices::new(d.clone(), d);
/// let solution = RouteBuilder::new(&tm, Fleet::new(1)).build();
/// assert_eq!(solution.routes()[0].stops(), &[0, 1, 2, 0]);
/// assert_eq!(solution.routes()[0].distance(), 4.0);
/// ```
pub struct RouteBuilder<'a> {
    matrices: &'a TravelMatrices,
    fleet: Fleet,
}

impl<'a> RouteBuilder<'a> {
    /// Creates a builder over the given matrices and fleet.
    pub fn new(matrices: &'a TravelMatrices, fleet: Fleet) -> Self {
        Self { matrices, fleet }
    }

    /// Runs the heuristic and returns the resulting routes.
    ///
    /// Vehicles whose turn comes after every client has been visited emit
    /// no route.
    pub fn build(&self) -> Solution {
        let n = self.matrices.num_locations();
        let mut solution = Solution::new();
        if n == 0 {
            return solution;
        }

        for warning in self.matrices.shape_warnings() {
            warn!("{warning}");
        }

        let mut visited = vec![false; n];
        visited[DEPOT] = true;
        let mut remaining = self.matrices.num_clients();

        let quota = self.fleet.quota(remaining);
        debug!(
            clients = remaining,
            requested = self.fleet.requested(),
            vehicles = self.fleet.effective_vehicles(),
            quota,
            "start nearest-neighbor construction"
        );

        for vehicle_id in 0..self.fleet.effective_vehicles() {
            if remaining == 0 {
                break;
            }

            let is_last = self.fleet.is_last(vehicle_id);
            let mut route = Route::new(vehicle_id);
            let mut current = DEPOT;
            let mut served = 0;

            while remaining > 0 && (served < quota || is_last) {
                let Some(next) = self.nearest_unvisited(current, &visited) else {
                    debug!(vehicle_id, current, "no reachable client left");
                    break;
                };

                route.push_stop(next);
                self.accumulate(&mut route, current, next);
                current = next;
                visited[next] = true;
                remaining -= 1;
                served += 1;
            }

            if route.last_stop() != DEPOT {
                self.accumulate(&mut route, current, DEPOT);
                route.push_stop(DEPOT);
            }

            if route.stops().len() == 1 {
                route.push_stop(DEPOT);
            }

            debug!(
                vehicle = %route.vehicle_label(),
                clients = route.len(),
                distance = route.distance(),
                duration = route.duration(),
                "route built"
            );
            solution.add_route(route);
        }

        for (client, _) in visited.iter().enumerate().filter(|&(_, &v)| !v) {
            solution.add_unassigned(client);
        }

        info!(
            routes = solution.num_routes(),
            served = solution.num_served(),
            unassigned = solution.num_unassigned(),
            distance = solution.total_distance(),
            duration = solution.total_duration(),
            "dispatch finished"
        );

        solution
    }

    /// Scans unvisited clients in ascending index order for the closest one.
    ///
    /// Only a strictly smaller distance replaces the current best, so ties
    /// go to the lowest index and infinite or NaN distances never win.
    fn nearest_unvisited(&self, from: usize, visited: &[bool]) -> Option<usize> {
        let mut best: Option<usize> = None;
        let mut best_distance = f64::INFINITY;

        for (client, _) in visited.iter().enumerate().filter(|&(_, &v)| !v) {
            match self.matrices.distance(from, client) {
                Ok(d) => {
                    if d < best_distance {
                        best_distance = d;
                        best = Some(client);
                    }
                }
                Err(err) => warn!(%err, "skipping candidate {client}"),
            }
        }

        best
    }

    /// Adds the cost of `from -> to` to `route`; missing halves add nothing.
    fn accumulate(&self, route: &mut Route, from: usize, to: usize) {
        let Leg { distance, duration } = self.matrices.leg(from, to);
        match distance {
            Ok(d) => route.add_distance(d),
            Err(err) => warn!(%err, vehicle = %route.vehicle_label(), "distance not added"),
        }
        match duration {
            Ok(t) => route.add_duration(t),
            Err(err) => warn!(%err, vehicle = %route.vehicle_label(), "duration not added"),
        }
    }
}

/// Constructs routes for `fleet` using the nearest-neighbor heuristic.
///
/// Shorthand for [`RouteBuilder::new`] followed by [`RouteBuilder::build`].
pub fn nearest_neighbor(matrices: &TravelMatrices, fleet: Fleet) -> Solution {
    RouteBuilder::new(matrices, fleet).build()
}
