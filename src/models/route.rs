//! Route type.

/// Depot location index. Every route starts and ends here.
pub const DEPOT: usize = 0;

/// A round trip from the depot assigned to a single vehicle.
///
/// Unlike a bare visit list, `stops` holds the full location sequence
/// including the depot at both ends, exactly as it is reported.
///
/// # Examples
///
/// ```
/// use vrp_dispatch::models::Route;
///
/// let mut route = Route::new(0);
/// route.push_stop(3);
/// route.push_stop(0);
/// assert_eq!(route.stops(), &[0, 3, 0]);
/// assert_eq!(route.vehicle_label(), "v1");
/// assert_eq!(route.client_ids(), vec![3]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    vehicle_id: usize,
    stops: Vec<usize>,
    distance: f64,
    duration: f64,
}

impl Route {
    /// Creates a route for the given vehicle, positioned at the depot.
    pub fn new(vehicle_id: usize) -> Self {
        Self {
            vehicle_id,
            stops: vec![DEPOT],
            distance: 0.0,
            duration: 0.0,
        }
    }

    /// Appends a location to the stop sequence.
    pub fn push_stop(&mut self, location: usize) {
        self.stops.push(location);
    }

    /// Adds to the accumulated distance.
    pub fn add_distance(&mut self, d: f64) {
        self.distance += d;
    }

    /// Adds to the accumulated duration.
    pub fn add_duration(&mut self, d: f64) {
        self.duration += d;
    }

    /// Zero-based index of the vehicle driving this route.
    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// External vehicle identifier: `"v"` followed by the one-based index.
    pub fn vehicle_label(&self) -> String {
        format!("v{}", self.vehicle_id + 1)
    }

    /// Full stop sequence, depot entries included.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Last location in the stop sequence.
    pub fn last_stop(&self) -> usize {
        self.stops.last().copied().unwrap_or(DEPOT)
    }

    /// Client locations in visit order (depot entries removed).
    pub fn client_ids(&self) -> Vec<usize> {
        self.stops.iter().copied().filter(|&s| s != DEPOT).collect()
    }

    /// Number of client visits.
    pub fn len(&self) -> usize {
        self.stops.iter().filter(|&&s| s != DEPOT).count()
    }

    /// Returns `true` if this route visits no client.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Accumulated distance.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Accumulated duration.
    pub fn duration(&self) -> f64 {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_new() {
        let r = Route::new(2);
        assert_eq!(r.stops(), &[DEPOT]);
        assert!(r.is_empty());
        assert_eq!(r.vehicle_id(), 2);
        assert_eq!(r.vehicle_label(), "v3");
        assert_eq!(r.distance(), 0.0);
        assert_eq!(r.duration(), 0.0);
    }

    #[test]
    fn test_route_accumulates() {
        let mut r = Route::new(0);
        r.push_stop(5);
        r.add_distance(2.5);
        r.add_duration(30.0);
        r.push_stop(1);
        r.add_distance(1.5);
        r.add_duration(10.0);
        assert_eq!(r.last_stop(), 1);
        assert_eq!(r.len(), 2);
        assert_eq!(r.client_ids(), vec![5, 1]);
        assert!((r.distance() - 4.0).abs() < 1e-10);
        assert!((r.duration() - 40.0).abs() < 1e-10);
    }

    #[test]
    fn test_depot_only_route() {
        let mut r = Route::new(0);
        r.push_stop(DEPOT);
        assert_eq!(r.stops(), &[0, 0]);
        assert!(r.is_empty());
    }
}
