//! Fleet size and per-vehicle quota.

/// The number of vehicles requested for a dispatch run.
///
/// The request is kept signed because the input format allows zero or
/// negative counts; those collapse to a single vehicle that absorbs every
/// client.
///
/// # Examples
///
/// ```
/// use vrp_dispatch::models::Fleet;
///
/// let fleet = Fleet::new(3);
/// assert_eq!(fleet.effective_vehicles(), 3);
/// assert_eq!(fleet.quota(7), 3);
/// assert!(fleet.is_last(2));
///
/// let fleet = Fleet::new(0);
/// assert_eq!(fleet.effective_vehicles(), 1);
/// assert_eq!(fleet.quota(7), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fleet {
    requested: i64,
}

impl Fleet {
    /// Creates a fleet from the requested vehicle count.
    pub fn new(requested: i64) -> Self {
        Self { requested }
    }

    /// The vehicle count as given.
    pub fn requested(&self) -> i64 {
        self.requested
    }

    /// Number of vehicle slots the builder iterates over.
    pub fn effective_vehicles(&self) -> usize {
        if self.requested > 0 {
            usize::try_from(self.requested).unwrap_or(usize::MAX)
        } else {
            1
        }
    }

    /// Clients each vehicle takes before handing over to the next one.
    ///
    /// `ceil(clients / vehicles)` for a positive request, otherwise all of
    /// them. Never divides by a non-positive count.
    pub fn quota(&self, clients: usize) -> usize {
        if self.requested > 0 {
            clients.div_ceil(self.effective_vehicles())
        } else {
            clients
        }
    }

    /// Returns `true` for the vehicle that ignores the quota.
    pub fn is_last(&self, vehicle_index: usize) -> bool {
        vehicle_index + 1 == self.effective_vehicles()
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new(1)
    }
}
