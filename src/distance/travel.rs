//! Paired distance and duration matrices.

use super::{CostMatrix, MatrixError};

/// Distance and duration of a single directed edge.
///
/// Both halves are resolved independently, so a route can still collect
/// the distance of an edge whose duration is missing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    /// Edge distance, or the lookup failure.
    pub distance: Result<f64, MatrixError>,
    /// Edge duration, or the lookup failure.
    pub duration: Result<f64, MatrixError>,
}

/// The two cost tables of a routing instance, indexed identically.
///
/// The number of locations is taken from the distance matrix. Duration
/// lookups are independent of distance lookups: an edge can resolve one
/// and miss the other.
///
/// # Examples
///
/// ```
/// use vrp_dispatch::distance::{CostMatrix, TravelMatrices};
///
/// let tm = TravelMatrices::new(
///     CostMatrix::from_values(vec![vec![0.0, 2.0], vec![2.0, 0.0]]),
///     CostMatrix::from_values(vec![vec![0.0, 60.0], vec![60.0, 0.0]]),
/// );
/// assert_eq!(tm.num_locations(), 2);
/// assert_eq!(tm.leg(0, 1).duration, Ok(60.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TravelMatrices {
    distance: CostMatrix,
    duration: CostMatrix,
}

impl TravelMatrices {
    /// Pairs a distance matrix with its duration matrix.
    pub fn new(distance: CostMatrix, duration: CostMatrix) -> Self {
        Self { distance, duration }
    }

    /// Number of locations (depot included).
    pub fn num_locations(&self) -> usize {
        self.distance.size()
    }

    /// Number of clients, i.e. locations other than the depot.
    pub fn num_clients(&self) -> usize {
        self.num_locations().saturating_sub(1)
    }

    /// Distance from `from` to `to`.
    pub fn distance(&self, from: usize, to: usize) -> Result<f64, MatrixError> {
        self.distance.get(from, to)
    }

    /// Duration from `from` to `to`.
    pub fn duration(&self, from: usize, to: usize) -> Result<f64, MatrixError> {
        self.duration.get(from, to)
    }

    /// Resolves both costs of the edge `from -> to`.
    pub fn leg(&self, from: usize, to: usize) -> Leg {
        Leg {
            distance: self.distance(from, to),
            duration: self.duration(from, to),
        }
    }

    /// Describes every way the two matrices deviate from a pair of n×n tables.
    ///
    /// Deviations are not errors: lookups into the holes fail individually.
    pub fn shape_warnings(&self) -> Vec<String> {
        let n = self.num_locations();
        let mut warnings = Vec::new();
        if !self.distance.is_square() {
            warnings.push(format!("distance matrix is not {n}x{n}"));
        }
        if self.duration.size() != n || !self.duration.is_square() {
            warnings.push(format!(
                "duration matrix has {} rows and is not {n}x{n}",
                self.duration.size()
            ));
        }
        let missing = self.distance.count_missing_cells();
        if missing > 0 {
            warnings.push(format!("distance matrix has {missing} null cells"));
        }
        let missing = self.duration.count_missing_cells();
        if missing > 0 {
            warnings.push(format!("duration matrix has {missing} null cells"));
        }
        warnings
    }
}
