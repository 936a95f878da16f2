use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::distance::{CostMatrix, TravelMatrices};
use crate::models::{Fleet, Route, Solution};

/// Input document.
///
/// Every field is optional: a missing `num_vehicles` means one vehicle,
/// missing matrices mean an empty instance. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonDispatchRequest {
    /// Client records, in location order (`clients[i]` is location `i + 1`).
    ///
    /// Informational only: any JSON value is accepted, and anything other
    /// than an array simply carries no client ids.
    pub clients: Value,
    pub num_vehicles: i64,
    pub distance_matrix: Vec<Vec<Option<f64>>>,
    pub duration_matrix: Vec<Vec<Option<f64>>>,
}

impl Default for JsonDispatchRequest {
    fn default() -> Self {
        Self {
            clients: Value::Null,
            num_vehicles: 1,
            distance_matrix: Vec::new(),
            duration_matrix: Vec::new(),
        }
    }
}

impl JsonDispatchRequest {
    pub fn fleet(&self) -> Fleet {
        Fleet::new(self.num_vehicles)
    }

    /// Moves both matrices out of the request.
    pub fn take_matrices(&mut self) -> TravelMatrices {
        TravelMatrices::new(
            CostMatrix::from_rows(std::mem::take(&mut self.distance_matrix)),
            CostMatrix::from_rows(std::mem::take(&mut self.duration_matrix)),
        )
    }

    /// Number of client records, zero when `clients` is not an array.
    pub fn num_client_records(&self) -> usize {
        self.clients.as_array().map_or(0, Vec::len)
    }

    /// External id of the client at `location`, if the request carries one.
    pub fn client_external_id(&self, location: usize) -> Option<&Value> {
        let index = location.checked_sub(1)?;
        self.clients.as_array()?.get(index)?.get("id")
    }
}

/// Extra fields to include in the output document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Add `clients_served` to each route.
    pub with_clients: bool,
    /// Add the top-level `unassigned` list.
    pub with_unassigned: bool,
    /// Pretty-print the document.
    pub pretty: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRoute {
    pub vehicle_id: String,
    pub stops_indices: Vec<usize>,
    pub distance: f64,
    pub duration: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clients_served: Option<Vec<Value>>,
}

impl JsonRoute {
    pub fn from_route(route: &Route, request: &JsonDispatchRequest, options: OutputOptions) -> Self {
        let clients_served = options.with_clients.then(|| {
            route
                .client_ids()
                .into_iter()
                .filter_map(|location| request.client_external_id(location).cloned())
                .collect()
        });

        JsonRoute {
            vehicle_id: route.vehicle_label(),
            stops_indices: route.stops().to_vec(),
            distance: route.distance(),
            duration: route.duration(),
            clients_served,
        }
    }
}

/// Output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonDispatchResponse {
    pub optimized_routes: Vec<JsonRoute>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unassigned: Option<Vec<usize>>,
}

impl JsonDispatchResponse {
    pub fn from_solution(
        solution: &Solution,
        request: &JsonDispatchRequest,
        options: OutputOptions,
    ) -> Self {
        JsonDispatchResponse {
            optimized_routes: solution
                .routes()
                .iter()
                .map(|route| JsonRoute::from_route(route, request, options))
                .collect(),
            unassigned: options
                .with_unassigned
                .then(|| solution.unassigned().to_vec()),
        }
    }
}
