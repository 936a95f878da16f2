//! JSON documents exchanged with the caller.
//!
//! The input carries the fleet size and the two precomputed matrices; the
//! output lists one record per emitted route. [`run`] ties both ends to the
//! route builder and either returns a complete serialized document or an
//! error, never a partial document.

mod types;

pub use types::{JsonDispatchRequest, JsonDispatchResponse, JsonRoute, OutputOptions};

use tracing::debug;

use crate::constructive::nearest_neighbor;
use crate::error::DispatchError;

/// Parses an input document.
pub fn parse_request(input: &str) -> Result<JsonDispatchRequest, DispatchError> {
    serde_json::from_str(input).map_err(|source| DispatchError::parse(source, input))
}

/// Builds routes for a parsed request.
pub fn solve(mut request: JsonDispatchRequest, options: OutputOptions) -> JsonDispatchResponse {
    let matrices = request.take_matrices();
    debug!(
        locations = matrices.num_locations(),
        num_vehicles = request.num_vehicles,
        clients = request.num_client_records(),
        "solving dispatch request"
    );
    let solution = nearest_neighbor(&matrices, request.fleet());
    JsonDispatchResponse::from_solution(&solution, &request, options)
}

/// Parses `input`, builds routes, and serializes the output document.
///
/// # Examples
///
/// ```
/// use vrp_dispatch::json::{run, OutputOptions};
///
/// let input = r#"{"num_vehicles": 1, "distance_matrix": [[0, 2], [3, 0]], "duration_matrix": [[0, 20], [30, 0]]}"#;
/// let output = run(input, OutputOptions::default()).unwrap();
/// assert_eq!(
///     output,
///     r#"{"optimized_routes":[{"vehicle_id":"v1","stops_indices":[0,1,0],"distance":5.0,"duration":50.0}]}"#
/// );
/// ```
pub fn run(input: &str, options: OutputOptions) -> Result<String, DispatchError> {
    let request = parse_request(input)?;
    let response = solve(request, options);
    let document = if options.pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    };
    document.map_err(DispatchError::Serialize)
}
