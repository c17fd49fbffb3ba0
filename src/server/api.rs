//! JSON sort endpoint.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{AppState, RequestError};
use crate::engine::{SortStats, bubble_sort};
use crate::types::{NumberList, SortOrder};

/// Body of `POST /api/v1/sort`.
#[derive(Debug, Clone, Deserialize)]
pub struct SortRequest {
    /// Comma-separated numbers, exactly as typed into the form.
    pub numbers: String,

    /// Matched case-insensitively; defaults to ascending.
    #[serde(default)]
    pub order: SortOrder,

    #[serde(default = "default_show_steps")]
    pub show_steps: bool,
}

fn default_show_steps() -> bool {
    true
}

/// Successful response of `POST /api/v1/sort`.
#[derive(Debug, Clone, Serialize)]
pub struct SortResponse {
    pub order: SortOrder,
    pub sorted: NumberList,
    /// One rendered line per step; empty when `show_steps` was false.
    pub steps: Vec<String>,
    pub stats: SortStats,
}

/// Sort handler.
///
/// # Response
///
/// - 200 OK with a [`SortResponse`]
/// - 400 Bad Request if the number list does not parse
/// - 413 Payload Too Large if the list exceeds the configured limit
/// - 4xx with the same JSON error body if the request body itself is
///   rejected (malformed JSON, unknown `order`)
///
/// # Example
///
/// ```ignore
/// POST /api/v1/sort HTTP/1.1
/// Content-Type: application/json
///
/// {"numbers": "3, 1, 2", "order": "Descending", "show_steps": false}
///
/// HTTP/1.1 200 OK
/// Content-Type: application/json
///
/// {"order": "Descending", "sorted": [3.0, 2.0, 1.0], "steps": [], "stats": {...}}
/// ```
pub async fn sort_handler(
    State(app_state): State<AppState>,
    request: Result<Json<SortRequest>, JsonRejection>,
) -> Result<Json<SortResponse>, RequestError> {
    let Json(request) = request.inspect_err(|err| info!(error = %err, "Unreadable API request"))?;
    let numbers = app_state
        .parse_submission(&request.numbers)
        .inspect_err(|err| info!(error = %err, "Rejected API request"))?;

    debug!(
        count = numbers.len(),
        order = %request.order,
        show_steps = request.show_steps,
        "API sort request"
    );

    let outcome = bubble_sort(&numbers, request.order, request.show_steps);

    Ok(Json(SortResponse {
        order: request.order,
        steps: outcome.steps.lines(),
        sorted: outcome.sorted,
        stats: outcome.stats,
    }))
}
