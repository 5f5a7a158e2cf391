//! The accounting handler — one job assignment per request.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Html;

use gridnode_accounting::{display_hostname, report};
use gridnode_core::{DemandVector, JobDemand, COMPUTE_HEADER, STORAGE_HEADER};

use crate::state::AppState;

/// GET (any path) — fold the job's demand into the totals and report.
///
/// This handler has no failure path: unparseable demand counts as zero
/// and a failed hostname lookup renders as a placeholder.
pub async fn report_usage(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Html<String> {
    let demand = extract_demand(&headers, &body);
    let totals = state.ledger.record(demand);
    let hostname = display_hostname(state.hostnames.as_ref());
    Html(report::render_status(&hostname, totals, demand))
}

/// Read demand from the `Compute`/`Storage` headers. When neither header
/// is present, fall back to a JSON demand-vector body. Anything missing
/// or malformed is zero demand.
fn extract_demand(headers: &HeaderMap, body: &[u8]) -> JobDemand {
    let compute = headers.get(COMPUTE_HEADER).and_then(|v| v.to_str().ok());
    let storage = headers.get(STORAGE_HEADER).and_then(|v| v.to_str().ok());

    if compute.is_none() && storage.is_none() && !body.is_empty() {
        return serde_json::from_slice::<DemandVector>(body)
            .map(JobDemand::from)
            .unwrap_or_default();
    }

    JobDemand::from_fields(compute, storage)
}
