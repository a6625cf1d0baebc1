use serde_json::Value;
use tracing::{debug, error};

use crate::error::{ChartError, ChartResult};

/// Fetches a chart dataset from `endpoint`, swallowing failures.
///
/// Any failure (transport, non-2xx status, non-JSON body) is logged and
/// collapsed into `None`; this function never returns an error. Callers
/// treat `None` as "no data available" and pick their own fallback. No
/// retry, timeout, or caching happens here.
pub async fn fetch_series(endpoint: &str) -> Option<Value> {
    match try_fetch_series(endpoint).await {
        Ok(value) => Some(value),
        Err(err) => {
            error!(endpoint, error = %err, "failed to fetch chart data");
            None
        }
    }
}

/// Typed variant of [`fetch_series`] for callers that want the failure.
///
/// Issues a single GET. A non-2xx status maps to
/// [`ChartError::HttpStatus`], a body that does not parse as JSON to
/// [`ChartError::MalformedResponse`], and request failures to
/// [`ChartError::Transport`].
pub async fn try_fetch_series(endpoint: &str) -> ChartResult<Value> {
    debug!(endpoint, "fetching chart data");
    let response = reqwest::get(endpoint).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ChartError::HttpStatus {
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|err| ChartError::MalformedResponse(err.to_string()))
}
