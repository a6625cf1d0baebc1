use tracing::{debug, warn};

use crate::core::UpdatePayload;
use crate::render::ChartHandle;

/// Replaces a mounted chart's labels and series data, then redraws.
///
/// Pairing is strictly by index over the chart's *existing* series list, in
/// construction order: a payload with fewer datasets than the chart has
/// series leaves the trailing series unchanged, and extra payload datasets
/// are ignored. Neither case is an error; a mismatch is only logged.
pub fn apply_update<H: ChartHandle>(handle: &mut H, payload: &UpdatePayload) {
    let data = handle.data_mut();
    if payload.datasets.len() != data.datasets.len() {
        warn!(
            mounted_series = data.datasets.len(),
            payload_datasets = payload.datasets.len(),
            "update payload dataset count does not match mounted series"
        );
    }

    data.labels = payload.labels.clone();
    for (dataset, incoming) in data.datasets.iter_mut().zip(&payload.datasets) {
        dataset.data = incoming.data.clone();
    }

    debug!(
        labels = payload.labels.len(),
        datasets = payload.datasets.len(),
        "applied chart update"
    );
    handle.redraw();
}
