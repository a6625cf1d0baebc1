mod headless;

pub use headless::{HeadlessChart, HeadlessRenderer};

use crate::core::{ChartConfig, ChartData};
use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// The adapter only needs construction: resolve a mount identifier to a
/// drawable surface and allocate a live chart there. Everything after
/// construction goes through the returned [`ChartHandle`].
pub trait ChartRenderer {
    type Handle: ChartHandle;

    fn mount(&self, mount_id: &str, config: ChartConfig) -> ChartResult<Self::Handle>;
}

/// Live chart instance owned by the caller after construction.
///
/// Exposes exactly what the update path needs: mutable access to the labels
/// and series values, and a redraw trigger. Visual options fixed at
/// construction are not reachable through this trait.
pub trait ChartHandle {
    fn data(&self) -> &ChartData;

    fn data_mut(&mut self) -> &mut ChartData;

    fn redraw(&mut self);
}
