use std::collections::HashSet;

use tracing::trace;

use crate::core::{ChartConfig, ChartData};
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartHandle, ChartRenderer};

/// No-op backend used by tests and headless consumers.
///
/// It models the host environment's surface lookup with an explicit set of
/// known mount identifiers, so missing-target failures can be exercised
/// without a real drawing surface.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    surfaces: HashSet<String>,
}

impl HeadlessRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_surfaces<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            surfaces: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn add_surface(&mut self, id: impl Into<String>) {
        self.surfaces.insert(id.into());
    }
}

impl ChartRenderer for HeadlessRenderer {
    type Handle = HeadlessChart;

    fn mount(&self, mount_id: &str, config: ChartConfig) -> ChartResult<HeadlessChart> {
        if !self.surfaces.contains(mount_id) {
            return Err(ChartError::MountTargetNotFound {
                id: mount_id.to_string(),
            });
        }
        Ok(HeadlessChart {
            mount_id: mount_id.to_string(),
            config,
            redraw_count: 0,
        })
    }
}

/// Headless chart instance: holds the mounted configuration and counts
/// redraw requests instead of drawing.
#[derive(Debug)]
pub struct HeadlessChart {
    mount_id: String,
    config: ChartConfig,
    redraw_count: usize,
}

impl HeadlessChart {
    #[must_use]
    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn redraw_count(&self) -> usize {
        self.redraw_count
    }
}

impl ChartHandle for HeadlessChart {
    fn data(&self) -> &ChartData {
        &self.config.data
    }

    fn data_mut(&mut self) -> &mut ChartData {
        &mut self.config.data
    }

    fn redraw(&mut self) {
        self.redraw_count += 1;
        trace!(
            mount_id = %self.mount_id,
            redraw_count = self.redraw_count,
            "headless redraw"
        );
    }
}
