use serde::Serialize;

use crate::core::color::Rgba;

/// Chart kind understood by the renderer.
///
/// A compound chart keeps one top-level kind and overrides individual
/// datasets through [`Dataset::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Doughnut,
    Bar,
}

/// Background color binding for one dataset: a single color for line/bar
/// series, one color per slice for proportion series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(Rgba),
    PerSlice(Vec<Rgba>),
}

/// One drawable series within a chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: ColorSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Rgba>,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    pub fill: bool,
    /// Per-dataset kind override, used for line overlays on bar charts.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ChartKind>,
}

/// Labels plus the series drawn against them. This is the only part of a
/// mounted chart that the update operation replaces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendOptions {
    pub display: bool,
    pub position: LegendPosition,
    pub use_point_style: bool,
    pub padding: u32,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            display: true,
            position: LegendPosition::Top,
            use_point_style: false,
            padding: 0,
        }
    }
}

/// Axis policy shared by the cartesian chart kinds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleOptions {
    pub begin_at_zero_y: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_tick_prefix: Option<String>,
    pub show_x_grid: bool,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            begin_at_zero_y: false,
            y_tick_prefix: None,
            show_x_grid: true,
        }
    }
}

/// Tooltip value formatting: fixed decimal precision with a literal prefix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipFormat {
    pub prefix: String,
    pub decimals: u8,
}

impl TooltipFormat {
    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        format!("{}{:.*}", self.prefix, usize::from(self.decimals), value)
    }
}

/// Fixed visual policy chosen at construction time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub scales: ScaleOptions,
    pub legend: LegendOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<TooltipFormat>,
    /// Inner cutout for ring charts, as a fraction of the radius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutout_fraction: Option<f64>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            scales: ScaleOptions::default(),
            legend: LegendOptions::default(),
            tooltip: None,
            cutout_fraction: None,
        }
    }
}

/// Complete renderer configuration for one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}
