use tracing::debug;

use crate::core::{
    ChartConfig, ChartData, ChartKind, ChartOptions, ColorSpec, Dataset, InventoryStatus,
    LegendOptions, LegendPosition, PopularityBreakdown, Rgba, SalesSeries, ScaleOptions,
    TooltipFormat, palette_color,
};
use crate::error::ChartResult;
use crate::render::ChartRenderer;

const SERIES_TEAL: Rgba = Rgba::rgb(75, 192, 192);
const SERIES_RED: Rgba = Rgba::rgb(255, 99, 132);

/// Domain dataset tagged by the chart kind it maps to.
///
/// Construction is one generic mount step; the per-kind field mapping and
/// fixed visual policy live in [`DashboardSeries::chart_config`].
#[derive(Debug, Clone, Copy)]
pub enum DashboardSeries<'a> {
    Sales(&'a SalesSeries),
    Popularity(&'a PopularityBreakdown),
    Inventory(&'a InventoryStatus),
}

impl DashboardSeries<'_> {
    #[must_use]
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Sales(_) => ChartKind::Line,
            Self::Popularity(_) => ChartKind::Doughnut,
            Self::Inventory(_) => ChartKind::Bar,
        }
    }

    /// Maps the dataset into the renderer configuration schema.
    ///
    /// Pure with respect to input: the same dataset always yields a
    /// structurally identical configuration. Fails when the parallel arrays
    /// of the dataset disagree in length.
    pub fn chart_config(&self) -> ChartResult<ChartConfig> {
        match self {
            Self::Sales(data) => sales_config(data),
            Self::Popularity(data) => popularity_config(data),
            Self::Inventory(data) => inventory_config(data),
        }
    }
}

/// Mounts any dashboard chart kind on the given render surface.
pub fn build_chart<R: ChartRenderer>(
    renderer: &R,
    mount_id: &str,
    series: DashboardSeries<'_>,
) -> ChartResult<R::Handle> {
    let config = series.chart_config()?;
    debug!(
        mount_id,
        kind = ?config.kind,
        labels = config.data.labels.len(),
        series = config.data.datasets.len(),
        "mounting dashboard chart"
    );
    renderer.mount(mount_id, config)
}

/// Mounts a filled line curve of daily sales over date labels.
///
/// Y origin is pinned at zero, y ticks and tooltip values carry a `$`
/// prefix, the legend and x gridlines are suppressed.
pub fn build_sales_chart<R: ChartRenderer>(
    renderer: &R,
    mount_id: &str,
    data: &SalesSeries,
) -> ChartResult<R::Handle> {
    build_chart(renderer, mount_id, DashboardSeries::Sales(data))
}

/// Mounts a doughnut chart of order counts per item.
///
/// Legend sits below the chart with padded point-style markers; slice colors
/// cycle through the fixed palette by index.
pub fn build_popularity_chart<R: ChartRenderer>(
    renderer: &R,
    mount_id: &str,
    data: &PopularityBreakdown,
) -> ChartResult<R::Handle> {
    build_chart(renderer, mount_id, DashboardSeries::Popularity(data))
}

/// Mounts a compound inventory chart: stock levels as bars with the reorder
/// thresholds drawn as a line overlay on the same category axis.
pub fn build_inventory_chart<R: ChartRenderer>(
    renderer: &R,
    mount_id: &str,
    data: &InventoryStatus,
) -> ChartResult<R::Handle> {
    build_chart(renderer, mount_id, DashboardSeries::Inventory(data))
}

fn sales_config(data: &SalesSeries) -> ChartResult<ChartConfig> {
    data.validate()?;
    Ok(ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: data.dates.clone(),
            datasets: vec![Dataset {
                label: "Daily Sales ($)".to_string(),
                data: data.sales.clone(),
                background_color: ColorSpec::Single(SERIES_TEAL.with_alpha(0.2)),
                border_color: Some(SERIES_TEAL),
                border_width: 2,
                tension: Some(0.4),
                fill: true,
                kind: None,
            }],
        },
        options: ChartOptions {
            scales: ScaleOptions {
                begin_at_zero_y: true,
                y_tick_prefix: Some("$".to_string()),
                show_x_grid: false,
            },
            legend: LegendOptions {
                display: false,
                ..LegendOptions::default()
            },
            tooltip: Some(TooltipFormat {
                prefix: "$".to_string(),
                decimals: 2,
            }),
            ..ChartOptions::default()
        },
    })
}

fn popularity_config(data: &PopularityBreakdown) -> ChartResult<ChartConfig> {
    data.validate()?;
    let slice_colors = (0..data.items.len()).map(palette_color).collect();
    Ok(ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: data.items.clone(),
            datasets: vec![Dataset {
                label: "Orders".to_string(),
                data: data.counts.iter().map(|&count| count as f64).collect(),
                background_color: ColorSpec::PerSlice(slice_colors),
                border_color: None,
                border_width: 1,
                tension: None,
                fill: false,
                kind: None,
            }],
        },
        options: ChartOptions {
            legend: LegendOptions {
                display: true,
                position: LegendPosition::Bottom,
                use_point_style: true,
                padding: 20,
            },
            cutout_fraction: Some(0.65),
            ..ChartOptions::default()
        },
    })
}

fn inventory_config(data: &InventoryStatus) -> ChartResult<ChartConfig> {
    data.validate()?;
    Ok(ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: data.items.clone(),
            datasets: vec![
                Dataset {
                    label: "Current Quantity".to_string(),
                    data: data.levels.clone(),
                    background_color: ColorSpec::Single(SERIES_TEAL.with_alpha(0.7)),
                    border_color: Some(SERIES_TEAL),
                    border_width: 1,
                    tension: None,
                    fill: false,
                    kind: None,
                },
                Dataset {
                    label: "Reorder Level".to_string(),
                    data: data.reorder_levels.clone(),
                    background_color: ColorSpec::Single(SERIES_RED.with_alpha(0.5)),
                    border_color: Some(SERIES_RED),
                    border_width: 1,
                    tension: None,
                    fill: false,
                    kind: Some(ChartKind::Line),
                },
            ],
        },
        options: ChartOptions {
            scales: ScaleOptions {
                begin_at_zero_y: true,
                ..ScaleOptions::default()
            },
            ..ChartOptions::default()
        },
    })
}
