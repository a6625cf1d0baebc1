pub mod color;
pub mod config;
pub mod series;

pub use color::{Rgba, SLICE_PALETTE, palette_color};
pub use config::{
    ChartConfig, ChartData, ChartKind, ChartOptions, ColorSpec, Dataset, LegendOptions,
    LegendPosition, ScaleOptions, TooltipFormat,
};
pub use series::{InventoryStatus, PopularityBreakdown, SalesSeries, UpdateDataset, UpdatePayload};
