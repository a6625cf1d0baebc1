//! dashboard-charts: presentation helpers for a dashboard's charting renderer.
//!
//! The adapter maps domain datasets (daily sales, item popularity, inventory
//! levels) onto the configuration schema of an external charting backend,
//! refreshes already-mounted charts in place, and fetches datasets over HTTP.
//! The rendering engine itself stays behind the [`render::ChartRenderer`]
//! trait; any backend satisfying that shape is substitutable.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{
    DashboardSeries, apply_update, build_chart, build_inventory_chart, build_popularity_chart,
    build_sales_chart, fetch_series, try_fetch_series,
};
pub use error::{ChartError, ChartResult};
