mod builders;
mod fetch;
mod update;

pub use builders::{
    DashboardSeries, build_chart, build_inventory_chart, build_popularity_chart, build_sales_chart,
};
pub use fetch::{fetch_series, try_fetch_series};
pub use update::apply_update;
