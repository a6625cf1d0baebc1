use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Daily sales amounts keyed by date label, as served by the dashboard API.
///
/// `dates` and `sales` are parallel arrays correlated by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSeries {
    pub dates: Vec<String>,
    pub sales: Vec<f64>,
}

impl SalesSeries {
    pub fn validate(&self) -> ChartResult<()> {
        expect_parallel("dates", self.dates.len(), "sales", self.sales.len())
    }
}

/// Order counts per menu item for the proportion chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularityBreakdown {
    pub items: Vec<String>,
    pub counts: Vec<u64>,
}

impl PopularityBreakdown {
    pub fn validate(&self) -> ChartResult<()> {
        expect_parallel("items", self.items.len(), "counts", self.counts.len())
    }
}

/// Current stock levels and reorder thresholds per inventory item.
///
/// All three arrays are parallel; `reorder_levels` keeps the API's snake-case
/// field name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryStatus {
    pub items: Vec<String>,
    pub levels: Vec<f64>,
    pub reorder_levels: Vec<f64>,
}

impl InventoryStatus {
    pub fn validate(&self) -> ChartResult<()> {
        expect_parallel("items", self.items.len(), "levels", self.levels.len())?;
        expect_parallel(
            "items",
            self.items.len(),
            "reorder_levels",
            self.reorder_levels.len(),
        )
    }
}

/// Replacement data pushed into an already-mounted chart.
///
/// Datasets pair with the chart's existing series by index, in construction
/// order. Colors and fixed options from construction are not touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatePayload {
    pub labels: Vec<String>,
    pub datasets: Vec<UpdateDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateDataset {
    pub data: Vec<f64>,
}

fn expect_parallel(
    left_name: &str,
    left_len: usize,
    right_name: &str,
    right_len: usize,
) -> ChartResult<()> {
    if left_len != right_len {
        return Err(ChartError::InvalidData(format!(
            "`{left_name}` has {left_len} entries but `{right_name}` has {right_len}"
        )));
    }
    Ok(())
}
