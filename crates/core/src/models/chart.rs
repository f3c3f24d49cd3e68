use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single point on a price line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// One renderable price line for a selected ticker.
///
/// The core generates these — the frontend just draws them. Missing
/// trading days are skipped rather than plotted as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Canonical symbol the series belongs to.
    pub symbol: String,

    /// Display label to use in the legend.
    pub label: String,

    pub points: Vec<ChartPoint>,
}
