use serde::{Deserialize, Serialize};

use super::chart::ChartSeries;
use super::performance::PerformanceReport;
use super::range::DateRange;

/// Everything one render pass produces: chart lines, the performance
/// section, and an optional notice that the requested window held no
/// data and the full available history was shown instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub chart: Vec<ChartSeries>,

    pub performance: PerformanceReport,

    /// When set, the resolver fell back to all available data; the
    /// value is the originally requested range, for the warning text.
    pub fallback_from: Option<DateRange>,
}
