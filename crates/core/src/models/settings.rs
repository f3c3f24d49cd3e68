use serde::{Deserialize, Serialize};

use super::region::Region;

/// User-configurable dashboard settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Regions whose ticker catalogs are offered for selection.
    /// Kept in `Region::ALL` order regardless of toggle order.
    pub enabled_regions: Vec<Region>,

    /// Non-negative starting amount for the projected-value line.
    /// Zero means no projection is shown.
    pub starting_capital: f64,
}

impl Settings {
    pub fn is_region_enabled(&self, region: Region) -> bool {
        self.enabled_regions.contains(&region)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled_regions: Region::ALL.to_vec(),
            starting_capital: 0.0,
        }
    }
}
