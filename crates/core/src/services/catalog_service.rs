use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::errors::CoreError;
use crate::models::catalog::{CatalogEntry, TickerCatalog};
use crate::models::region::Region;

/// Loads the static regional ticker tables and merges them into one
/// label → symbol catalog.
///
/// Pure with respect to its inputs: the same source content and the
/// same enabled-region set always produce the same catalog.
pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        Self
    }

    /// Build the merged catalog for the enabled regions, in order.
    ///
    /// A region whose source file is missing or malformed contributes
    /// zero entries; the other regions are unaffected.
    pub fn build_catalog(&self, sources_dir: &Path, regions: &[Region]) -> TickerCatalog {
        let mut catalog = TickerCatalog::new();
        for &region in regions {
            if let Ok(entries) = self.load_region(sources_dir, region) {
                catalog.merge(entries);
            }
        }
        catalog
    }

    /// Load one region's entries from its source file under `sources_dir`.
    pub fn load_region(
        &self,
        sources_dir: &Path,
        region: Region,
    ) -> Result<Vec<CatalogEntry>, CoreError> {
        let path = sources_dir.join(region.source_file());
        let file = File::open(&path).map_err(|e| CoreError::CatalogLoad {
            region: region.to_string(),
            message: format!("{}: {e}", path.display()),
        })?;
        self.parse_region(region, file)
    }

    /// Parse a region's table from any reader.
    ///
    /// Every row with a non-blank identifier contributes one entry,
    /// canonicalized by the region's own rules. Extra columns and
    /// ragged rows are tolerated; a missing identifier column is a
    /// malformed source.
    pub fn parse_region<R: Read>(
        &self,
        region: Region,
        reader: R,
    ) -> Result<Vec<CatalogEntry>, CoreError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(region.delimiter())
            .flexible(true)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| CoreError::CatalogLoad {
                region: region.to_string(),
                message: format!("unreadable header row: {e}"),
            })?
            .clone();

        // Exported tables sometimes carry a UTF-8 BOM on the first header.
        let column = headers
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}').trim() == region.symbol_column())
            .ok_or_else(|| CoreError::CatalogLoad {
                region: region.to_string(),
                message: format!("missing '{}' column", region.symbol_column()),
            })?;

        let mut entries = Vec::new();
        for record in rdr.records() {
            let record = record.map_err(|e| CoreError::CatalogLoad {
                region: region.to_string(),
                message: format!("unreadable record: {e}"),
            })?;

            let Some(raw) = record.get(column) else {
                continue;
            };
            if let Some(symbol) = region.canonical_symbol(raw) {
                entries.push(CatalogEntry {
                    label: region.display_label(&symbol),
                    symbol,
                    region,
                });
            }
        }

        Ok(entries)
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}
