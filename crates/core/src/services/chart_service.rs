use crate::models::catalog::TickerCatalog;
use crate::models::chart::{ChartPoint, ChartSeries};
use crate::models::price::PriceTable;

/// Generates chart-ready price lines from the filtered table.
///
/// The core computes the series — the frontend only renders. One line
/// per requested ticker, legend label resolved from the catalog,
/// missing trading days skipped.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    pub fn price_lines(
        &self,
        filtered: &PriceTable,
        tickers: &[String],
        catalog: &TickerCatalog,
    ) -> Vec<ChartSeries> {
        tickers
            .iter()
            .map(|symbol| {
                let points = filtered
                    .non_missing(symbol)
                    .into_iter()
                    .map(|p| ChartPoint {
                        date: p.date,
                        close: p.close,
                    })
                    .collect();

                ChartSeries {
                    symbol: symbol.clone(),
                    label: catalog
                        .label_for(symbol)
                        .unwrap_or(symbol.as_str())
                        .to_string(),
                    points,
                }
            })
            .collect()
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
