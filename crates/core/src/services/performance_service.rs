use crate::models::catalog::TickerCatalog;
use crate::models::performance::{AssetPerformance, PerformanceReport, TickerReturn};
use crate::models::price::PriceTable;

/// Computes per-asset simple returns and the equal-weighted portfolio
/// aggregate over the filtered window.
///
/// Pure function of its inputs, invoked fresh on every render.
pub struct PerformanceService;

impl PerformanceService {
    pub fn new() -> Self {
        Self
    }

    /// Build the performance report for the requested tickers.
    ///
    /// Per ticker: missing entries are dropped, the first and last
    /// surviving closes become initial/final, and the simple return is
    /// `final / initial - 1`. Tickers with under two points are
    /// `Insufficient`; a zero initial or non-finite value is
    /// `Invalid`. Both stay in the portfolio denominator at a neutral
    /// multiplier of 1.0, deliberately pulling the average toward
    /// zero rather than being excluded.
    ///
    /// The projected value is emitted only for a positive starting
    /// capital.
    pub fn compute(
        &self,
        filtered: &PriceTable,
        tickers: &[String],
        catalog: &TickerCatalog,
        starting_capital: f64,
    ) -> PerformanceReport {
        let mut assets = Vec::with_capacity(tickers.len());
        let mut multiplier_sum = 0.0;

        for symbol in tickers {
            let result = Self::simple_return(filtered, symbol);
            multiplier_sum += result.growth_multiplier();

            let label = catalog
                .label_for(symbol)
                .unwrap_or(symbol.as_str())
                .to_string();
            assets.push(AssetPerformance {
                symbol: symbol.clone(),
                label,
                result,
            });
        }

        let portfolio_return = if tickers.is_empty() {
            0.0
        } else {
            multiplier_sum / tickers.len() as f64 - 1.0
        };

        let projected_value =
            (starting_capital > 0.0).then(|| starting_capital * (1.0 + portfolio_return));

        PerformanceReport {
            assets,
            portfolio_return,
            projected_value,
        }
    }

    fn simple_return(filtered: &PriceTable, symbol: &str) -> TickerReturn {
        let series = filtered.non_missing(symbol);
        if series.len() < 2 {
            return TickerReturn::Insufficient;
        }

        // len >= 2 checked above
        let initial = series.first().unwrap().close;
        let last = series.last().unwrap().close;

        if initial == 0.0 || !initial.is_finite() || !last.is_finite() {
            return TickerReturn::Invalid;
        }

        TickerReturn::Computed(last / initial - 1.0)
    }
}

impl Default for PerformanceService {
    fn default() -> Self {
        Self::new()
    }
}
