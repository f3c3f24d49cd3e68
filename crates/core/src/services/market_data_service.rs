use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::models::price::{PriceTable, PriceTableCache, TickerSet};
use crate::models::range::DateRange;
use crate::providers::traits::MarketDataProvider;
use crate::providers::yahoo_finance::YahooFinanceProvider;

/// Fetches closing-price tables from the market-data collaborator,
/// memoized per ticker set in the session cache.
///
/// Cache policy:
/// - Key: the sorted, deduplicated ticker set. Selections equal as
///   sets hit the same entry regardless of order or duplicates.
/// - A hit never touches the network; a new set always fetches fresh.
/// - Whatever table the fetch produced (partial columns, all-missing
///   columns, or empty on total failure) is cached and treated as
///   immutable for the rest of the session.
pub struct MarketDataService {
    provider: Box<dyn MarketDataProvider>,
}

impl MarketDataService {
    pub fn new(provider: Box<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// Service backed by the default Yahoo Finance provider.
    pub fn with_default_provider() -> Result<Self, CoreError> {
        Ok(Self::new(Box::new(YahooFinanceProvider::new()?)))
    }

    /// Fixed historical start date for every fetch.
    pub fn history_start() -> NaiveDate {
        DateRange::global_start()
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Fetch-or-cache-hit for the given ticker set.
    ///
    /// Total provider failure is downgraded to an empty table rather
    /// than an error; downstream treats an empty table as "no valid
    /// data". Only an empty ticker set is rejected outright.
    pub async fn fetch<'c>(
        &self,
        cache: &'c mut PriceTableCache,
        tickers: &TickerSet,
    ) -> Result<&'c PriceTable, CoreError> {
        if tickers.is_empty() {
            return Err(CoreError::NoTickersSelected);
        }

        if !cache.contains(tickers) {
            let table = match self
                .provider
                .closing_prices(tickers.symbols(), Self::history_start())
                .await
            {
                Ok(series) => PriceTable::from_series(tickers.symbols(), series),
                Err(_) => PriceTable::empty(),
            };
            cache.insert(tickers.clone(), table);
        }

        Ok(cache.get(tickers).expect("entry ensured above"))
    }
}
