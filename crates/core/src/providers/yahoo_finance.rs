use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;
use time::OffsetDateTime;

use super::traits::MarketDataProvider;
use crate::errors::CoreError;
use crate::models::price::PricePoint;

/// Yahoo Finance provider for daily closing prices.
///
/// - **Free**: No API key required.
/// - **Coverage**: Global equities — B3 (".SA" suffix), NASDAQ,
///   Euronext listings.
/// - **Data**: Full historical daily OHLCV; we keep only the close.
///
/// Uses the `yahoo_finance_api` crate which wraps Yahoo Finance's
/// public chart endpoints. Symbols are fetched one request each; a
/// symbol Yahoo doesn't know yields an empty series so the rest of
/// the batch still comes back.
pub struct YahooFinanceProvider {
    connector: yahoo_finance_api::YahooConnector,
}

impl YahooFinanceProvider {
    pub fn new() -> Result<Self, CoreError> {
        let connector = yahoo_finance_api::YahooConnector::new().map_err(|e| CoreError::Api {
            provider: "Yahoo Finance".into(),
            message: format!("Failed to create connector: {e}"),
        })?;
        Ok(Self { connector })
    }

    /// Convert a `chrono::NaiveDate` to `time::OffsetDateTime` (midnight UTC).
    fn to_offset_datetime(date: NaiveDate) -> Result<OffsetDateTime, CoreError> {
        let month: time::Month = match date.month() {
            1 => time::Month::January,
            2 => time::Month::February,
            3 => time::Month::March,
            4 => time::Month::April,
            5 => time::Month::May,
            6 => time::Month::June,
            7 => time::Month::July,
            8 => time::Month::August,
            9 => time::Month::September,
            10 => time::Month::October,
            11 => time::Month::November,
            12 => time::Month::December,
            _ => unreachable!(),
        };

        let odt = time::Date::from_calendar_date(date.year(), month, date.day() as u8)
            .map_err(|e| CoreError::Api {
                provider: "Yahoo Finance".into(),
                message: format!("Invalid date {date}: {e}"),
            })?
            .with_hms(0, 0, 0)
            .map_err(|e| CoreError::Api {
                provider: "Yahoo Finance".into(),
                message: format!("Invalid time for {date}: {e}"),
            })?
            .assume_utc();
        Ok(odt)
    }

    /// Convert a unix timestamp (seconds) to `chrono::NaiveDate`.
    fn timestamp_to_naive_date(ts: i64) -> Option<NaiveDate> {
        chrono::DateTime::from_timestamp(ts, 0).map(|dt| dt.date_naive())
    }

    /// One symbol's daily closes from `start` through now.
    async fn fetch_symbol(
        &self,
        symbol: &str,
        start: OffsetDateTime,
    ) -> Result<Vec<PricePoint>, CoreError> {
        let end = OffsetDateTime::now_utc();

        let resp = self
            .connector
            .get_quote_history(symbol, start, end)
            .await
            .map_err(|e| CoreError::Api {
                provider: "Yahoo Finance".into(),
                message: format!("Failed to fetch history for {symbol}: {e}"),
            })?;

        let quotes = resp.quotes().map_err(|e| CoreError::Api {
            provider: "Yahoo Finance".into(),
            message: format!("Failed to parse quotes for {symbol}: {e}"),
        })?;

        let mut points: Vec<PricePoint> = quotes
            .iter()
            .filter_map(|q| {
                let date = Self::timestamp_to_naive_date(q.timestamp)?;
                Some(PricePoint {
                    date,
                    close: q.close,
                })
            })
            .collect();

        points.sort_by_key(|p| p.date);
        points.dedup_by_key(|p| p.date);
        Ok(points)
    }
}

#[async_trait]
impl MarketDataProvider for YahooFinanceProvider {
    fn name(&self) -> &str {
        "Yahoo Finance"
    }

    async fn closing_prices(
        &self,
        symbols: &[String],
        start: NaiveDate,
    ) -> Result<HashMap<String, Vec<PricePoint>>, CoreError> {
        let start = Self::to_offset_datetime(start)?;

        let mut series = HashMap::with_capacity(symbols.len());
        for symbol in symbols {
            // Unknown or delisted symbols come back as errors from the
            // chart endpoint; the batch tolerates them as empty series.
            let points = self.fetch_symbol(symbol, start).await.unwrap_or_default();
            series.insert(symbol.clone(), points);
        }

        Ok(series)
    }
}
