use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;

use crate::errors::CoreError;
use crate::models::price::PricePoint;

/// Trait abstraction over the historical-price collaborator.
///
/// The dashboard only ever asks one question: daily closing prices for
/// a batch of symbols from a fixed start date through the present. If
/// the upstream API changes or dies, only the implementation behind
/// this trait is replaced.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name of this provider (for errors).
    fn name(&self) -> &str;

    /// Fetch one closing-price series per requested symbol.
    ///
    /// Returns whatever subset the upstream can satisfy: a symbol that
    /// yields nothing maps to an empty series rather than failing the
    /// batch. Each series is sorted by date. An `Err` means the
    /// collaborator was unreachable for the whole batch.
    async fn closing_prices(
        &self,
        symbols: &[String],
        start: NaiveDate,
    ) -> Result<HashMap<String, Vec<PricePoint>>, CoreError>;
}
