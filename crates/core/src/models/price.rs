use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use super::range::DateRange;

/// A single closing-price data point (date → close).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Cache key: the sorted, deduplicated set of canonical symbols
/// requested in one fetch. Two selections that are equal as sets
/// (ignoring order and duplicates) produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickerSet(Vec<String>);

impl TickerSet {
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut v: Vec<String> = symbols.into_iter().map(Into::into).collect();
        v.sort();
        v.dedup();
        Self(v)
    }

    pub fn symbols(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for TickerSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join("-"))
    }
}

/// One named column of a price table. `values` is row-aligned with the
/// table's date axis; `None` means no trade data that day, never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceColumn {
    pub symbol: String,
    pub values: Vec<Option<f64>>,
}

/// The column-wise union of the fetched price series: one sorted date
/// axis, one column per requested symbol. Once built for a ticker set
/// the table is never mutated; a different set produces a new table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    dates: Vec<NaiveDate>,
    columns: Vec<PriceColumn>,
}

impl PriceTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from per-symbol series, in the order given by
    /// `symbols`. The date axis is the sorted union of all series
    /// dates; cells with no data for a symbol/date pair are `None`,
    /// and non-finite closes from the upstream are treated as missing
    /// at ingestion. Symbols with no series (or an empty one) still
    /// get a column.
    pub fn from_series(symbols: &[String], mut series: HashMap<String, Vec<PricePoint>>) -> Self {
        let mut all_dates: BTreeSet<NaiveDate> = BTreeSet::new();
        for points in series.values() {
            for p in points {
                all_dates.insert(p.date);
            }
        }
        let dates: Vec<NaiveDate> = all_dates.into_iter().collect();

        let columns = symbols
            .iter()
            .map(|symbol| {
                let by_date: HashMap<NaiveDate, f64> = series
                    .remove(symbol)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|p| (p.date, p.close))
                    .collect();
                PriceColumn {
                    symbol: symbol.clone(),
                    values: dates
                        .iter()
                        .map(|d| by_date.get(d).copied().filter(|c| c.is_finite()))
                        .collect(),
                }
            })
            .collect();

        Self { dates, columns }
    }

    /// True when the table holds no rows or no columns at all.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty() || self.columns.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.dates.len()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn columns(&self) -> &[PriceColumn] {
        &self.columns
    }

    pub fn column(&self, symbol: &str) -> Option<&PriceColumn> {
        self.columns.iter().find(|c| c.symbol == symbol)
    }

    /// Project the table onto the requested symbols, in request order.
    /// A symbol absent from the table yields an all-missing column.
    pub fn select(&self, symbols: &[String]) -> Self {
        let columns = symbols
            .iter()
            .map(|symbol| match self.column(symbol) {
                Some(col) => col.clone(),
                None => PriceColumn {
                    symbol: symbol.clone(),
                    values: vec![None; self.dates.len()],
                },
            })
            .collect();
        Self {
            dates: self.dates.clone(),
            columns,
        }
    }

    /// Rows whose date falls within the range, inclusive on both ends.
    /// The date axis is sorted, so an out-of-domain range simply
    /// produces an empty slice; this never fails.
    pub fn slice(&self, range: &DateRange) -> Self {
        let lo = self.dates.partition_point(|d| *d < range.start);
        let hi = self.dates.partition_point(|d| *d <= range.end);
        Self {
            dates: self.dates[lo..hi].to_vec(),
            columns: self
                .columns
                .iter()
                .map(|c| PriceColumn {
                    symbol: c.symbol.clone(),
                    values: c.values[lo..hi].to_vec(),
                })
                .collect(),
        }
    }

    /// Drop rows where every column is missing.
    pub fn drop_all_missing_rows(&self) -> Self {
        let keep: Vec<usize> = (0..self.dates.len())
            .filter(|&row| self.columns.iter().any(|c| c.values[row].is_some()))
            .collect();

        Self {
            dates: keep.iter().map(|&row| self.dates[row]).collect(),
            columns: self
                .columns
                .iter()
                .map(|c| PriceColumn {
                    symbol: c.symbol.clone(),
                    values: keep.iter().map(|&row| c.values[row]).collect(),
                })
                .collect(),
        }
    }

    /// The non-missing points of one column, in date order.
    pub fn non_missing(&self, symbol: &str) -> Vec<PricePoint> {
        match self.column(symbol) {
            Some(col) => self
                .dates
                .iter()
                .zip(&col.values)
                .filter_map(|(date, value)| {
                    value.map(|close| PricePoint { date: *date, close })
                })
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Session-scoped store of fetched price tables, keyed by ticker set.
///
/// A table written for set K is visible to every later read of K within
/// the session. Entries are never invalidated or evicted; the expected
/// cardinality of distinct selections in one session is small.
#[derive(Debug, Clone, Default)]
pub struct PriceTableCache {
    entries: HashMap<TickerSet, PriceTable>,
}

impl PriceTableCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &TickerSet) -> Option<&PriceTable> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: TickerSet, table: PriceTable) {
        self.entries.insert(key, table);
    }

    pub fn contains(&self, key: &TickerSet) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of distinct ticker sets cached this session.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
