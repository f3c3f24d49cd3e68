use crate::models::price::PriceTable;
use crate::models::range::DateRange;

/// Outcome of resolving a date window against the fetched table.
///
/// The three cases are explicit so callers can distinguish "rows
/// found", "window empty, full history substituted", and "nothing
/// usable at all" instead of inferring them from table shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The requested window held data; the table is the cleaned slice.
    InRange(PriceTable),

    /// The window held no rows; the table is the full available
    /// history for the selection. Callers should surface a warning
    /// naming the originally requested range.
    Fallback(PriceTable),

    /// Neither the window nor the full history holds any usable data.
    /// Callers must halt: no chart, no performance section.
    Empty,
}

impl Resolution {
    pub fn used_fallback(&self) -> bool {
        matches!(self, Resolution::Fallback(_))
    }

    pub fn table(&self) -> Option<&PriceTable> {
        match self {
            Resolution::InRange(t) | Resolution::Fallback(t) => Some(t),
            Resolution::Empty => None,
        }
    }
}

/// Restricts the fetched table to the user's date window, falling back
/// to the full available history when the window is empty.
///
/// Pure: no I/O, no state. Resolving the same table and range twice
/// yields identical output.
pub struct RangeResolver;

impl RangeResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve `range` against `table` for the requested tickers.
    ///
    /// 1. Project the table onto the requested columns.
    /// 2. Slice rows with date in [start, end] inclusive. The date
    ///    axis is sorted, so a window outside the table's domain just
    ///    slices empty; nothing here can fail.
    /// 3. A non-empty slice wins; otherwise substitute the full
    ///    selected history.
    /// 4. Either way, drop rows where every requested ticker is
    ///    missing. An empty result after cleanup is `Empty`.
    pub fn resolve(&self, table: &PriceTable, tickers: &[String], range: &DateRange) -> Resolution {
        let selected = table.select(tickers);

        let sliced = selected.slice(range);
        if sliced.row_count() > 0 {
            let cleaned = sliced.drop_all_missing_rows();
            if cleaned.row_count() > 0 {
                return Resolution::InRange(cleaned);
            }
            // Rows existed in the window but every cell was missing.
            return Resolution::Empty;
        }

        let fallback = selected.drop_all_missing_rows();
        if fallback.row_count() > 0 {
            Resolution::Fallback(fallback)
        } else {
            Resolution::Empty
        }
    }
}

impl Default for RangeResolver {
    fn default() -> Self {
        Self::new()
    }
}
