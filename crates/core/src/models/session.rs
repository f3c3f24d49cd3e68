use super::price::PriceTableCache;
use super::range::DateRange;
use super::settings::Settings;

/// The main state container for one dashboard session.
///
/// Everything the user can change between render passes lives here:
/// region toggles and starting capital (settings), the persisted date
/// window, the current label selection, and the fetched-table cache.
/// Created at session start, discarded at session end; read and
/// written only within a single logical interaction at a time.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub settings: Settings,

    /// The [start, end] window, persisted across interactions until
    /// explicitly changed.
    pub date_range: DateRange,

    /// Currently selected display labels, in selection order.
    pub selected_labels: Vec<String>,

    /// Fetched price tables keyed by ticker set. Never evicted.
    pub price_cache: PriceTableCache,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }
}
