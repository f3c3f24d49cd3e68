pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use chrono::NaiveDate;
use std::path::PathBuf;

use errors::CoreError;
use models::{
    catalog::TickerCatalog,
    price::TickerSet,
    range::DateRange,
    region::Region,
    session::Session,
    view::DashboardView,
};
use providers::traits::MarketDataProvider;
use services::{
    catalog_service::CatalogService, chart_service::ChartService,
    market_data_service::MarketDataService, performance_service::PerformanceService,
    range_resolver::{RangeResolver, Resolution},
};

/// Main entry point for the stock-dashboard core library.
/// Holds the session state and all services needed to operate on it.
///
/// One interaction is one full pass: catalog → fetch-or-cache-hit →
/// resolve → compute → view. Single-threaded by design; the only
/// suspension point is the provider call inside [`render`].
///
/// [`render`]: StockDashboard::render
#[must_use]
pub struct StockDashboard {
    session: Session,
    catalog: TickerCatalog,
    sources_dir: PathBuf,
    catalog_service: CatalogService,
    market_data: MarketDataService,
    chart_service: ChartService,
    performance_service: PerformanceService,
    range_resolver: RangeResolver,
}

impl std::fmt::Debug for StockDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StockDashboard")
            .field("enabled_regions", &self.session.settings.enabled_regions)
            .field("catalog_entries", &self.catalog.len())
            .field("selected", &self.session.selected_labels.len())
            .field("date_range", &self.session.date_range)
            .field("cached_selections", &self.session.price_cache.len())
            .finish()
    }
}

impl StockDashboard {
    /// Create a dashboard backed by Yahoo Finance, loading the
    /// regional ticker tables from `sources_dir`. All regions start
    /// enabled; a region whose source is unreadable simply offers no
    /// tickers.
    pub fn new(sources_dir: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let market_data = MarketDataService::with_default_provider()?;
        Ok(Self::build(sources_dir.into(), market_data))
    }

    /// Create a dashboard with a custom market-data provider.
    /// Use this to run against a mock or an alternative upstream.
    pub fn with_provider(
        sources_dir: impl Into<PathBuf>,
        provider: Box<dyn MarketDataProvider>,
    ) -> Self {
        Self::build(sources_dir.into(), MarketDataService::new(provider))
    }

    // ── Regions & Catalog ───────────────────────────────────────────

    /// Toggle a region on or off and rebuild the catalog.
    ///
    /// Enabled regions always merge in `Region::ALL` order, so the
    /// reverse-lookup tie-break stays stable regardless of toggle
    /// order. Selected labels that disappear from the rebuilt catalog
    /// are dropped from the selection.
    pub fn set_region_enabled(&mut self, region: Region, enabled: bool) {
        let current = &self.session.settings.enabled_regions;
        let next: Vec<Region> = Region::ALL
            .iter()
            .copied()
            .filter(|r| if *r == region { enabled } else { current.contains(r) })
            .collect();
        self.session.settings.enabled_regions = next;
        self.reload_catalog();
    }

    /// Each region with its current toggle state, in fixed order.
    #[must_use]
    pub fn region_states(&self) -> Vec<(Region, bool)> {
        Region::ALL
            .iter()
            .map(|&r| (r, self.session.settings.is_region_enabled(r)))
            .collect()
    }

    #[must_use]
    pub fn catalog(&self) -> &TickerCatalog {
        &self.catalog
    }

    /// All selectable display labels, in catalog load order.
    #[must_use]
    pub fn available_labels(&self) -> Vec<&str> {
        self.catalog.labels().collect()
    }

    // ── Selection ───────────────────────────────────────────────────

    /// Add a display label to the selection. Selecting an already
    /// selected label is a no-op.
    pub fn select_label(&mut self, label: &str) -> Result<(), CoreError> {
        if !self.catalog.contains_label(label) {
            return Err(CoreError::UnknownLabel(label.to_string()));
        }
        if !self.session.selected_labels.iter().any(|l| l == label) {
            self.session.selected_labels.push(label.to_string());
        }
        Ok(())
    }

    /// Remove a label from the selection. Returns whether it was selected.
    pub fn deselect_label(&mut self, label: &str) -> bool {
        let before = self.session.selected_labels.len();
        self.session.selected_labels.retain(|l| l != label);
        self.session.selected_labels.len() != before
    }

    pub fn clear_selection(&mut self) {
        self.session.selected_labels.clear();
    }

    #[must_use]
    pub fn selected_labels(&self) -> &[String] {
        &self.session.selected_labels
    }

    /// Canonical symbols of the current selection, in selection order.
    #[must_use]
    pub fn selected_symbols(&self) -> Vec<String> {
        self.session
            .selected_labels
            .iter()
            .filter_map(|label| self.catalog.symbol_for(label))
            .map(str::to_string)
            .collect()
    }

    // ── Controls ────────────────────────────────────────────────────

    /// Set the date window. Persisted across renders until changed.
    pub fn set_date_range(&mut self, start: NaiveDate, end: NaiveDate) -> Result<(), CoreError> {
        self.session.date_range = DateRange::new(start, end)?;
        Ok(())
    }

    #[must_use]
    pub fn date_range(&self) -> DateRange {
        self.session.date_range
    }

    /// Set the starting amount for the projected-value line.
    /// Must be finite and non-negative; zero disables the projection.
    pub fn set_starting_capital(&mut self, capital: f64) -> Result<(), CoreError> {
        if !capital.is_finite() || capital < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "starting capital must be a non-negative number, got {capital}"
            )));
        }
        self.session.settings.starting_capital = capital;
        Ok(())
    }

    #[must_use]
    pub fn starting_capital(&self) -> f64 {
        self.session.settings.starting_capital
    }

    // ── Render pass ─────────────────────────────────────────────────

    /// Run one full recomputation pass for the current session state.
    ///
    /// Halting conditions surface as errors the frontend must show:
    /// no regions enabled (or no catalog entries), nothing selected,
    /// an empty fetch, or a window and fallback both without usable
    /// data. A fallback resolution is non-fatal; the view carries the
    /// originally requested range for the warning text.
    pub async fn render(&mut self) -> Result<DashboardView, CoreError> {
        if self.catalog.is_empty() {
            return Err(CoreError::NoRegionsEnabled);
        }

        let symbols = self.selected_symbols();
        if symbols.is_empty() {
            return Err(CoreError::NoTickersSelected);
        }
        let ticker_set = TickerSet::new(symbols.iter().cloned());

        // The fetched table borrows the cache, so take the cache out
        // of the session for the duration of the pass and put it back
        // before returning.
        let mut price_cache = std::mem::take(&mut self.session.price_cache);
        let resolution = self
            .market_data
            .fetch(&mut price_cache, &ticker_set)
            .await
            .map(|table| {
                if table.is_empty() {
                    None
                } else {
                    Some(
                        self.range_resolver
                            .resolve(table, &symbols, &self.session.date_range),
                    )
                }
            });
        self.session.price_cache = price_cache;

        let (filtered, fallback_from) = match resolution? {
            None => return Err(CoreError::FetchEmpty),
            Some(Resolution::Empty) => return Err(CoreError::NoUsableData),
            Some(Resolution::InRange(table)) => (table, None),
            Some(Resolution::Fallback(table)) => (table, Some(self.session.date_range)),
        };

        let chart = self
            .chart_service
            .price_lines(&filtered, &symbols, &self.catalog);
        let performance = self.performance_service.compute(
            &filtered,
            &symbols,
            &self.catalog,
            self.session.settings.starting_capital,
        );

        Ok(DashboardView {
            chart,
            performance,
            fallback_from,
        })
    }

    /// Run a render pass and serialize the view as pretty JSON.
    pub async fn render_json(&mut self) -> Result<String, CoreError> {
        let view = self.render().await?;
        Ok(serde_json::to_string_pretty(&view)?)
    }

    // ── Cache Inspection ────────────────────────────────────────────

    /// Number of distinct ticker sets fetched this session.
    #[must_use]
    pub fn cached_selection_count(&self) -> usize {
        self.session.price_cache.len()
    }

    /// Name of the market-data provider behind the fetcher.
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.market_data.provider_name()
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(sources_dir: PathBuf, market_data: MarketDataService) -> Self {
        let session = Session::new();
        let catalog_service = CatalogService::new();
        let catalog =
            catalog_service.build_catalog(&sources_dir, &session.settings.enabled_regions);

        Self {
            session,
            catalog,
            sources_dir,
            catalog_service,
            market_data,
            chart_service: ChartService::new(),
            performance_service: PerformanceService::new(),
            range_resolver: RangeResolver::new(),
        }
    }

    fn reload_catalog(&mut self) {
        self.catalog = self
            .catalog_service
            .build_catalog(&self.sources_dir, &self.session.settings.enabled_regions);
        let catalog = &self.catalog;
        self.session
            .selected_labels
            .retain(|label| catalog.contains_label(label));
    }
}
