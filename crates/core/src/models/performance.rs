use serde::{Deserialize, Serialize};

/// Outcome of the return calculation for one selected ticker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TickerReturn {
    /// Fewer than two non-missing points in the filtered window.
    Insufficient,
    /// First value was zero, or a value was not a finite number.
    Invalid,
    /// Simple return over the window: final / initial - 1.
    Computed(f64),
}

impl TickerReturn {
    /// The multiplier this ticker contributes to the equal-weighted
    /// portfolio aggregate. Insufficient/Invalid stay in the average
    /// at a neutral 1.0 rather than being excluded.
    pub fn growth_multiplier(&self) -> f64 {
        match self {
            TickerReturn::Computed(r) => 1.0 + r,
            TickerReturn::Insufficient | TickerReturn::Invalid => 1.0,
        }
    }

    /// Color tone the frontend should use for this result.
    pub fn tone(&self) -> Tone {
        match self {
            TickerReturn::Computed(r) if *r > 0.0 => Tone::Positive,
            TickerReturn::Computed(r) if *r < 0.0 => Tone::Negative,
            _ => Tone::Neutral,
        }
    }
}

/// Render hint for percentage output: green, red, or unstyled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    pub fn of(value: f64) -> Tone {
        if value > 0.0 {
            Tone::Positive
        } else if value < 0.0 {
            Tone::Negative
        } else {
            Tone::Neutral
        }
    }
}

/// Per-ticker row of the performance summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPerformance {
    /// Canonical symbol the calculation ran on.
    pub symbol: String,

    /// Display label resolved from the catalog (first-loaded label
    /// wins when several map to the same symbol). Falls back to the
    /// symbol itself when no label survives a catalog rebuild.
    pub label: String,

    pub result: TickerReturn,
}

/// The full performance section: per-asset rows plus the equal-weighted
/// portfolio aggregate. Derived, stateless, recomputed every render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub assets: Vec<AssetPerformance>,

    /// Arithmetic mean of (1 + return) across all selected tickers,
    /// minus 1. Every selected ticker counts in the denominator.
    pub portfolio_return: f64,

    /// starting_capital × (1 + portfolio_return), present only when a
    /// positive starting capital was supplied.
    pub projected_value: Option<f64>,
}
