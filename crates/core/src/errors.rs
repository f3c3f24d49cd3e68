use thiserror::Error;

/// Unified error type for the entire stock-dashboard-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Catalog / File ──────────────────────────────────────────────
    #[error("Catalog source for {region} could not be loaded: {message}")]
    CatalogLoad { region: String, message: String },

    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Selection ───────────────────────────────────────────────────
    #[error("No regions enabled — enable at least one region")]
    NoRegionsEnabled,

    #[error("No stocks selected — select at least one stock")]
    NoTickersSelected,

    #[error("Unknown stock label: {0}")]
    UnknownLabel(String),

    // ── Market data ─────────────────────────────────────────────────
    #[error("No price data returned — select at least one valid stock")]
    FetchEmpty,

    #[error("No price data available for the selected stocks")]
    NoUsableData,

    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    // ── Inputs ──────────────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}
