//! Error types for the settlement core
//!
//! One root error enum covers the whole pipeline. Per-bet problems
//! (malformed coverage, catalog misses) are deliberately NOT errors; they
//! resolve through the matcher's non-match fallback so one bad catalog row
//! cannot abort settlement of a round.

/// Root error type for settlement operations
#[derive(Debug, thiserror::Error)]
pub enum SettlementError {
    /// The upstream descriptor yielded no valid winning number. The round
    /// caller should treat this as an operational alert, not a per-bet
    /// business outcome.
    #[error("could not parse winning number from result descriptor '{descriptor}'")]
    UnparseableResult { descriptor: String },

    /// A parsed integer fell outside the wheel domain. Never clamped.
    #[error("outcome {value} is outside the wheel domain 0..=36")]
    OutOfDomain { value: i64 },

    #[error("failed to load bet catalog from {path}: {reason}")]
    CatalogLoad { path: String, reason: String },

    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Convenience alias used throughout the crate
pub type SettlementResult<T> = Result<T, SettlementError>;
