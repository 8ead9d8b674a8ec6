// crates/route-core/src/error.rs

//! # Errors
//!
//! A single error enum for the whole core. Resolution misses are
//! recoverable (`NotFound`), load-time problems are fatal
//! (`MalformedRecord`, `Configuration`), and the travel-time model refuses
//! distances its adjustment curves cannot handle (`DegenerateDistance`).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    /// The query did not match any gazetteer name exactly.
    #[error("No entry for '{0}' in the gazetteer")]
    NotFound(String),

    /// A city record failed validation (empty name, coordinate out of range).
    #[error("Invalid city record: {0}")]
    InvalidRecord(String),

    /// A gazetteer row could not be turned into a city record.
    #[error("Malformed record at row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    /// The mode table (or another load-time input) is unusable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The distance is below what the mode's adjustment curve supports.
    #[error("Distance {distance_km} km is too short for a meaningful {mode} estimate")]
    DegenerateDistance { mode: String, distance_km: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "csv")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    /// The source format is not supported by the enabled features.
    #[error("Unsupported source: {0}")]
    Unsupported(String),
}

pub type Result<T> = std::result::Result<T, RouteError>;
