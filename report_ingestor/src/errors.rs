use thiserror::Error;

/// The unified error type for the `report_ingestor` crate.
///
/// Parsing itself never errors (sections degrade to empty); only reading the
/// report and re-serializing it can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// The report could not be read or decoded.
    #[error("Report source error: {0}")]
    Source(#[from] crate::io::source::SourceError),

    /// Serializing a parsed report failed.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
