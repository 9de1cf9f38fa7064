use thiserror::Error;

/// Failures the core reports to its caller.
///
/// Empty search results and unfillable plan cells are not errors; they come
/// back as empty collections or unassigned cells.
#[derive(Debug, Error)]
pub enum Error {
    /// Body metrics that must never reach the calorie calculator.
    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    /// The paginated catalog fetch failed after retries. Callers that can
    /// degrade should use the sample-set fallback instead of surfacing this.
    #[error("meal catalog unavailable")]
    CatalogUnavailable(#[source] anyhow::Error),
}
