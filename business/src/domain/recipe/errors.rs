/// Failures of the remote recipe catalog.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// The catalog rejected the API key (HTTP 401).
    #[error("catalog.auth")]
    Auth,
    /// The daily request quota is spent (HTTP 402).
    #[error("catalog.quota_exceeded")]
    QuotaExceeded,
    /// Any other non-success status, or a transport-level failure
    /// (no status at all).
    #[error("catalog.network")]
    Network { status: Option<u16> },
}

/// Failures of the search and load-more operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// The query was empty or whitespace-only after trimming.
    #[error("search.query_empty")]
    EmptyQuery,
    /// Another search or load-more is already in flight.
    #[error("search.busy")]
    Busy,
    #[error("search.catalog")]
    Catalog(#[from] CatalogError),
}
