pub mod auth;
pub mod home;
pub mod recipe;
pub mod report_card;
pub mod student;

use serde::de::DeserializeOwned;

/// Parse a raw query string, falling back to the unfiltered default when it is malformed.
pub(crate) fn parse_query<T: DeserializeOwned + Default>(raw_query: Option<&str>) -> T {
    raw_query
        .map(serde_qs::from_str)
        .transpose()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, query = raw_query.unwrap_or_default(), "ignoring malformed query string");
            None
        })
        .unwrap_or_default()
}
