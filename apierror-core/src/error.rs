/// Errors produced by the `apierror-core` crate.
///
/// [`StructuredError`](crate::StructuredError) is itself a value describing a
/// failure; `CoreError` only covers the crate's own fallible operations, which
/// are the JSON encoding helpers.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// The error value could not be rendered as JSON.
    #[error("failed to encode error payload: {0}")]
    Encode(#[source] serde_json::Error),

    /// The input was not a valid error payload.
    #[error("failed to decode error payload: {0}")]
    Decode(#[source] serde_json::Error),
}
