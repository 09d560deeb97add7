use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::detail::{Detail, DetailList, ErrorDetail};
use crate::error::CoreError;

/// An error response returned by an API.
///
/// Holds a status code, a message and an ordered list of [`Detail`] entries.
/// The value is built once where an operation fails, optionally extended with
/// [`with_details`](Self::with_details), and then only read, compared or
/// rendered.
///
/// Two values can be compared in two ways: derived `PartialEq` is strict
/// field-by-field equality, while [`is`](Self::is) asks whether both describe
/// the same kind of error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("error: code = {code} desc = {message} details = {}", DetailList(.details))]
#[non_exhaustive]
pub struct StructuredError {
    /// HTTP-style status code. Always populated.
    pub code: i32,
    /// Server message. Empty unless the producer set one.
    #[serde(default)]
    pub message: String,
    /// Additional context, in insertion order. Duplicates are allowed.
    #[serde(default)]
    pub details: Vec<Detail>,
}

impl StructuredError {
    /// Creates an error with no details.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Creates an error seeded with `details`, which may be of any shape.
    pub fn with_initial_details<I>(code: i32, message: impl Into<String>, details: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Detail>,
    {
        Self {
            code,
            message: message.into(),
            details: details.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates an error whose message is rendered from `args`.
    ///
    /// Usually reached through the [`structured_error!`](crate::structured_error)
    /// macro.
    #[must_use]
    pub fn from_args(code: i32, args: fmt::Arguments<'_>) -> Self {
        Self::new(code, fmt::format(args))
    }

    /// Appends `details` after the existing entries, keeping their order.
    pub fn with_details<I>(&mut self, details: I)
    where
        I: IntoIterator,
        I::Item: Into<Detail>,
    {
        let before = self.details.len();
        self.details.extend(details.into_iter().map(Into::into));
        tracing::trace!(
            code = self.code,
            appended = self.details.len() - before,
            total = self.details.len(),
            "details appended"
        );
    }

    #[must_use]
    pub fn code(&self) -> i32 {
        self.code
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn details(&self) -> &[Detail] {
        &self.details
    }

    /// Iterates over the recognized [`ErrorDetail`] records, skipping opaque entries.
    pub fn error_details(&self) -> impl Iterator<Item = &ErrorDetail> {
        self.details.iter().filter_map(Detail::as_error_detail)
    }

    /// Reports whether `self` is the same kind of error as `target`.
    ///
    /// Codes must match and both detail lists must have the same length. Two
    /// empty lists match. Otherwise every [`ErrorDetail`] in `target` whose
    /// reason appears among `self`'s records counts as one match, and the
    /// errors are equivalent when that count equals the number of records in
    /// `self`. Messages are never compared.
    ///
    /// The count is not deduplicated, so with repeated reasons or mixed
    /// detail shapes this is not set equality and not symmetric.
    #[must_use]
    pub fn is(&self, target: &StructuredError) -> bool {
        if self.code != target.code || self.details.len() != target.details.len() {
            return false;
        }
        if self.details.is_empty() {
            return true;
        }

        let recognized: Vec<&ErrorDetail> = self.error_details().collect();
        let matched = target
            .error_details()
            .filter(|t| recognized.iter().any(|r| r.reason == t.reason))
            .count();

        tracing::trace!(
            code = self.code,
            matched,
            recognized = recognized.len(),
            "compared error details"
        );
        matched == recognized.len()
    }

    /// Renders the error as a JSON payload with `code`, `message` and `details` keys.
    ///
    /// # Errors
    /// Returns [`CoreError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string(self).map_err(CoreError::Encode)
    }

    /// Decodes a JSON payload. `message` and `details` may be omitted.
    ///
    /// # Errors
    /// Returns [`CoreError::Decode`] if `payload` is not a valid error document.
    pub fn from_json(payload: &str) -> Result<Self, CoreError> {
        serde_json::from_str(payload).map_err(|e| {
            tracing::debug!(error = %e, "rejected error payload");
            CoreError::Decode(e)
        })
    }
}

impl FromStr for StructuredError {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

/// Builds a [`StructuredError`] with a formatted message.
///
/// ```
/// let err = apierror_core::structured_error!(404, "not found: {}", "id-1");
/// assert_eq!(err.message(), "not found: id-1");
/// ```
#[macro_export]
macro_rules! structured_error {
    ($code:expr, $($arg:tt)+) => {
        $crate::StructuredError::from_args($code, ::std::format_args!($($arg)+))
    };
}
