use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A typed reason and human-readable message attached to an error.
///
/// This is the only detail shape that takes part in
/// [`StructuredError::is`](crate::StructuredError::is) matching, and only its
/// `reason` is compared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct ErrorDetail {
    /// Typed error code (e.g. `"quota_exceeded"`).
    pub reason: String,
    /// Human-readable description of this detail.
    pub message: String,
}

impl ErrorDetail {
    /// Creates an `ErrorDetail` from any string-like reason and message.
    pub fn new(reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{reason:{} message:{}}}", self.reason, self.message)
    }
}

/// One entry in an error's detail list.
///
/// Payloads may carry details of any shape. Objects holding exactly a string
/// `reason` and a string `message` decode as [`Detail::Info`]; everything else
/// is kept verbatim as [`Detail::Other`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum Detail {
    /// A recognized [`ErrorDetail`] record.
    Info(ErrorDetail),
    /// Opaque structured data, preserved for display and encoding only.
    Other(Value),
}

impl Detail {
    /// Wraps arbitrary structured data as an opaque detail.
    pub fn other(value: impl Into<Value>) -> Self {
        Self::Other(value.into())
    }

    /// Returns the [`ErrorDetail`] if this entry is a recognized record.
    #[must_use]
    pub fn as_error_detail(&self) -> Option<&ErrorDetail> {
        match self {
            Self::Info(info) => Some(info),
            Self::Other(_) => None,
        }
    }
}

impl From<ErrorDetail> for Detail {
    fn from(info: ErrorDetail) -> Self {
        Self::Info(info)
    }
}

impl From<Value> for Detail {
    fn from(value: Value) -> Self {
        Self::Other(value)
    }
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info(info) => info.fmt(f),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Renders a detail list as `[a b c]`.
pub(crate) struct DetailList<'a>(pub(crate) &'a [Detail]);

impl fmt::Display for DetailList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, detail) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{detail}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn reason_and_message_object_decodes_as_info() {
        let detail: Detail = match serde_json::from_value(json!({"reason": "A", "message": "m"})) {
            Ok(d) => d,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(detail, Detail::Info(ErrorDetail::new("A", "m")));
    }

    #[test]
    fn object_with_extra_keys_stays_opaque() {
        let raw = json!({"reason": "A", "message": "m", "field": "name"});
        let detail: Detail = match serde_json::from_value(raw.clone()) {
            Ok(d) => d,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert!(detail.as_error_detail().is_none(), "extra keys must not be recognized");
        assert_eq!(detail, Detail::Other(raw));
    }

    #[test]
    fn object_missing_message_stays_opaque() {
        let detail: Detail = match serde_json::from_value(json!({"reason": "A"})) {
            Ok(d) => d,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert!(matches!(detail, Detail::Other(_)));
    }

    #[test]
    fn info_serializes_with_reason_and_message_keys() {
        let detail = Detail::from(ErrorDetail::new("quota_exceeded", "daily limit reached"));
        let value = match serde_json::to_value(&detail) {
            Ok(v) => v,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(value, json!({"reason": "quota_exceeded", "message": "daily limit reached"}));
    }

    #[test]
    fn detail_list_renders_every_entry_in_order() {
        let details = [
            Detail::from(ErrorDetail::new("A", "first")),
            Detail::other(json!({"retry_after": 30})),
            Detail::other("plain"),
        ];
        assert_eq!(
            DetailList(&details).to_string(),
            r#"[{reason:A message:first} {"retry_after":30} "plain"]"#
        );
        assert_eq!(DetailList(&[]).to_string(), "[]");
    }
}
