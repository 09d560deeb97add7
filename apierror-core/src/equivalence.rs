//! Matching errors against expected error shapes across `source()` chains.

use std::error::Error;

use crate::status::StructuredError;

/// A hook for "is this error the same kind as that one" checks.
///
/// Unlike `PartialEq`, the target is an arbitrary error; implementors decide
/// which target types they can be equivalent to.
pub trait Equivalent {
    /// Reports whether `self` is equivalent to `target`.
    fn equivalent_to(&self, target: &(dyn Error + 'static)) -> bool;
}

impl Equivalent for StructuredError {
    /// A target that is not a [`StructuredError`] is never equivalent.
    fn equivalent_to(&self, target: &(dyn Error + 'static)) -> bool {
        target
            .downcast_ref::<StructuredError>()
            .is_some_and(|target| self.is(target))
    }
}

/// Walks `err` and its `source()` chain, returning `true` as soon as a
/// [`StructuredError`] link is equivalent to `target`.
///
/// Links of other types are skipped, so a `StructuredError` wrapped inside an
/// application error is still found.
#[must_use]
pub fn chain_is(err: &(dyn Error + 'static), target: &(dyn Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(link) = current {
        if let Some(status) = link.downcast_ref::<StructuredError>() {
            if status.equivalent_to(target) {
                return true;
            }
        }
        current = link.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;
    use crate::detail::ErrorDetail;

    #[derive(Debug)]
    struct Unrelated;

    impl fmt::Display for Unrelated {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("unrelated")
        }
    }

    impl Error for Unrelated {}

    #[test]
    fn foreign_target_is_never_equivalent() {
        let err = StructuredError::new(500, "internal");
        assert!(!err.equivalent_to(&Unrelated));
    }

    #[test]
    fn structured_target_defers_to_is() {
        let err = StructuredError::with_initial_details(
            400,
            "bad",
            [ErrorDetail::new("field_invalid", "name")],
        );
        let target = StructuredError::with_initial_details(
            400,
            "",
            [ErrorDetail::new("field_invalid", "age")],
        );
        assert!(err.equivalent_to(&target));
        assert!(!err.equivalent_to(&StructuredError::new(400, "bad")));
    }

    #[test]
    fn chain_is_checks_the_error_itself() {
        let err = StructuredError::new(404, "missing");
        assert!(chain_is(&err, &StructuredError::new(404, "")));
        assert!(!chain_is(&err, &StructuredError::new(410, "")));
        assert!(!chain_is(&Unrelated, &StructuredError::new(404, "")));
    }
}
