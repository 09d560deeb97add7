//! Fuzz target: `StructuredError::is` between two decoded payloads.
//!
//! Input is split on the first NUL byte into a receiver and a target payload.

#![no_main]

use apierror_core::{Equivalent, StructuredError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some(split) = data.iter().position(|&b| b == 0) else {
        return;
    };
    let (Ok(left), Ok(right)) = (
        std::str::from_utf8(&data[..split]),
        std::str::from_utf8(&data[split + 1..]),
    ) else {
        return;
    };
    let (Ok(err), Ok(target)) = (StructuredError::from_json(left), StructuredError::from_json(right))
    else {
        return;
    };

    let matched = err.is(&target);
    assert_eq!(matched, err.equivalent_to(&target), "typed and untyped checks must agree");
    if matched {
        assert_eq!(err.code(), target.code(), "equivalent errors must share a code");
        assert_eq!(err.details().len(), target.details().len());
    }
});
