//! Fuzz target: decoding arbitrary bytes as an error payload.
//!
//! Decoding may fail, but must never panic. Anything that decodes must render
//! and re-encode.

#![no_main]

use apierror_core::StructuredError;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(payload) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(err) = StructuredError::from_json(payload) else {
        return;
    };

    let rendered = err.to_string();
    assert!(rendered.starts_with("error: code = "), "unexpected rendering: {rendered}");
    assert!(err.error_details().count() <= err.details().len());

    err.to_json().expect("decoded payload must re-encode");
});
