//! Structured error values for API-style error responses.
//!
//! A [`StructuredError`] carries a status code, a message and an ordered list
//! of [`Detail`] entries. Errors are compared with [`StructuredError::is`], a
//! relaxed check that looks at codes and the reasons of [`ErrorDetail`]
//! records rather than at every field, and matched through `source()` chains
//! with [`chain_is`].

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod detail;
pub mod equivalence;
pub mod error;
pub mod status;

pub use detail::{Detail, ErrorDetail};
pub use equivalence::{chain_is, Equivalent};
pub use error::CoreError;
pub use status::StructuredError;
