//! Request body validation
//!
//! Bodies are parsed and then checked with the `validator` derive before a
//! handler ever sees them, so no store call happens for an invalid request.

pub mod extractor;

pub use extractor::ValidatedJson;
