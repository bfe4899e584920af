#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Deterministic extraction of emails, phone numbers, URLs, currency
//! amounts, times and hashtags from free-form text.
//!
//! The pattern table is fixed and process-wide. Every call to
//! [`Extractor::extract`] produces a fresh [`ExtractionReport`] owned by the
//! caller.

mod dedup;
pub mod error;
pub mod extractor;
pub mod patterns;
pub mod report;

pub use dedup::unique_in_order;
pub use error::{ExtractError, Result};
pub use extractor::Extractor;
pub use patterns::{Category, PATTERN_TABLE, PatternDefinition};
pub use report::{CategoryResult, ExtractionReport, Summary};

/// Extract every category from `text` using the shared pattern table.
#[must_use]
pub fn extract(text: &str) -> ExtractionReport {
    shared_extractor().extract(text)
}

#[expect(
    clippy::expect_used,
    reason = "Built-in pattern table is validated by the test suite"
)]
fn shared_extractor() -> Extractor {
    Extractor::new().expect("built-in patterns are guaranteed to compile")
}
