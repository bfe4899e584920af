//! Extraction engine.
//!
//! Applies every pattern of the fixed table to the input, in declaration
//! order, and aggregates the matches into an [`ExtractionReport`].

use tracing::{debug, trace};

use crate::dedup::unique_in_order;
use crate::error::ExtractError;
use crate::patterns::{Category, CompiledPattern, PatternDefinition, compiled_patterns};
use crate::report::{CategoryResult, ExtractionReport};

/// Extractor over the built-in pattern table.
///
/// Holds only a reference to the process-wide compiled table, so it is cheap
/// to copy and safe to share between threads.
#[derive(Debug, Clone, Copy)]
pub struct Extractor {
    patterns: &'static [CompiledPattern],
}

impl Extractor {
    /// Create an extractor, compiling the pattern table on first use.
    ///
    /// # Errors
    /// Returns [`ExtractError::Pattern`] if a rule fails to compile.
    pub fn new() -> Result<Self, ExtractError> {
        Ok(Self {
            patterns: compiled_patterns()?,
        })
    }

    /// Pattern definitions in evaluation order.
    pub fn patterns(&self) -> impl ExactSizeIterator<Item = &'static PatternDefinition> + '_ {
        self.patterns.iter().map(|pattern| pattern.definition)
    }

    /// Extract every category from `text`.
    #[must_use]
    pub fn extract(&self, text: &str) -> ExtractionReport {
        trace!("Extracting from {} bytes", text.len());

        let results = self
            .patterns
            .iter()
            .map(|pattern| Self::apply_pattern(pattern, text));

        let report = ExtractionReport::from_results(results, text);

        debug!(
            "Extracted {} matches across {}/{} categories",
            report.summary.total_matches,
            report.summary.patterns_with_matches,
            report.summary.total_patterns
        );

        report
    }

    /// Extract a single category from `text`.
    #[must_use]
    pub fn extract_category(&self, category: Category, text: &str) -> CategoryResult {
        self.patterns
            .iter()
            .find(|pattern| pattern.definition.category == category)
            .map_or_else(
                || CategoryResult::empty(*category.definition()),
                |pattern| Self::apply_pattern(pattern, text),
            )
    }

    /// Extract from raw bytes, which must be UTF-8 text.
    ///
    /// # Errors
    /// Returns [`ExtractError::InvalidInput`] if `bytes` is not valid UTF-8.
    pub fn extract_bytes(&self, bytes: &[u8]) -> Result<ExtractionReport, ExtractError> {
        let text = std::str::from_utf8(bytes)?;
        Ok(self.extract(text))
    }

    /// Apply a single pattern to text.
    fn apply_pattern(pattern: &CompiledPattern, text: &str) -> CategoryResult {
        let raw: Vec<&str> = pattern
            .regex
            .find_iter(text)
            .map(|m| m.as_str())
            .collect();
        let matches = unique_in_order(raw.iter().copied());

        debug!(
            "{}: {} matches ({} unique)",
            pattern.definition.category,
            raw.len(),
            matches.len()
        );

        CategoryResult {
            pattern: *pattern.definition,
            total_count: raw.len(),
            unique_count: matches.len(),
            matches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn extractor() -> Extractor {
        Extractor::new().expect("built-in patterns should compile")
    }

    fn assert_only(report: &ExtractionReport, category: Category) {
        for result in report.iter() {
            if result.category() != category {
                assert_eq!(
                    result.total_count,
                    0,
                    "unexpected {} matches: {:?}",
                    result.category(),
                    result.matches
                );
            }
        }
    }

    #[test]
    fn evaluates_every_category_in_order() {
        let report = extractor().extract("");
        let order: Vec<Category> = report.iter().map(CategoryResult::category).collect();
        assert_eq!(order, Category::ALL.to_vec());
        assert_eq!(report.summary.total_patterns, 6);
    }

    #[test]
    fn empty_text_yields_zero_report() {
        let report = extractor().extract("");
        assert_eq!(report.summary.total_matches, 0);
        assert_eq!(report.summary.patterns_with_matches, 0);
        assert_eq!(report.summary.text_length, 0);
        for result in report.iter() {
            assert!(result.matches.is_empty());
            assert_eq!(result.total_count, 0);
            assert_eq!(result.unique_count, 0);
        }
    }

    #[test]
    fn emails_scenario() {
        let report = extractor().extract("Email: john.smith@company.com, support@techcorp.org");
        let emails = report.category(Category::Emails);
        assert_eq!(
            report.matches(Category::Emails),
            ["john.smith@company.com", "support@techcorp.org"]
        );
        assert_eq!(emails.map(|r| r.total_count), Some(2));
        assert_eq!(emails.map(|r| r.unique_count), Some(2));
        assert_only(&report, Category::Emails);
    }

    #[test]
    fn currency_scenario() {
        let report = extractor().extract("Price: $29.99");
        assert_eq!(report.matches(Category::Currency), ["$29.99"]);
        assert_only(&report, Category::Currency);
    }

    #[test]
    fn duplicate_hashtags_are_counted_once() {
        let report = extractor().extract("#CustomerService #CustomerService");
        let hashtags = report.category(Category::Hashtags);
        assert_eq!(report.matches(Category::Hashtags), ["#CustomerService"]);
        assert_eq!(hashtags.map(|r| r.total_count), Some(2));
        assert_eq!(hashtags.map(|r| r.unique_count), Some(1));
        assert_eq!(report.summary.total_matches, 2);
    }

    #[test]
    fn times_scenario() {
        let report = extractor().extract("Meeting time: 2:30 PM");
        assert_eq!(report.matches(Category::Times), ["2:30 PM"]);
        assert_only(&report, Category::Times);
    }

    #[test]
    fn plain_text_has_no_matches() {
        let report = extractor().extract("hello world");
        assert_eq!(report.summary.total_matches, 0);
        assert_eq!(report.summary.patterns_with_matches, 0);
        assert_eq!(report.summary.text_length, 11);
        assert!(report.iter().all(|r| r.matches.is_empty()));
    }

    #[test]
    fn extract_category_matches_full_report() {
        let text = "Ping #ops at 10:15 or mail ops@example.com #ops";
        let extractor = extractor();
        let report = extractor.extract(text);
        for category in Category::ALL {
            assert_eq!(
                Some(&extractor.extract_category(category, text)),
                report.category(category)
            );
        }
    }

    #[test]
    fn extract_bytes_rejects_non_utf8() {
        let err = extractor().extract_bytes(&[b'#', b'a', 0xc3, 0x28]);
        assert!(matches!(
            err,
            Err(ExtractError::InvalidInput { valid_up_to: 2 })
        ));
    }

    #[test]
    fn extract_bytes_accepts_text() {
        let Ok(report) = extractor().extract_bytes("#a #b".as_bytes()) else {
            panic!("UTF-8 input should extract");
        };
        assert_eq!(report.matches(Category::Hashtags), ["#a", "#b"]);
    }

    #[test]
    fn patterns_are_listed_in_order() {
        let keys: Vec<&str> = extractor().patterns().map(|p| p.category.as_str()).collect();
        assert_eq!(
            keys,
            ["emails", "phones", "urls", "currency", "times", "hashtags"]
        );
    }
}
