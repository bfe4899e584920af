//! Extraction report types.
//!
//! A report is built fresh for every call and owned by the caller; the
//! extractor keeps no reference to it.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::patterns::{Category, PatternDefinition};

/// Matches found for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryResult {
    /// Copy of the definition that produced these matches.
    pub pattern: PatternDefinition,

    /// Unique matches in first-occurrence order.
    pub matches: Vec<String>,

    /// Raw match count, duplicates included.
    pub total_count: usize,

    /// Number of unique matches.
    pub unique_count: usize,
}

impl CategoryResult {
    /// A result with no matches.
    #[must_use]
    pub fn empty(pattern: PatternDefinition) -> Self {
        Self {
            pattern,
            matches: Vec::new(),
            total_count: 0,
            unique_count: 0,
        }
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.pattern.category
    }

    #[must_use]
    pub const fn has_matches(&self) -> bool {
        self.total_count > 0
    }

    /// Number of raw matches that repeated an earlier one.
    #[must_use]
    pub const fn duplicate_count(&self) -> usize {
        self.total_count.saturating_sub(self.unique_count)
    }
}

/// Aggregate figures over all categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    /// Raw matches summed over every category.
    pub total_matches: usize,

    /// Categories with at least one match.
    pub patterns_with_matches: usize,

    /// Length of the input in characters.
    pub text_length: usize,

    /// Categories evaluated.
    pub total_patterns: usize,
}

/// Result of one extraction call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionReport {
    /// Per-category results, iterated in declaration order.
    pub results: BTreeMap<Category, CategoryResult>,

    pub summary: Summary,
}

impl ExtractionReport {
    /// Assemble a report and compute its summary.
    #[must_use]
    pub fn from_results(results: impl IntoIterator<Item = CategoryResult>, text: &str) -> Self {
        let results: BTreeMap<Category, CategoryResult> = results
            .into_iter()
            .map(|result| (result.category(), result))
            .collect();

        let summary = Summary {
            total_matches: results.values().map(|r| r.total_count).sum(),
            patterns_with_matches: results.values().filter(|r| r.has_matches()).count(),
            text_length: text.chars().count(),
            total_patterns: results.len(),
        };

        Self { results, summary }
    }

    /// Result for a single category.
    #[must_use]
    pub fn category(&self, category: Category) -> Option<&CategoryResult> {
        self.results.get(&category)
    }

    /// Unique matches for a category, empty when the category was not evaluated.
    #[must_use]
    pub fn matches(&self, category: Category) -> &[String] {
        self.category(category)
            .map(|result| result.matches.as_slice())
            .unwrap_or_default()
    }

    /// Results in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryResult> {
        self.results.values()
    }

    /// Results with at least one match, in declaration order.
    pub fn with_matches(&self) -> impl Iterator<Item = &CategoryResult> {
        self.iter().filter(|result| result.has_matches())
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.summary.total_matches == 0
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(category: Category, matches: &[&str], total_count: usize) -> CategoryResult {
        CategoryResult {
            pattern: *category.definition(),
            matches: matches.iter().map(ToString::to_string).collect(),
            total_count,
            unique_count: matches.len(),
        }
    }

    #[test]
    fn summary_counts() {
        let report = ExtractionReport::from_results(
            [
                result(Category::Hashtags, &["#a"], 3),
                result(Category::Emails, &[], 0),
                result(Category::Currency, &["$1", "$2"], 2),
            ],
            "héllo",
        );

        assert_eq!(report.summary.total_matches, 5);
        assert_eq!(report.summary.patterns_with_matches, 2);
        assert_eq!(report.summary.total_patterns, 3);
        assert_eq!(report.summary.text_length, 5);
        assert!(!report.is_empty());
    }

    #[test]
    fn iterates_in_declaration_order() {
        let report = ExtractionReport::from_results(
            [
                result(Category::Hashtags, &[], 0),
                result(Category::Emails, &[], 0),
                result(Category::Times, &[], 0),
            ],
            "",
        );

        let order: Vec<Category> = report.iter().map(CategoryResult::category).collect();
        assert_eq!(
            order,
            vec![Category::Emails, Category::Times, Category::Hashtags]
        );
    }

    #[test]
    fn missing_category_has_no_matches() {
        let report = ExtractionReport::from_results(Vec::new(), "");
        assert!(report.category(Category::Urls).is_none());
        assert!(report.matches(Category::Urls).is_empty());
        assert!(report.is_empty());
    }

    #[test]
    fn duplicate_count() {
        let r = result(Category::Hashtags, &["#a"], 3);
        assert_eq!(r.duplicate_count(), 2);
        assert!(!CategoryResult::empty(*Category::Urls.definition()).has_matches());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn serializes_by_category_key() {
        let report =
            ExtractionReport::from_results([result(Category::Currency, &["$5"], 1)], "$5");
        let json: serde_json::Value =
            serde_json::from_str(&report.to_json().expect("report should serialize"))
                .expect("valid JSON should parse");

        assert_eq!(json["results"]["currency"]["matches"][0], "$5");
        assert_eq!(json["results"]["currency"]["pattern"]["key"], "currency");
        assert_eq!(json["results"]["currency"]["total_count"], 1);
        assert_eq!(json["summary"]["text_length"], 2);
    }
}
