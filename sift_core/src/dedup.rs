//! Order-preserving deduplication.

use std::collections::HashSet;

/// Unique items in first-occurrence order.
#[must_use]
pub fn unique_in_order<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for item in items {
        if seen.insert(item) {
            unique.push(item.to_string());
        }
    }

    unique
}
