//! The fixed pattern table.
//!
//! Six categories, declared in the order they are evaluated and reported.
//! Character classes are spelled out in ASCII (`[0-9]`, `[A-Za-z0-9_]`) so
//! that digits and word characters mean exactly what the rules intend,
//! independent of the engine's Unicode defaults. Word boundaries are ASCII
//! (`(?-u:\b)`) and whitespace is a fixed set of code points.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::ExtractError;

/// Category key of a pattern definition.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Category {
    Emails = 0,
    Phones = 1,
    Urls = 2,
    Currency = 3,
    Times = 4,
    Hashtags = 5,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Emails,
        Self::Phones,
        Self::Urls,
        Self::Currency,
        Self::Times,
        Self::Hashtags,
    ];

    /// Returns the category key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Emails => "emails",
            Self::Phones => "phones",
            Self::Urls => "urls",
            Self::Currency => "currency",
            Self::Times => "times",
            Self::Hashtags => "hashtags",
        }
    }

    /// Position of this category in the pattern table.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The definition registered for this category.
    #[must_use]
    pub fn definition(self) -> &'static PatternDefinition {
        &PATTERN_TABLE[self.index()]
    }
}

impl FromStr for Category {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "emails" => Ok(Self::Emails),
            "phones" => Ok(Self::Phones),
            "urls" => Ok(Self::Urls),
            "currency" => Ok(Self::Currency),
            "times" => Ok(Self::Times),
            "hashtags" => Ok(Self::Hashtags),
            _ => Err("unknown category"),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Definition of a single extraction pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternDefinition {
    /// Unique category key.
    #[serde(rename = "key")]
    pub category: Category,

    /// Human-readable name.
    pub name: &'static str,

    /// Decorative icon for display.
    pub icon: &'static str,

    /// Regex source of the matching rule.
    pub pattern: &'static str,
}

/// Members of a whitespace class: ASCII blanks, no-break and typographic
/// spaces, line and paragraph separators and the byte order mark. U+0085 is
/// not whitespace here.
macro_rules! space_class {
    () => {
        r"\t\n\v\f\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}"
    };
}

/// The built-in pattern table, indexed by [`Category::index`].
pub static PATTERN_TABLE: [PatternDefinition; 6] = [
    PatternDefinition {
        category: Category::Emails,
        name: "Email Addresses",
        icon: "📧",
        pattern: r"(?-u:\b)[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}(?-u:\b)",
    },
    PatternDefinition {
        category: Category::Phones,
        name: "Phone Numbers",
        icon: "📞",
        pattern: concat!(
            r"(?:\([0-9]{3}\)[",
            space_class!(),
            r"]?|[0-9]{3}[-.",
            space_class!(),
            r"]?)[0-9]{3}[-.",
            space_class!(),
            r"]?[0-9]{4}"
        ),
    },
    PatternDefinition {
        category: Category::Urls,
        name: "URLs",
        icon: "🌐",
        pattern: r"https?://[-A-Za-z0-9_.]+(?::[0-9]+)?(?:/[A-Za-z0-9_/.]*(?:\?[A-Za-z0-9_&=%.]*)?(?:#[A-Za-z0-9_.]*)?)?",
    },
    PatternDefinition {
        category: Category::Currency,
        name: "Currency Amounts",
        icon: "💰",
        pattern: r"\$[0-9]{1,3}(?:,[0-9]{3})*(?:\.[0-9]{2})?",
    },
    PatternDefinition {
        category: Category::Times,
        name: "Time Formats",
        icon: "⏰",
        pattern: concat!(
            r"(?:[01]?[0-9]|2[0-3]):[0-5][0-9](?:[",
            space_class!(),
            r"]?[AaPp][Mm])?|[0-9]{1,2}:[0-5][0-9][",
            space_class!(),
            r"]?[AaPp][Mm]"
        ),
    },
    PatternDefinition {
        category: Category::Hashtags,
        name: "Hashtags",
        icon: "#️⃣",
        pattern: r"#[A-Za-z0-9_]+",
    },
];

/// A pattern definition paired with its compiled regex.
#[derive(Debug)]
pub(crate) struct CompiledPattern {
    pub definition: &'static PatternDefinition,
    pub regex: Regex,
}

impl PatternDefinition {
    /// Compile the matching rule.
    pub(crate) fn build(&'static self) -> Result<CompiledPattern, ExtractError> {
        let regex = Regex::new(self.pattern).map_err(|source| ExtractError::Pattern {
            category: self.category,
            source,
        })?;

        Ok(CompiledPattern {
            definition: self,
            regex,
        })
    }
}

static COMPILED: OnceLock<Vec<CompiledPattern>> = OnceLock::new();

/// Compiled pattern table, built once per process.
///
/// Concurrent first callers may each compile the table; only one result is
/// kept.
pub(crate) fn compiled_patterns() -> Result<&'static [CompiledPattern], ExtractError> {
    if let Some(patterns) = COMPILED.get() {
        return Ok(patterns);
    }

    let built = PATTERN_TABLE
        .iter()
        .map(PatternDefinition::build)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(COMPILED.get_or_init(|| built))
}
