//! Cleanup rules applied to the bulk dataset before validation.

use serde::{Deserialize, Serialize};

/// A single field-level cleanup rule.
///
/// Rules form an ordered sequence; declaration order is semantically
/// significant (a later rule observes earlier rules' output) and is never
/// reordered or optimized away. The union is closed on purpose: each
/// variant is testable in isolation and the strict left-to-right fold stays
/// trivial to reason about.
///
/// The serialized form implies the variant: a rule object with a
/// `replacement` key is a `Replace`, one without is an `Exclude`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CleanupRule {
    /// Rewrite every cell in `field` exactly equal to `match`.
    Replace {
        field: String,
        #[serde(rename = "match")]
        matches: String,
        replacement: String,
    },
    /// Drop every row whose `field` cell exactly equals `match`.
    Exclude {
        field: String,
        #[serde(rename = "match")]
        matches: String,
    },
}

impl CleanupRule {
    pub fn replace(
        field: impl Into<String>,
        matches: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self::Replace {
            field: field.into(),
            matches: matches.into(),
            replacement: replacement.into(),
        }
    }

    pub fn exclude(field: impl Into<String>, matches: impl Into<String>) -> Self {
        Self::Exclude {
            field: field.into(),
            matches: matches.into(),
        }
    }

    /// The column this rule targets.
    pub fn field(&self) -> &str {
        match self {
            Self::Replace { field, .. } | Self::Exclude { field, .. } => field,
        }
    }
}
