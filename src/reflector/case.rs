//! Property name comparison rules.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// How property names are compared with handler names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseSensitivity {
    /// `"KEY"` matches `"key"`. Names are compared after a per-character,
    /// locale-independent upper-case fold that keeps characters whose
    /// upper case is more than one character (`ß`) unchanged.
    #[default]
    Insensitive,
    /// Names must match exactly.
    Sensitive,
}

impl CaseSensitivity {
    /// Check if names must match exactly.
    #[inline]
    pub fn is_sensitive(self) -> bool {
        self == Self::Sensitive
    }

    /// Comparison key for `name` under this rule.
    pub fn fold(self, name: &str) -> Cow<'_, str> {
        match self {
            Self::Sensitive => Cow::Borrowed(name),
            Self::Insensitive => Cow::Owned(name.chars().map(fold_char).collect()),
        }
    }

    /// Check if two names are equal under this rule.
    pub fn matches(self, a: &str, b: &str) -> bool {
        self.fold(a) == self.fold(b)
    }
}

/// Simple (one-to-one) upper-case mapping.
fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

impl From<bool> for CaseSensitivity {
    /// `true` means case-sensitive.
    fn from(case_sensitive: bool) -> Self {
        if case_sensitive {
            Self::Sensitive
        } else {
            Self::Insensitive
        }
    }
}
