//! Input normalization: reduces a raw tracking string to its canonical
//! alphanumeric form before any rule is evaluated.

use serde::Serialize;

/// A tracking code with every non-alphanumeric character removed.
///
/// Case is preserved; the rules themselves match case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CanonicalCode(String);

impl CanonicalCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CanonicalCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Strips everything outside `[A-Za-z0-9]`. Total and idempotent; empty or
/// garbage input simply yields an empty canonical code.
pub fn normalize(raw: &str) -> CanonicalCode {
    CanonicalCode(raw.chars().filter(char::is_ascii_alphanumeric).collect())
}
