//! Literal, case-insensitive substring search.
//!
//! User input is never compiled into a pattern. Backends either compare
//! lower-cased strings directly or use [`SearchPattern::like_pattern`] with
//! [`LIKE_ESCAPE`] as the escape character.

/// Escape character used in generated `LIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPattern {
    needle: String,
}

impl SearchPattern {
    /// Match values containing `query`, ignoring case.
    pub fn contains(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// The lower-cased search text.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }

    /// `%needle%` with `%`, `_` and the escape character itself escaped.
    /// Compare it against a lower-cased column.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.needle.len() + 2);
        pattern.push('%');
        for c in self.needle.chars() {
            if matches!(c, '%' | '_' | LIKE_ESCAPE) {
                pattern.push(LIKE_ESCAPE);
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}
