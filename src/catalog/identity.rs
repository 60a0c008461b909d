//! Canonical course identifiers.
//!
//! Every identifier that reaches the index, whether read from a catalog row or
//! typed at a prompt, passes through [`normalize`] first. `CourseId` can only
//! be built that way, so the index never holds a non-canonical key.

use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

/// Trim surrounding whitespace and uppercase ASCII letters.
///
/// Total and pure: the empty string maps to the empty string and non-ASCII
/// characters pass through unchanged.
pub fn normalize(text: &str) -> String {
    text.trim().to_ascii_uppercase()
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
/// Course number in canonical form (for example `CSCI300`).
pub struct CourseId(String);

impl CourseId {
    /// Build an identifier from raw user or file text.
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CourseId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for CourseId {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl Borrow<str> for CourseId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CourseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_uppercases() {
        assert_eq!(normalize("  csci300\t"), "CSCI300");
        assert_eq!(normalize("Math201"), "MATH201");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn normalize_keeps_interior_whitespace_and_non_ascii() {
        assert_eq!(normalize(" intro  cs "), "INTRO  CS");
        assert_eq!(normalize("é101"), "é101");
    }

    #[test]
    fn course_id_orders_ordinally() {
        let mut ids = vec![
            CourseId::from("math201"),
            CourseId::from("CSCI300"),
            CourseId::from("csci101"),
            CourseId::from("CSCI2"),
        ];
        ids.sort();
        let ordered: Vec<&str> = ids.iter().map(CourseId::as_str).collect();
        assert_eq!(ordered, vec!["CSCI101", "CSCI2", "CSCI300", "MATH201"]);
    }
}
