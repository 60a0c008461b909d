//! Course records and the row format they are read from.
//!
//! A catalog row is `ID,Title[,Prereq...]` with no quoting. Identifiers and
//! prerequisites are canonicalized on the way in; titles keep their case.

use crate::catalog::CourseId;
use serde::Serialize;

/// Field separator for catalog rows.
pub const FIELD_DELIMITER: char = ',';

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// One catalog entry.
pub struct Course {
    pub id: CourseId,
    pub title: String,
    /// Stored in input order; duplicates are kept.
    pub prerequisites: Vec<CourseId>,
}

impl Course {
    /// Build a course from already-split fields.
    ///
    /// Returns `None` when fewer than two fields are present. Empty
    /// prerequisite fields are dropped.
    pub fn from_fields(fields: &[&str]) -> Option<Self> {
        let [id, title, rest @ ..] = fields else {
            return None;
        };
        let prerequisites = rest
            .iter()
            .filter(|field| !field.trim().is_empty())
            .map(|field| CourseId::new(field))
            .collect();
        Some(Self {
            id: CourseId::new(id),
            title: title.trim().to_string(),
            prerequisites,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// A prerequisite reference paired with its title when the catalog has it.
pub struct ResolvedPrerequisite {
    pub id: CourseId,
    pub title: Option<String>,
}

impl ResolvedPrerequisite {
    pub fn is_resolved(&self) -> bool {
        self.title.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Result of a course lookup with prerequisites resolved in stored order.
pub struct ResolvedCourse {
    pub id: CourseId,
    pub title: String,
    pub prerequisites: Vec<ResolvedPrerequisite>,
}

/// Split a catalog row into trimmed fields.
///
/// Blank lines yield no fields. A single trailing delimiter does not create
/// an extra empty field; interior empty fields are kept so positions hold.
pub fn parse_line(line: &str) -> Vec<&str> {
    let line = line.trim();
    if line.is_empty() {
        return Vec::new();
    }
    let mut fields: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();
    if line.ends_with(FIELD_DELIMITER) {
        fields.pop();
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_trims_each_field() {
        assert_eq!(
            parse_line(" CSCI300 , Introduction to Algorithms ,CSCI200, MATH201 "),
            vec!["CSCI300", "Introduction to Algorithms", "CSCI200", "MATH201"]
        );
    }

    #[test]
    fn parse_line_blank_yields_nothing() {
        assert!(parse_line("").is_empty());
        assert!(parse_line(" \t ").is_empty());
    }

    #[test]
    fn parse_line_drops_only_trailing_empty_field() {
        assert_eq!(parse_line("CSCI300,"), vec!["CSCI300"]);
        assert_eq!(parse_line("CSCI300,A,,"), vec!["CSCI300", "A", ""]);
        assert_eq!(parse_line("CSCI300,,MATH201"), vec!["CSCI300", "", "MATH201"]);
    }

    #[test]
    fn from_fields_requires_id_and_title() {
        assert!(Course::from_fields(&[]).is_none());
        assert!(Course::from_fields(&["BADROW"]).is_none());
    }

    #[test]
    fn from_fields_normalizes_ids_but_not_title() {
        let course = Course::from_fields(&["csci300", "Intro to Algorithms", "csci200", "", "Math201"])
            .expect("two fields present");
        assert_eq!(course.id.as_str(), "CSCI300");
        assert_eq!(course.title, "Intro to Algorithms");
        let prereqs: Vec<&str> = course.prerequisites.iter().map(CourseId::as_str).collect();
        assert_eq!(prereqs, vec!["CSCI200", "MATH201"]);
    }

    #[test]
    fn from_fields_keeps_duplicate_prerequisites_in_order() {
        let course = Course::from_fields(&["CSCI400", "Systems", "MATH201", "CSCI200", "math201"])
            .expect("course");
        let prereqs: Vec<&str> = course.prerequisites.iter().map(CourseId::as_str).collect();
        assert_eq!(prereqs, vec!["MATH201", "CSCI200", "MATH201"]);
    }
}
