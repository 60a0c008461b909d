//! Text rendering for listings and course lookups.

use crate::catalog::{Course, ResolvedCourse, ResolvedPrerequisite};

/// `"<identifier>, <title>"`
pub fn course_line(id: &str, title: &str) -> String {
    format!("{id}, {title}")
}

/// `"Prerequisites: None"` or the comma-joined resolved list.
pub fn prerequisites_line(prerequisites: &[ResolvedPrerequisite]) -> String {
    if prerequisites.is_empty() {
        return "Prerequisites: None".to_string();
    }
    let entries: Vec<String> = prerequisites.iter().map(prerequisite_entry).collect();
    format!("Prerequisites: {}", entries.join(", "))
}

fn prerequisite_entry(prereq: &ResolvedPrerequisite) -> String {
    match &prereq.title {
        Some(title) => format!("{} {}", prereq.id, title),
        None => prereq.id.to_string(),
    }
}

/// One course line per course, newline terminated.
pub fn render_listing(courses: &[Course]) -> String {
    courses
        .iter()
        .map(|course| course_line(course.id.as_str(), &course.title) + "\n")
        .collect()
}

/// Course line followed by its prerequisites line, newline terminated.
pub fn render_course(course: &ResolvedCourse) -> String {
    format!(
        "{}\n{}\n",
        course_line(course.id.as_str(), &course.title),
        prerequisites_line(&course.prerequisites)
    )
}
