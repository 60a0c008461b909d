//! Indexed view of a course catalog file.
//!
//! The index is built in one pass over the source into a fresh map and is
//! only handed back when at least one row made it in. Malformed rows and
//! duplicate identifiers are reported as warnings and never abort the build.

use crate::catalog::{Course, CourseId, ResolvedCourse, ResolvedPrerequisite, parse_line};
use crate::error::{LoadError, LoadWarning};
use anyhow::bail;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

const BYTE_ORDER_MARK: char = '\u{feff}';

// First-field values that mark the first row as column names rather than a
// course. Compared after normalization.
const HEADER_LABELS: &[&str] = &[
    "COURSE",
    "COURSE NUMBER",
    "COURSE_NUMBER",
    "COURSENUMBER",
    "COURSE ID",
    "COURSE_ID",
    "ID",
    "NUMBER",
    "IDENTIFIER",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// How the first non-blank row of a catalog is treated.
pub enum HeaderPolicy {
    /// Skip the first row only when it looks like column names.
    #[default]
    Detect,
    /// Always skip the first row.
    Always,
    /// Treat every row as data.
    Never,
}

impl HeaderPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderPolicy::Detect => "detect",
            HeaderPolicy::Always => "skip",
            HeaderPolicy::Never => "none",
        }
    }

    fn skips(&self, first_row: &[&str]) -> bool {
        match self {
            HeaderPolicy::Always => true,
            HeaderPolicy::Never => false,
            HeaderPolicy::Detect => first_row
                .first()
                .map(|field| CourseId::new(field))
                .is_some_and(|label| HEADER_LABELS.contains(&label.as_str())),
        }
    }
}

impl TryFrom<&str> for HeaderPolicy {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> anyhow::Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "detect" => Ok(HeaderPolicy::Detect),
            "skip" | "always" => Ok(HeaderPolicy::Always),
            "none" | "never" => Ok(HeaderPolicy::Never),
            other => bail!("Unknown header policy: {other} (expected detect, skip or none)"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub header: HeaderPolicy,
}

#[derive(Debug)]
/// A freshly built index plus the warnings raised while building it.
pub struct LoadedIndex {
    pub index: CourseIndex,
    pub warnings: Vec<LoadWarning>,
}

#[derive(Clone, Debug)]
/// Courses keyed by canonical identifier.
pub struct CourseIndex {
    source_name: String,
    by_id: BTreeMap<CourseId, Course>,
}

impl CourseIndex {
    /// Open and index the catalog file at `path`.
    pub fn load(path: &Path, options: LoadOptions) -> Result<LoadedIndex, LoadError> {
        let source_name = path.display().to_string();
        let file = File::open(path).map_err(|source| LoadError::SourceUnreadable {
            source_name: source_name.clone(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), &source_name, options)
    }

    /// Index catalog rows from any buffered reader.
    ///
    /// `source_name` only labels diagnostics. Bytes that are not valid UTF-8
    /// are replaced rather than rejected, and a leading byte order mark is
    /// dropped. An I/O error part way through discards everything read so far.
    pub fn from_reader<R: BufRead>(
        mut reader: R,
        source_name: &str,
        options: LoadOptions,
    ) -> Result<LoadedIndex, LoadError> {
        let mut by_id: BTreeMap<CourseId, Course> = BTreeMap::new();
        let mut warnings: Vec<LoadWarning> = Vec::new();
        let mut saw_first_row = false;
        let mut buf: Vec<u8> = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| LoadError::SourceUnreadable {
                    source_name: source_name.to_string(),
                    source,
                })?;
            if read == 0 {
                break;
            }
            line_no += 1;

            let decoded = String::from_utf8_lossy(&buf);
            let mut line: &str = &decoded;
            if line_no == 1 {
                line = line.strip_prefix(BYTE_ORDER_MARK).unwrap_or(line);
            }
            let fields = parse_line(line);
            if fields.is_empty() {
                continue;
            }

            if !saw_first_row {
                saw_first_row = true;
                if options.header.skips(&fields) {
                    record(&mut warnings, source_name, LoadWarning::HeaderSkipped { line: line_no });
                    continue;
                }
            }

            let Some(course) = Course::from_fields(&fields) else {
                record(
                    &mut warnings,
                    source_name,
                    LoadWarning::InsufficientFields { line: line_no },
                );
                continue;
            };

            if by_id.contains_key(&course.id) {
                record(
                    &mut warnings,
                    source_name,
                    LoadWarning::DuplicateIdentifier {
                        line: line_no,
                        id: course.id.clone(),
                    },
                );
            }
            by_id.insert(course.id.clone(), course);
        }

        if by_id.is_empty() {
            return Err(LoadError::NoValidRows {
                source_name: source_name.to_string(),
                warnings,
            });
        }

        debug!(
            source = source_name,
            courses = by_id.len(),
            warnings = warnings.len(),
            "indexed course catalog"
        );
        Ok(LoadedIndex {
            index: Self {
                source_name: source_name.to_string(),
                by_id,
            },
            warnings,
        })
    }

    /// Name of the source this index was built from.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Resolve a course by canonical id.
    pub fn course(&self, id: &CourseId) -> Option<&Course> {
        self.by_id.get(id)
    }

    /// Resolve a course from raw text, normalizing it first.
    pub fn find(&self, raw: &str) -> Option<&Course> {
        self.by_id.get(CourseId::new(raw).as_str())
    }

    /// Iterates course ids in ordinal order.
    pub fn ids(&self) -> impl Iterator<Item = &CourseId> {
        self.by_id.keys()
    }

    /// Iterates courses in ordinal id order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.by_id.values()
    }

    /// Pair each prerequisite of `course` with its title, keeping stored order.
    pub fn resolve(&self, course: &Course) -> ResolvedCourse {
        let prerequisites = course
            .prerequisites
            .iter()
            .map(|id| ResolvedPrerequisite {
                id: id.clone(),
                title: self.course(id).map(|prereq| prereq.title.clone()),
            })
            .collect();
        ResolvedCourse {
            id: course.id.clone(),
            title: course.title.clone(),
            prerequisites,
        }
    }
}

fn record(warnings: &mut Vec<LoadWarning>, source_name: &str, warning: LoadWarning) {
    warn!(source = source_name, line = warning.line(), "{warning}");
    warnings.push(warning);
}
