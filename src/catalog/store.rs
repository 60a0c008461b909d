//! Session-scoped catalog holder.
//!
//! A store starts empty and only ever changes on a successful load, which
//! replaces the whole index at once. Queries against an empty store are not
//! errors: `list_all` is empty and `lookup` finds nothing.

use crate::catalog::{Course, CourseIndex, LoadOptions, LoadedIndex, ResolvedCourse};
use crate::error::{LoadError, LoadWarning};
use std::io::BufRead;
use std::path::Path;
use tracing::info;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Outcome of a successful load.
pub struct LoadSummary {
    pub source_name: String,
    pub courses: usize,
    pub warnings: Vec<LoadWarning>,
}

#[derive(Debug, Default)]
pub struct CatalogStore {
    options: LoadOptions,
    index: Option<CourseIndex>,
}

impl CatalogStore {
    pub fn new(options: LoadOptions) -> Self {
        Self {
            options,
            index: None,
        }
    }

    /// True once any load has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.index.is_some()
    }

    /// The current index, if one has been loaded.
    pub fn index(&self) -> Option<&CourseIndex> {
        self.index.as_ref()
    }

    /// Load the catalog file at `path`, replacing the current catalog on success.
    pub fn load(&mut self, path: &Path) -> Result<LoadSummary, LoadError> {
        let loaded = CourseIndex::load(path, self.options)?;
        Ok(self.install(loaded))
    }

    /// Load catalog rows from a reader, replacing the current catalog on success.
    pub fn load_from_reader<R: BufRead>(
        &mut self,
        reader: R,
        source_name: &str,
    ) -> Result<LoadSummary, LoadError> {
        let loaded = CourseIndex::from_reader(reader, source_name, self.options)?;
        Ok(self.install(loaded))
    }

    fn install(&mut self, loaded: LoadedIndex) -> LoadSummary {
        let LoadedIndex { index, warnings } = loaded;
        let summary = LoadSummary {
            source_name: index.source_name().to_string(),
            courses: index.len(),
            warnings,
        };
        if let Some(previous) = self.index.replace(index) {
            info!(
                replaced = previous.source_name(),
                source = summary.source_name.as_str(),
                courses = summary.courses,
                "catalog replaced"
            );
        } else {
            info!(
                source = summary.source_name.as_str(),
                courses = summary.courses,
                "catalog loaded"
            );
        }
        summary
    }

    /// Every course in ascending ordinal id order.
    pub fn list_all(&self) -> Vec<Course> {
        self.index
            .as_ref()
            .map(|index| index.courses().cloned().collect())
            .unwrap_or_default()
    }

    /// Find a course by raw identifier and resolve its prerequisite titles.
    pub fn lookup(&self, raw: &str) -> Option<ResolvedCourse> {
        let index = self.index.as_ref()?;
        index.find(raw).map(|course| index.resolve(course))
    }
}
