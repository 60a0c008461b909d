use crate::catalog::CourseId;
use std::fmt;
use thiserror::Error;

/// Fatal catalog load failures. The store keeps its previous catalog on either.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not open or read '{source_name}'")]
    SourceUnreadable {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no valid course rows were loaded from '{source_name}'")]
    NoValidRows {
        source_name: String,
        /// Warnings raised before the load gave up.
        warnings: Vec<LoadWarning>,
    },
}

impl LoadError {
    pub fn source_name(&self) -> &str {
        match self {
            LoadError::SourceUnreadable { source_name, .. }
            | LoadError::NoValidRows { source_name, .. } => source_name,
        }
    }

    /// Warnings collected before the failure; empty for unreadable sources.
    pub fn warnings(&self) -> &[LoadWarning] {
        match self {
            LoadError::SourceUnreadable { .. } => &[],
            LoadError::NoValidRows { warnings, .. } => warnings,
        }
    }
}

/// Non-fatal diagnostics raised while reading a catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadWarning {
    InsufficientFields { line: usize },
    DuplicateIdentifier { line: usize, id: CourseId },
    HeaderSkipped { line: usize },
}

impl LoadWarning {
    /// 1-based source line the warning refers to.
    pub fn line(&self) -> usize {
        match self {
            LoadWarning::InsufficientFields { line }
            | LoadWarning::DuplicateIdentifier { line, .. }
            | LoadWarning::HeaderSkipped { line } => *line,
        }
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::InsufficientFields { line } => {
                write!(f, "insufficient fields at line {line}; skipping")
            }
            LoadWarning::DuplicateIdentifier { line, id } => write!(
                f,
                "duplicate identifier {id} at line {line}; using last occurrence"
            ),
            LoadWarning::HeaderSkipped { line } => write!(f, "header row at line {line} skipped"),
        }
    }
}
