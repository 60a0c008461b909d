//! Course catalog wiring.
//!
//! Catalog files are plain comma-separated rows (`ID,Title,Prereq...`). This
//! module parses them into a `CourseIndex` keyed by canonical `CourseId`;
//! callers hold a `CatalogStore`, which swaps in a new index only when a load
//! succeeds.

pub mod identity;
pub mod index;
pub mod model;
pub mod store;

pub use identity::{CourseId, normalize};
pub use index::{CourseIndex, HeaderPolicy, LoadOptions, LoadedIndex};
pub use model::{Course, FIELD_DELIMITER, ResolvedCourse, ResolvedPrerequisite, parse_line};
pub use store::{CatalogStore, LoadSummary};

/// Catalog file name used when neither a flag nor `COURSEPLAN_CATALOG` names one.
pub const DEFAULT_CATALOG_PATH: &str = "ABCU_Advising_Program_Input.csv";
