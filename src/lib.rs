pub mod catalog;
pub mod error;
pub mod logging;
pub mod menu;
pub mod render;

pub use catalog::{
    CatalogStore, Course, CourseId, CourseIndex, DEFAULT_CATALOG_PATH, HeaderPolicy, LoadOptions,
    LoadSummary, ResolvedCourse, ResolvedPrerequisite, normalize, parse_line,
};
pub use error::{LoadError, LoadWarning};
pub use menu::Menu;

use anyhow::{Context, Result};
use std::env;
use std::env::VarError;
use std::path::{Path, PathBuf};

const ENV_CATALOG_PATH: &str = "COURSEPLAN_CATALOG";
const ENV_HEADER_POLICY: &str = "COURSEPLAN_HEADER";

/// Pick the catalog path: explicit flag, then `COURSEPLAN_CATALOG`, then the default.
pub fn resolve_catalog_path(cli_override: Option<&Path>) -> PathBuf {
    catalog_path_from(cli_override, env_non_empty(ENV_CATALOG_PATH))
}

fn catalog_path_from(cli_override: Option<&Path>, env_value: Option<String>) -> PathBuf {
    if let Some(path) = cli_override {
        return path.to_path_buf();
    }
    env_value
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH))
}

/// Pick the header policy: explicit flag, then `COURSEPLAN_HEADER`, then `detect`.
pub fn resolve_load_options(cli_header: Option<&str>) -> Result<LoadOptions> {
    load_options_from(cli_header, env_non_empty(ENV_HEADER_POLICY).as_deref())
}

fn load_options_from(cli_header: Option<&str>, env_value: Option<&str>) -> Result<LoadOptions> {
    let header = match (cli_header, env_value) {
        (Some(raw), _) => HeaderPolicy::try_from(raw).context("parsing --header")?,
        (None, Some(raw)) => {
            HeaderPolicy::try_from(raw).with_context(|| format!("parsing {ENV_HEADER_POLICY}"))?
        }
        (None, None) => HeaderPolicy::default(),
    };
    Ok(LoadOptions { header })
}

fn env_non_empty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        Ok(_) => None,
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(os)) => Some(os.to_string_lossy().into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_path_prefers_cli_then_env_then_default() {
        let cli = PathBuf::from("cli.csv");
        assert_eq!(
            catalog_path_from(Some(&cli), Some("env.csv".to_string())),
            cli
        );
        assert_eq!(
            catalog_path_from(None, Some("env.csv".to_string())),
            PathBuf::from("env.csv")
        );
        assert_eq!(
            catalog_path_from(None, None),
            PathBuf::from(DEFAULT_CATALOG_PATH)
        );
    }

    #[test]
    fn load_options_prefer_cli_over_env() {
        let options = load_options_from(Some("none"), Some("skip")).unwrap();
        assert_eq!(options.header, HeaderPolicy::Never);
        let options = load_options_from(None, Some("skip")).unwrap();
        assert_eq!(options.header, HeaderPolicy::Always);
        let options = load_options_from(None, None).unwrap();
        assert_eq!(options.header, HeaderPolicy::Detect);
    }

    #[test]
    fn load_options_reject_unknown_policy() {
        let err = load_options_from(None, Some("maybe")).unwrap_err();
        assert!(format!("{err:#}").contains("COURSEPLAN_HEADER"));
    }
}
