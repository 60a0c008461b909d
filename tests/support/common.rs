#![allow(dead_code)]

use anyhow::{Context, Result};
use courseplan::{CatalogStore, LoadError, LoadSummary};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Catalog shaped like the advising program's sample input.
pub const SAMPLE_CATALOG: &str = "\
MATH201,Discrete Mathematics
CSCI300,Introduction to Algorithms,CSCI200,MATH201
CSCI350,Operating Systems,CSCI300
CSCI101,Introduction to Programming in C++,CSCI100
CSCI100,Introduction to Computer Science
CSCI301,Advanced Programming in C++,CSCI101
CSCI400,Large Software Development,CSCI301,CSCI350
CSCI200,Data Structures,CSCI101
";

// Temporary directory holding catalog fixtures; removed on drop.
pub struct CatalogDir {
    dir: TempDir,
}

impl CatalogDir {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new().context("failed to allocate catalog dir")?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, contents)
            .with_context(|| format!("failed to write fixture {}", path.display()))?;
        Ok(path)
    }

    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

pub fn load_text(store: &mut CatalogStore, text: &str) -> Result<LoadSummary, LoadError> {
    store.load_from_reader(Cursor::new(text.as_bytes()), "fixture.csv")
}

pub fn ids(store: &CatalogStore) -> Vec<String> {
    store
        .list_all()
        .into_iter()
        .map(|course| course.id.to_string())
        .collect()
}

pub fn query_binary() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_course-query"));
    cmd.env_remove("COURSEPLAN_CATALOG")
        .env_remove("COURSEPLAN_HEADER")
        .env_remove("RUST_LOG");
    cmd
}

pub fn planner_binary() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_course-planner"));
    cmd.env_remove("COURSEPLAN_CATALOG")
        .env_remove("COURSEPLAN_HEADER")
        .env_remove("RUST_LOG");
    cmd
}

pub fn stdout_of(output: &Output) -> Result<String> {
    String::from_utf8(output.stdout.clone()).context("stdout utf-8")
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
