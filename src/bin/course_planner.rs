//! Interactive course planner.
//!
//! Presents the numbered menu on stdin/stdout. `--catalog` preloads a catalog
//! so listing and lookup work without choosing option 1 first.

use anyhow::{Context, Result};
use clap::Parser;
use courseplan::logging::init_tracing;
use courseplan::{CatalogStore, Menu, resolve_load_options};
use std::io::{stdin, stdout};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "course-planner")]
#[command(about = "Interactive course listing and prerequisite lookup")]
struct Cli {
    /// Catalog file to load before the menu starts.
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Header handling for catalog files: detect, skip or none (or set COURSEPLAN_HEADER).
    #[arg(long)]
    header: Option<String>,
    /// Increase log verbosity (-v warn, -vv info, -vvv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = resolve_load_options(cli.header.as_deref())?;
    let mut store = CatalogStore::new(options);

    if let Some(path) = &cli.catalog {
        let summary = store
            .load(path)
            .with_context(|| format!("loading catalog {}", path.display()))?;
        for warning in &summary.warnings {
            eprintln!("course-planner: warning: {warning}");
        }
    }

    let mut menu = Menu::new(store);
    menu.run(stdin().lock(), stdout().lock())
}
