//! One-shot catalog queries.
//!
//! Usage:
//!   course-query list
//!   course-query --catalog courses.csv show csci300
//!   course-query --json show CSCI300
//!
//! The catalog path comes from `--catalog`, then `COURSEPLAN_CATALOG`, then
//! `ABCU_Advising_Program_Input.csv` in the working directory. Load warnings
//! go to stderr; results go to stdout.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use courseplan::logging::init_tracing;
use courseplan::render::{render_course, render_listing};
use courseplan::{CatalogStore, LoadWarning, resolve_catalog_path, resolve_load_options};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "course-query")]
#[command(about = "List courses or show one course with its prerequisites")]
struct Cli {
    /// Catalog file (or set COURSEPLAN_CATALOG).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Header handling: detect, skip or none (or set COURSEPLAN_HEADER).
    #[arg(long, global = true)]
    header: Option<String>,
    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    json: bool,
    /// Increase log verbosity (-v warn, -vv info, -vvv debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every course in identifier order.
    List,
    /// Print one course and its prerequisites.
    Show {
        /// Course identifier, any case.
        course: String,
    },
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
    let catalog_path = resolve_catalog_path(cli.catalog.as_deref());
    let mut store = CatalogStore::new(options);
    let summary = match store.load(&catalog_path) {
        Ok(summary) => summary,
        Err(err) => {
            print_warnings(err.warnings());
            return Err(err)
                .with_context(|| format!("loading catalog {}", catalog_path.display()));
        }
    };
    print_warnings(&summary.warnings);

    match cli.command {
        Command::List => {
            let courses = store.list_all();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&courses)?);
            } else {
                print!("{}", render_listing(&courses));
            }
        }
        Command::Show { course } => {
            let Some(resolved) = store.lookup(&course) else {
                bail!("Course not found: {}", courseplan::normalize(&course));
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&resolved)?);
            } else {
                print!("{}", render_course(&resolved));
            }
        }
    }

    Ok(())
}

fn print_warnings(warnings: &[LoadWarning]) {
    for warning in warnings {
        eprintln!("course-query: warning: {warning}");
    }
}
