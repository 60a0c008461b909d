//! Interactive advising session.
//!
//! `Menu` reads numbered choices from any `BufRead` and writes prompts and
//! results to any `Write`, so the binary wires it to stdin/stdout and tests
//! drive it with in-memory buffers. End of input behaves like choosing exit.

use crate::catalog::{CatalogStore, DEFAULT_CATALOG_PATH};
use crate::render::{render_course, render_listing};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::Path;

const MENU_TEXT: &str = "1. Load Data Structure.\n2. Print Course List.\n3. Print Course.\n9. Exit\nWhat would you like to do? ";
const NOT_LOADED: &str = "Please load the data structure first (option 1).";
const FAREWELL: &str = "Thank you for using the course planner!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Choice {
    Load,
    List,
    Show,
    Exit,
    Invalid(i64),
}

impl From<i64> for Choice {
    fn from(value: i64) -> Self {
        match value {
            1 => Choice::Load,
            2 => Choice::List,
            3 => Choice::Show,
            9 => Choice::Exit,
            other => Choice::Invalid(other),
        }
    }
}

/// Parse the leading integer of a menu response; anything else is 0.
/// A number too large for `i64` also reads as 0, which is never a menu option.
fn parse_choice(line: &str) -> i64 {
    let line = line.trim_start();
    let sign_len = usize::from(line.starts_with(['+', '-']));
    let digits_len = line[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    line[..sign_len + digits_len].parse().unwrap_or(0)
}

/// Options 2 and 3 stay closed until a load succeeds in this session, and
/// close again after a failed load even though the store keeps its catalog.
#[derive(Debug, Default)]
pub struct Menu {
    store: CatalogStore,
    loaded: bool,
}

impl Menu {
    pub fn new(store: CatalogStore) -> Self {
        let loaded = store.is_loaded();
        Self { store, loaded }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Run the session until the user exits or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        writeln!(output, "Welcome to the course planner.")?;

        loop {
            write!(output, "{MENU_TEXT}")?;
            output.flush().context("flushing menu prompt")?;

            let Some(line) = read_line(&mut input)? else {
                writeln!(output, "\n{FAREWELL}")?;
                break;
            };

            match Choice::from(parse_choice(&line)) {
                Choice::Load => self.load(&mut input, &mut output)?,
                Choice::List => self.list(&mut output)?,
                Choice::Show => self.show(&mut input, &mut output)?,
                Choice::Exit => {
                    writeln!(output, "{FAREWELL}")?;
                    break;
                }
                Choice::Invalid(value) => writeln!(output, "{value} is not a valid option.")?,
            }
        }

        output.flush().context("flushing session output")?;
        Ok(())
    }

    fn load<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        write!(
            output,
            "Enter the file name to load (e.g., {DEFAULT_CATALOG_PATH}): "
        )?;
        output.flush()?;
        let file_name = read_line(input)?.unwrap_or_default();
        let file_name = file_name.trim();
        if file_name.is_empty() {
            writeln!(output, "File name cannot be empty.")?;
            return Ok(());
        }

        match self.store.load(Path::new(file_name)) {
            Ok(summary) => {
                for warning in &summary.warnings {
                    writeln!(output, "Warning: {warning}")?;
                }
                writeln!(output, "Data loaded successfully.")?;
                self.loaded = true;
            }
            Err(err) => {
                self.loaded = false;
                for warning in err.warnings() {
                    writeln!(output, "Warning: {warning}")?;
                }
                writeln!(output, "Error: {err}")?;
                writeln!(
                    output,
                    "Failed to load data. Please check the file and try again."
                )?;
            }
        }
        Ok(())
    }

    fn list<W: Write>(&self, output: &mut W) -> Result<()> {
        if !self.loaded {
            writeln!(output, "{NOT_LOADED}")?;
            return Ok(());
        }
        writeln!(output, "Here is a sample schedule:")?;
        write!(output, "{}", render_listing(&self.store.list_all()))?;
        Ok(())
    }

    fn show<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<()> {
        if !self.loaded {
            writeln!(output, "{NOT_LOADED}")?;
            return Ok(());
        }
        write!(output, "What course do you want to know about? ")?;
        output.flush()?;
        let query = read_line(input)?.unwrap_or_default();
        match self.store.lookup(&query) {
            Some(course) => write!(output, "{}", render_course(&course))?,
            None => writeln!(output, "Course not found.")?,
        }
        Ok(())
    }
}

// Returns `None` at end of input; strips the line terminator.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = String::new();
    let read = input.read_line(&mut buf).context("reading menu input")?;
    if read == 0 {
        return Ok(None);
    }
    let trimmed_len = buf.trim_end_matches(['\n', '\r']).len();
    buf.truncate(trimmed_len);
    Ok(Some(buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_choice_reads_leading_integer() {
        assert_eq!(parse_choice("1"), 1);
        assert_eq!(parse_choice("  9  "), 9);
        assert_eq!(parse_choice("3abc"), 3);
        assert_eq!(parse_choice("-4"), -4);
        assert_eq!(parse_choice("abc"), 0);
        assert_eq!(parse_choice(""), 0);
        assert_eq!(parse_choice("+"), 0);
        assert_eq!(parse_choice("99999999999999999999"), 0);
        assert_eq!(Choice::from(parse_choice("99999999999999999999")), Choice::Invalid(0));
    }

    #[test]
    fn new_menu_opens_gate_for_preloaded_store() {
        let mut store = CatalogStore::default();
        store
            .load_from_reader(std::io::Cursor::new("CSCI100,Intro\n"), "inline.csv")
            .unwrap();
        assert!(Menu::new(store).loaded);
        assert!(!Menu::default().loaded);
    }

    #[test]
    fn choice_maps_menu_numbers() {
        assert_eq!(Choice::from(1), Choice::Load);
        assert_eq!(Choice::from(2), Choice::List);
        assert_eq!(Choice::from(3), Choice::Show);
        assert_eq!(Choice::from(9), Choice::Exit);
        assert_eq!(Choice::from(5), Choice::Invalid(5));
    }

    #[test]
    fn read_line_strips_crlf() {
        let mut input = std::io::Cursor::new("csci300\r\nnext\n");
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("csci300"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("next"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }
}
