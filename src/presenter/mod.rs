//! Interactive menu session over any line reader and text writer.

mod menu;

use std::fmt;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::course::Course;
use crate::error::CatalogError;
use crate::loader::{self, LoadSummary};
use crate::report;
use crate::store::OrderedCourseStore;
pub use menu::{InvalidChoice, MENU_TEXT, MenuChoice};

const PREREQUISITES_LABEL: &str = "Prerequisites: ";
/// Second and later prerequisites start in column 17, one past the end of the label.
const CONTINUATION_INDENT: usize = 16;

/// Canonical form of a typed course number: trimmed and upper case.
pub fn normalize_key(input: &str) -> String {
    input.trim().to_uppercase()
}

/// A prerequisite reference, resolved against the store when possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prerequisite<'a> {
    Found(&'a Course),
    Missing(&'a str),
}

/// A course together with its resolved prerequisites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDetails<'a> {
    pub course: &'a Course,
    pub prerequisites: Vec<Prerequisite<'a>>,
}

pub fn course_details<'a>(store: &'a OrderedCourseStore, number: &str) -> Option<CourseDetails<'a>> {
    let course = store.find(number)?;
    let prerequisites = course
        .prerequisites()
        .iter()
        .map(|key| match store.find(key) {
            Some(found) => Prerequisite::Found(found),
            None => Prerequisite::Missing(key.as_str()),
        })
        .collect();
    Some(CourseDetails { course, prerequisites })
}

impl fmt::Display for Prerequisite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prerequisite::Found(course) => write!(f, "{}, {}", course.number(), course.name()),
            Prerequisite::Missing(key) => write!(f, "{key} (Course not found)"),
        }
    }
}

impl fmt::Display for CourseDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}, {}", self.course.number(), self.course.name())?;
        write!(f, "{PREREQUISITES_LABEL}")?;
        if self.prerequisites.is_empty() {
            return write!(f, "None");
        }
        for (i, prerequisite) in self.prerequisites.iter().enumerate() {
            if i > 0 {
                write!(f, "\n{:width$}", "", width = CONTINUATION_INDENT)?;
            }
            write!(f, "{prerequisite}")?;
        }
        Ok(())
    }
}

/// Writes the ascending `<number>: <name>` listing, or the empty-store notice.
pub fn write_course_list<W: Write>(out: &mut W, store: &OrderedCourseStore) -> std::io::Result<()> {
    if store.is_empty() {
        return writeln!(out, "No courses available.");
    }
    writeln!(out, "Here is a sample schedule:")?;
    for course in store {
        writeln!(out, "{}: {}", course.number(), course.name())?;
    }
    Ok(())
}

enum Flow {
    Continue,
    Quit,
}

/// One user's menu session. Owns the store and remembers whether a load has succeeded.
pub struct Session<R, W> {
    store: OrderedCourseStore,
    data_loaded: bool,
    preload: Option<PathBuf>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session {
            store: OrderedCourseStore::new(),
            data_loaded: false,
            preload: None,
            input,
            output,
        }
    }

    /// Loads `path` right after the greeting, before the first menu.
    pub fn with_preload(mut self, path: impl Into<PathBuf>) -> Self {
        self.preload = Some(path.into());
        self
    }

    pub fn store(&self) -> &OrderedCourseStore {
        &self.store
    }

    pub fn data_loaded(&self) -> bool {
        self.data_loaded
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to the course planner.")?;
        if let Some(path) = self.preload.take() {
            self.load(&path.to_string_lossy())?;
        }
        loop {
            write!(self.output, "{}", *MENU_TEXT)?;
            let Some(line) = self.prompt("What would you like to do? ")? else {
                break;
            };
            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(invalid) => {
                    log::debug!("Rejected menu input {invalid:?}");
                    writeln!(self.output, "{invalid}")?;
                    continue;
                }
            };
            if let Flow::Quit = self.dispatch(choice)? {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        if matches!(choice, MenuChoice::PrintList | MenuChoice::PrintCourse | MenuChoice::Export) && !self.data_loaded {
            writeln!(self.output, "Please load data first (option 1).")?;
            return Ok(Flow::Continue);
        }
        match choice {
            MenuChoice::Load => {
                let Some(source) = self.prompt("Enter the file name containing the course data: ")? else {
                    return Ok(Flow::Quit);
                };
                self.load(source.trim())?;
            }
            MenuChoice::PrintList => write_course_list(&mut self.output, &self.store)?,
            MenuChoice::PrintCourse => {
                let Some(number) = self.prompt("What course do you want to know about? ")? else {
                    return Ok(Flow::Quit);
                };
                self.print_course(&normalize_key(&number))?;
            }
            MenuChoice::Export => {
                let Some(target) = self.prompt("Enter the output file name: ")? else {
                    return Ok(Flow::Quit);
                };
                self.export(target.trim())?;
            }
            MenuChoice::Exit => {
                writeln!(self.output, "Thank you for using the course planner!")?;
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Loads `source` into the store and reports the outcome. A failed load
    /// is reported to the user and leaves the session state as it was.
    pub fn load(&mut self, source: &str) -> Result<Option<LoadSummary>> {
        match loader::load_from_path(&mut self.store, source) {
            Ok(summary) => {
                self.data_loaded = true;
                writeln!(self.output, "Data loaded successfully.")?;
                Ok(Some(summary))
            }
            Err(err @ CatalogError::SourceUnreadable { .. }) => {
                log::warn!("{err}");
                writeln!(self.output, "Error opening file: {source}")?;
                Ok(None)
            }
            Err(err) => {
                log::warn!("{err}");
                writeln!(self.output, "Error reading file: {source}")?;
                Ok(None)
            }
        }
    }

    /// Prints one course and its prerequisites. `number` is matched exactly.
    pub fn print_course(&mut self, number: &str) -> Result<()> {
        match course_details(&self.store, number) {
            Some(details) => writeln!(self.output, "{details}")?,
            None => writeln!(self.output, "Course not found.")?,
        }
        Ok(())
    }

    fn export(&mut self, target: &str) -> Result<()> {
        match report::export_course_list(&self.store, Path::new(target)) {
            Ok(()) => writeln!(self.output, "Course list exported to {target}.")?,
            Err(err) => {
                log::warn!("{err}");
                writeln!(self.output, "Error writing file: {target}")?;
            }
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }
}
