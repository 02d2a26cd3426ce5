//! Loading course records into the store.

mod delimited;
mod spreadsheet;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::course::Course;
use crate::error::{CatalogError, Result};
use crate::store::OrderedCourseStore;
pub use delimited::{FIELD_DELIMITER, course_from_fields, load_from_reader, parse_line};
pub use spreadsheet::load_from_workbook;

/// Outcome of one load.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Records added to the store.
    pub inserted: usize,
    /// Records whose number was already stored; the earlier record was kept.
    pub duplicates: usize,
    /// Blank or malformed lines.
    pub skipped: usize,
}

impl LoadSummary {
    fn record(&mut self, store: &mut OrderedCourseStore, course: Course) {
        log::debug!("Loaded course: {} - {}", course.number(), course.name());
        let number = course.number().to_owned();
        if store.insert(course) {
            self.inserted += 1;
        } else {
            log::info!("Duplicate course {number} ignored; keeping the first record");
            self.duplicates += 1;
        }
    }
}

fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"))
}

/// Loads `path` into `store`, picking the reader from the file extension.
/// On an unreadable source nothing is inserted.
pub fn load_from_path(store: &mut OrderedCourseStore, path: impl AsRef<Path>) -> Result<LoadSummary> {
    let path = path.as_ref();
    let summary = if is_workbook(path) {
        load_from_workbook(store, path)?
    } else {
        let file = File::open(path).map_err(|source| CatalogError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        load_from_reader(store, BufReader::new(file))?
    };
    log::info!(
        "Loaded {} courses from {} ({} duplicates, {} lines skipped)",
        summary.inserted,
        path.display(),
        summary.duplicates,
        summary.skipped
    );
    Ok(summary)
}
