//! Course rows from the first worksheet of an `.xlsx` workbook.
//!
//! Column A holds the number, column B the name, and every later column a
//! prerequisite. Each row is read like a text line made of its cells, so a
//! cell may also carry several comma-separated prerequisites. A leading row
//! headed `Course Number` (as written by the exporter) is skipped.
use std::path::Path;

use super::LoadSummary;
use super::delimited::{FIELD_DELIMITER, parse_line};
use crate::error::{CatalogError, Result};
use crate::store::OrderedCourseStore;

pub const NUMBER_HEADER: &str = "Course Number";

pub fn load_from_workbook(store: &mut OrderedCourseStore, path: &Path) -> Result<LoadSummary> {
    if let Err(source) = std::fs::metadata(path) {
        return Err(CatalogError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        });
    }
    let book = umya_spreadsheet::reader::xlsx::read(path).map_err(|e| CatalogError::Spreadsheet {
        path: path.to_path_buf(),
        reason: format!("{e:?}"),
    })?;
    let sheet = book.get_sheet(&0).ok_or_else(|| CatalogError::EmptyWorkbook {
        path: path.to_path_buf(),
    })?;

    let last_row = sheet.get_highest_row();
    let last_col = sheet.get_highest_column();
    let delimiter = FIELD_DELIMITER.to_string();
    let mut summary = LoadSummary::default();
    for row in 1..=last_row {
        let cells: Vec<String> = (1..=last_col).map(|col| sheet.get_value((col, row))).collect();
        if row == 1 && cells.first().is_some_and(|c| c.trim() == NUMBER_HEADER) {
            continue;
        }
        let line = cells.join(delimiter.as_str());
        match parse_line(&line) {
            Some(course) => summary.record(store, course),
            None => {
                if cells.iter().any(|c| !c.trim().is_empty()) {
                    log::warn!("Skipping row {row} of {}: expected a course number and name", path.display());
                }
                summary.skipped += 1;
            }
        }
    }
    Ok(summary)
}
