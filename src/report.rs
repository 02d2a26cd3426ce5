//! Writes the ordered course list to an `.xlsx` workbook.
use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use serde::Serialize;

use crate::course::Course;
use crate::error::{CatalogError, Result};
use crate::store::OrderedCourseStore;

pub const SHEET_NAME: &str = "Courses";

/// One worksheet row. Headers come from the serde names.
#[derive(Serialize)]
struct CourseRow<'a> {
    #[serde(rename = "Course Number")]
    number: &'a str,
    #[serde(rename = "Course Name")]
    name: &'a str,
    #[serde(rename = "Prerequisites")]
    prerequisites: String,
}

impl<'a> From<&'a Course> for CourseRow<'a> {
    fn from(course: &'a Course) -> Self {
        CourseRow {
            number: course.number(),
            name: course.name(),
            prerequisites: course.prerequisites().join(", "),
        }
    }
}

fn build_workbook(store: &OrderedCourseStore) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header = Format::new().set_bold();
    let blank = CourseRow {
        number: "",
        name: "",
        prerequisites: String::new(),
    };
    worksheet.serialize_headers_with_format(0, 0, &blank, &header)?;
    for course in store {
        worksheet.serialize(&CourseRow::from(course))?;
    }
    worksheet.autofit();
    Ok(workbook)
}

/// Writes every stored course, ascending by number, to `path`.
pub fn export_course_list(store: &OrderedCourseStore, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let to_export_error = |e: XlsxError| CatalogError::Export {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };
    let mut workbook = build_workbook(store).map_err(to_export_error)?;
    workbook.save(path).map_err(to_export_error)?;
    log::info!("Exported {} courses to {}", store.len(), path.display());
    Ok(())
}
