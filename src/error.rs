//! Error types for loading and exporting the course catalog.
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Could not open course source {} (error: {source})", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not read course source (error: {0})")]
    Read(#[from] std::io::Error),
    #[error("Could not read workbook {} (error: {reason})", .path.display())]
    Spreadsheet { path: PathBuf, reason: String },
    #[error("Workbook {} has no worksheets", .path.display())]
    EmptyWorkbook { path: PathBuf },
    #[error("Could not write course list to {} (error: {reason})", .path.display())]
    Export { path: PathBuf, reason: String },
}

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
