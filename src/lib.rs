//! Course planner: loads a course catalog into an ordered binary search tree
//! and answers listing and prerequisite queries over it.

pub mod config;
pub mod course;
pub mod error;
pub mod loader;
pub mod logging;
pub mod presenter;
pub mod report;
pub mod store;

pub use course::{Course, CourseCode};
pub use error::CatalogError;
pub use loader::LoadSummary;
pub use presenter::Session;
pub use store::OrderedCourseStore;
