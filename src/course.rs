//! The course record stored in the catalog.

/// Course number type, used as the ordering key of the store.
pub type CourseCode = String;

/// A catalog entry. Fields are fixed once the record is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    number: CourseCode,
    name: String,
    prerequisites: Vec<CourseCode>,
}

impl Course {
    pub fn new(number: impl Into<CourseCode>, name: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            prerequisites: Vec::new(),
        }
    }

    /// Builds a course with its prerequisite numbers in listing order.
    pub fn with_prerequisites<I, S>(number: impl Into<CourseCode>, name: impl Into<String>, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CourseCode>,
    {
        Self {
            number: number.into(),
            name: name.into(),
            prerequisites: prerequisites.into_iter().map(Into::into).collect(),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Prerequisite course numbers. They may name courses the catalog does not hold.
    pub fn prerequisites(&self) -> &[CourseCode] {
        &self.prerequisites
    }
}
