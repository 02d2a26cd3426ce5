//! Comma-separated course lines.
use std::borrow::Cow;
use std::io::BufRead;

use super::LoadSummary;
use crate::course::Course;
use crate::error::Result;
use crate::store::OrderedCourseStore;

pub const FIELD_DELIMITER: char = ',';

fn trim_field(field: &str) -> &str {
    field.trim_matches(|c| c == ' ' || c == '\t')
}

/// Builds a course from already split fields: number, name, then prerequisites.
/// Empty prerequisite fields are dropped. Returns `None` without a number and a name.
pub fn course_from_fields<'a, I>(fields: I) -> Option<Course>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut fields = fields.into_iter().map(trim_field);
    let number = fields.next().filter(|f| !f.is_empty())?;
    let name = fields.next().filter(|f| !f.is_empty())?;
    Some(Course::with_prerequisites(
        number,
        name,
        fields.filter(|f| !f.is_empty()),
    ))
}

pub fn parse_line(line: &str) -> Option<Course> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return None;
    }
    course_from_fields(line.split(FIELD_DELIMITER))
}

/// Reads every line of `reader` into `store`. Bytes that are not UTF-8 are
/// replaced, never rejected. Nothing is inserted unless the whole source was read.
pub fn load_from_reader<R: BufRead>(store: &mut OrderedCourseStore, mut reader: R) -> Result<LoadSummary> {
    let mut parsed = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            log::warn!("Line {line_no} is not valid UTF-8; undecodable bytes replaced");
        }
        parsed.push((line_no, line.trim().is_empty(), parse_line(&line)));
    }

    let mut summary = LoadSummary::default();
    for (line_no, blank, course) in parsed {
        match course {
            Some(course) => summary.record(store, course),
            None => {
                if !blank {
                    log::warn!("Skipping line {line_no}: expected a course number and name");
                }
                summary.skipped += 1;
            }
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_number_name_and_prerequisites() {
        let course = parse_line("CS301, Algorithms, CS201, CS999").unwrap();
        assert_eq!(course.number(), "CS301");
        assert_eq!(course.name(), "Algorithms");
        assert_eq!(course.prerequisites(), ["CS201", "CS999"]);
    }

    #[test]
    fn trims_spaces_tabs_and_carriage_returns() {
        let course = parse_line("\tCS201 ,  Data Structures\t, CS101 \r").unwrap();
        assert_eq!(course.number(), "CS201");
        assert_eq!(course.name(), "Data Structures");
        assert_eq!(course.prerequisites(), ["CS101"]);
    }

    #[test]
    fn drops_empty_prerequisite_fields() {
        let course = parse_line("CS301,Algorithms,,CS201, ,").unwrap();
        assert_eq!(course.prerequisites(), ["CS201"]);
    }

    #[test]
    fn rejects_short_and_blank_lines() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   ").is_none());
        assert!(parse_line("CS101").is_none());
        assert!(parse_line("CS101,").is_none());
        assert!(parse_line(", Intro").is_none());
    }

    #[test]
    fn loads_and_counts() {
        let input = "CS101, Intro to Programming\n\nbogus\nCS201, Data Structures, CS101\nCS101, Again\n";
        let mut store = OrderedCourseStore::new();
        let summary = load_from_reader(&mut store, input.as_bytes()).unwrap();
        assert_eq!(
            summary,
            LoadSummary {
                inserted: 2,
                duplicates: 1,
                skipped: 2,
            }
        );
        assert_eq!(store.find("CS101").unwrap().name(), "Intro to Programming");
    }

    #[test]
    fn latin1_bytes_do_not_stop_the_load() {
        let input: &[u8] = b"CS101, Intro to Programming\nCS201, Caf\xE9 Theory, CS101\nCS301, Algorithms, CS201\n";
        let mut store = OrderedCourseStore::new();
        let summary = load_from_reader(&mut store, input).unwrap();
        assert_eq!(summary.inserted, 3);
        assert_eq!(store.find("CS201").unwrap().name(), "Caf\u{FFFD} Theory");
        assert_eq!(store.find("CS301").unwrap().prerequisites(), ["CS201"]);
    }

    struct Broken;

    impl std::io::Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("device went away"))
        }
    }

    #[test]
    fn read_error_mid_source_inserts_nothing() {
        use std::io::{BufReader, Read};

        let reader = BufReader::new((&b"CS101, Intro to Programming\nCS201, Data"[..]).chain(Broken));
        let mut store = OrderedCourseStore::new();
        let err = load_from_reader(&mut store, reader).unwrap_err();
        assert!(matches!(err, crate::error::CatalogError::Read(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn distinct_lines_round_trip_in_order() {
        let lines: Vec<String> = (0..50).rev().map(|i| format!("C{i:02}, Course {i}")).collect();
        let mut store = OrderedCourseStore::new();
        load_from_reader(&mut store, lines.join("\n").as_bytes()).unwrap();
        let numbers: Vec<String> = store.iter().map(|c| c.number().to_owned()).collect();
        let expected: Vec<String> = (0..50).map(|i| format!("C{i:02}")).collect();
        assert_eq!(numbers, expected);
    }
}
