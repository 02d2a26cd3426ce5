use std::fs;

use course_planner::loader::load_from_path;
use course_planner::report::export_course_list;
use course_planner::{Course, OrderedCourseStore};

#[test]
fn exported_course_list_loads_back() {
    let store: OrderedCourseStore = [
        Course::with_prerequisites("CS301", "Algorithms", ["CS201", "CS999"]),
        Course::new("CS101", "Intro to Programming"),
        Course::with_prerequisites("CS201", "Data Structures", ["CS101"]),
    ]
    .into_iter()
    .collect();
    let path = std::env::temp_dir().join(format!("course-planner-{}-export.xlsx", std::process::id()));
    export_course_list(&store, &path).unwrap();

    let mut loaded = OrderedCourseStore::new();
    let summary = load_from_path(&mut loaded, &path).unwrap();
    assert_eq!(summary.inserted, 3);
    assert_eq!(summary.skipped, 0);
    assert_eq!(loaded.find("Course Number"), None);

    let original: Vec<&Course> = store.iter().collect();
    let reloaded: Vec<&Course> = loaded.iter().collect();
    assert_eq!(original, reloaded);

    fs::remove_file(path).unwrap();
}
