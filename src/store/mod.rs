//! Ordered course storage: an unbalanced binary search tree keyed by course number.
//!
//! Tree shape depends only on insertion order. Sorted input degrades the tree
//! into a chain, so every walk here (lookup, traversal, depth, teardown) is
//! iterative.

mod iter;
mod node;

use std::cmp::Ordering;

use crate::course::Course;
pub use iter::InOrder;
use node::{Link, Node};

#[derive(Default)]
pub struct OrderedCourseStore {
    root: Link,
    len: usize,
}

impl OrderedCourseStore {
    pub fn new() -> Self {
        OrderedCourseStore { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `course` under its number. Returns `false` and drops `course`
    /// when the number is already present; the stored record is kept as is.
    pub fn insert(&mut self, course: Course) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match course.number().cmp(node.key()) {
                Ordering::Equal => return false,
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
            }
        }
        *link = Some(Node::leaf(course));
        self.len += 1;
        true
    }

    /// Exact, case-sensitive lookup.
    pub fn find(&self, number: &str) -> Option<&Course> {
        let mut link = &self.root;
        while let Some(node) = link {
            match number.cmp(node.key()) {
                Ordering::Equal => return Some(&node.course),
                Ordering::Less => link = &node.left,
                Ordering::Greater => link = &node.right,
            }
        }
        None
    }

    pub fn contains(&self, number: &str) -> bool {
        self.find(number).is_some()
    }

    /// Courses in ascending number order. Each call walks from the root again.
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(&self.root, self.len)
    }

    pub fn traverse_in_order(&self) -> InOrder<'_> {
        self.iter()
    }

    /// Number of nodes on the longest root-to-leaf path; 0 when empty.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&Node, usize)> = Vec::new();
        if let Some(root) = &self.root {
            pending.push((&**root, 1));
        }
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            for child in [&node.left, &node.right].into_iter().flatten() {
                pending.push((&**child, level + 1));
            }
        }
        deepest
    }
}

impl Drop for OrderedCourseStore {
    fn drop(&mut self) {
        // Detach children before each box is freed so the default recursive
        // drop never sees more than one level.
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<'a> IntoIterator for &'a OrderedCourseStore {
    type Item = &'a Course;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> InOrder<'a> {
        self.iter()
    }
}

impl Extend<Course> for OrderedCourseStore {
    fn extend<I: IntoIterator<Item = Course>>(&mut self, courses: I) {
        for course in courses {
            self.insert(course);
        }
    }
}

impl FromIterator<Course> for OrderedCourseStore {
    fn from_iter<I: IntoIterator<Item = Course>>(courses: I) -> Self {
        let mut store = OrderedCourseStore::new();
        store.extend(courses);
        store
    }
}

impl std::fmt::Debug for OrderedCourseStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use proptest::prelude::*;

    use super::*;

    fn numbers(store: &OrderedCourseStore) -> Vec<&str> {
        store.iter().map(Course::number).collect()
    }

    #[test]
    fn empty_store() {
        let store = OrderedCourseStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.depth(), 0);
        assert!(store.find("CS101").is_none());
        assert_eq!(store.iter().count(), 0);
    }

    #[test]
    fn first_insert_wins() {
        let mut store = OrderedCourseStore::new();
        assert!(store.insert(Course::new("CS101", "A")));
        assert!(!store.insert(Course::new("CS101", "B")));
        assert_eq!(store.len(), 1);
        assert_eq!(store.find("CS101").map(Course::name), Some("A"));
    }

    #[test]
    fn find_is_exact_and_case_sensitive() {
        let store: OrderedCourseStore = [Course::new("CS101", "Intro"), Course::new("MATH201", "Discrete")]
            .into_iter()
            .collect();
        assert!(store.contains("CS101"));
        assert!(!store.contains("cs101"));
        assert!(!store.contains("CS10"));
        assert!(!store.contains("CS1011"));
    }

    #[test]
    fn traversal_is_ascending_and_restartable() {
        let store: OrderedCourseStore = ["CS300", "CS100", "MATH201", "CS200", "CSCI101"]
            .into_iter()
            .map(|n| Course::new(n, "x"))
            .collect();
        let expected = ["CS100", "CS200", "CS300", "CSCI101", "MATH201"];
        assert_eq!(numbers(&store), expected);
        assert_eq!(numbers(&store), expected);
        assert_eq!(store.iter().len(), 5);
    }

    #[test]
    fn sorted_input_builds_a_chain() {
        let store: OrderedCourseStore = (0..64).map(|i| Course::new(format!("CS{i:03}"), "x")).collect();
        assert_eq!(store.depth(), 64);
        assert!(store.root.as_ref().is_some_and(|root| root.left.is_none()));
    }

    #[test]
    fn balanced_insert_order_is_shallow() {
        let store: OrderedCourseStore = ["D", "B", "F", "A", "C", "E", "G"]
            .into_iter()
            .map(|n| Course::new(n, "x"))
            .collect();
        assert_eq!(store.depth(), 3);
    }

    #[test]
    fn deep_chain_drops_without_overflow() {
        // Linked by hand; building it through insert would take quadratic time.
        let mut store = OrderedCourseStore::new();
        for i in (0..200_000).rev() {
            let mut node = Node::leaf(Course::new(format!("{i:08}"), "x"));
            node.right = store.root.take();
            store.root = Some(node);
            store.len += 1;
        }
        assert_eq!(store.depth(), 200_000);
        assert_eq!(store.iter().count(), 200_000);
        assert!(store.contains("00199999"));
        drop(store);
    }

    proptest! {
        #[test]
        fn matches_first_insert_model(entries in prop::collection::vec(("[A-D]{1,3}", "[a-z]{1,4}"), 0..64)) {
            let mut store = OrderedCourseStore::new();
            let mut model = BTreeMap::new();
            for (number, name) in entries {
                let inserted = store.insert(Course::new(number.clone(), name.clone()));
                let fresh = !model.contains_key(&number);
                prop_assert_eq!(inserted, fresh);
                model.entry(number).or_insert(name);
            }
            prop_assert_eq!(store.len(), model.len());
            let walked: Vec<(&str, &str)> = store.iter().map(|c| (c.number(), c.name())).collect();
            let expected: Vec<(&str, &str)> = model.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
            prop_assert_eq!(walked, expected);
            for (number, name) in &model {
                prop_assert_eq!(store.find(number).map(Course::name), Some(name.as_str()));
            }
        }

        #[test]
        fn absent_keys_are_not_found(keys in prop::collection::btree_set("[A-Z]{2}[0-9]", 0..32), probe in "[a-z]{2}[0-9]") {
            let store: OrderedCourseStore = keys.iter().map(|k| Course::new(k.clone(), "x")).collect();
            prop_assert!(store.find(&probe).is_none());
        }

        #[test]
        fn ascending_insertion_depth_equals_count(count in 0usize..200) {
            let store: OrderedCourseStore = (0..count).map(|i| Course::new(format!("{i:04}"), "x")).collect();
            prop_assert_eq!(store.depth(), count);
        }
    }
}
