use super::node::{Link, Node};
use crate::course::Course;

/// Ascending walk over the store. Pending ancestors are kept on an explicit
/// stack, so a list-shaped tree costs heap, not call depth.
pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> InOrder<'a> {
    pub(super) fn new(root: &'a Link, len: usize) -> Self {
        let mut iter = InOrder {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: &'a Link) {
        while let Some(node) = link {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Course;

    fn next(&mut self) -> Option<&'a Course> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.remaining -= 1;
        Some(&node.course)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for InOrder<'_> {}

impl std::iter::FusedIterator for InOrder<'_> {}
