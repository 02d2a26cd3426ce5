use crate::course::Course;

pub(super) type Link = Option<Box<Node>>;

pub(super) struct Node {
    pub(super) course: Course,
    pub(super) left: Link,
    pub(super) right: Link,
}

impl Node {
    pub(super) fn leaf(course: Course) -> Box<Node> {
        Box::new(Node {
            course,
            left: None,
            right: None,
        })
    }

    pub(super) fn key(&self) -> &str {
        self.course.number()
    }
}
