//! CourseGraph - registry of courses and their successor edges
//!
//! Layout:
//! - `Vec<Course>` in first-insertion order, so every walk over the graph is deterministic
//! - FxHashMap from shared `Arc<str>` name to index for fetch-or-create lookups
//! - SmallVec successor lists (most courses unlock 0-4 others)

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Stack-allocated successors: most courses have 0-4 dependents
pub type SuccVec = SmallVec<[CourseId; 4]>;

/// Stable handle to a course inside one `CourseGraph`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId(usize);

impl CourseId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named node and the courses it is a prerequisite for
#[derive(Debug, Clone)]
pub struct Course {
    name: Arc<str>,
    successors: SuccVec,
}

impl Course {
    fn new(name: Arc<str>) -> Self {
        Self {
            name,
            successors: SuccVec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dependents in input order, duplicates included
    #[inline]
    pub fn successors(&self) -> &[CourseId] {
        &self.successors
    }
}

/// Equality is by name only
impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Course {}

/// Graph of course prerequisites
#[derive(Debug, Clone, Default)]
pub struct CourseGraph {
    courses: Vec<Course>,
    index: FxHashMap<Arc<str>, CourseId>,
}

impl CourseGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the course named `name`, creating it on first sight.
    ///
    /// Idempotent: repeated calls with the same name return the same id.
    pub fn get_or_insert(&mut self, name: &str) -> CourseId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = CourseId(self.courses.len());
        let name: Arc<str> = Arc::from(name);
        self.index.insert(Arc::clone(&name), id);
        self.courses.push(Course::new(name));
        id
    }

    /// Add the edge `prereq → course`, registering either end if new
    pub fn add_edge(&mut self, prereq: &str, course: &str) -> (CourseId, CourseId) {
        let from = self.get_or_insert(prereq);
        let to = self.get_or_insert(course);
        self.courses[from.0].successors.push(to);
        (from, to)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Number of edge occurrences (duplicates counted)
    pub fn edge_count(&self) -> usize {
        self.courses.iter().map(|c| c.successors.len()).sum()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[inline]
    pub fn id_of(&self, name: &str) -> Option<CourseId> {
        self.index.get(name).copied()
    }

    #[inline]
    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.courses.get(id.0)
    }

    /// Name of a course, or "" for an id minted by a different graph
    #[inline]
    pub fn name(&self, id: CourseId) -> &str {
        self.courses.get(id.0).map_or("", Course::name)
    }

    /// Get successors of a course by name
    pub fn successors_of(&self, name: &str) -> &[CourseId] {
        static EMPTY: &[CourseId] = &[];
        self.id_of(name)
            .and_then(|id| self.get(id))
            .map_or(EMPTY, Course::successors)
    }

    /// Courses in first-insertion order
    pub fn courses(&self) -> impl Iterator<Item = (CourseId, &Course)> {
        self.courses
            .iter()
            .enumerate()
            .map(|(i, course)| (CourseId(i), course))
    }

    /// Every edge occurrence as `(prereq, dependent)`, in registry then successor order
    pub fn edges(&self) -> impl Iterator<Item = (&Course, &Course)> {
        self.courses.iter().flat_map(move |parent| {
            parent
                .successors
                .iter()
                .filter_map(move |&child| self.courses.get(child.0))
                .map(move |child| (parent, child))
        })
    }

    /// Render a course as `NAME -> [SUCC1, SUCC2]`
    pub fn describe(&self, id: CourseId) -> Option<CourseDisplay<'_>> {
        self.get(id).map(|course| CourseDisplay {
            graph: self,
            course,
        })
    }
}

/// Display adapter pairing a course with the graph that resolves its successors
pub struct CourseDisplay<'a> {
    graph: &'a CourseGraph,
    course: &'a Course,
}

impl fmt::Display for CourseDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> [", self.course.name())?;
        for (i, &next) in self.course.successors().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(self.graph.name(next))?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_insert_is_idempotent() {
        let mut graph = CourseGraph::new();
        let a = graph.get_or_insert("TCSS 142");
        let b = graph.get_or_insert("TCSS 142");
        assert_eq!(a, b);
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut graph = CourseGraph::new();
        graph.get_or_insert("math 124");
        graph.get_or_insert("MATH 124");
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_add_edge_links_prereq_to_course() {
        let mut graph = CourseGraph::new();
        let (from, to) = graph.add_edge("MATH101", "MATH102");
        assert_eq!(graph.get(from).map(Course::successors), Some(&[to][..]));
        assert!(graph.successors_of("MATH102").is_empty());
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_duplicate_edges_are_kept() {
        let mut graph = CourseGraph::new();
        graph.add_edge("A", "B");
        graph.add_edge("A", "B");
        assert_eq!(graph.successors_of("A").len(), 2);
        assert_eq!(graph.edges().count(), 2);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut graph = CourseGraph::new();
        graph.add_edge("Z", "Y");
        graph.add_edge("A", "Z");
        let names: Vec<&str> = graph.courses().map(|(_, c)| c.name()).collect();
        assert_eq!(names, ["Z", "Y", "A"]);
    }

    #[test]
    fn test_edges_follow_registry_then_successor_order() {
        let mut graph = CourseGraph::new();
        graph.add_edge("A", "C");
        graph.add_edge("B", "D");
        graph.add_edge("A", "B");
        let edges: Vec<(&str, &str)> = graph.edges().map(|(p, c)| (p.name(), c.name())).collect();
        assert_eq!(edges, [("A", "C"), ("A", "B"), ("B", "D")]);
    }

    #[test]
    fn test_describe_lists_successors() {
        let mut graph = CourseGraph::new();
        let (a, _) = graph.add_edge("A", "B");
        graph.add_edge("A", "C");
        let text = graph.describe(a).map(|d| d.to_string());
        assert_eq!(text.as_deref(), Some("A -> [B, C]"));
    }

    #[test]
    fn test_course_equality_is_by_name() {
        let left = Course::new(Arc::from("X"));
        let mut right = Course::new(Arc::from("X"));
        right.successors.push(CourseId(3));
        assert_eq!(left, right);
    }

    #[test]
    fn test_unknown_name_lookups() {
        let graph = CourseGraph::new();
        assert!(graph.is_empty());
        assert!(!graph.contains("X"));
        assert_eq!(graph.id_of("X"), None);
        assert!(graph.successors_of("X").is_empty());
    }
}
