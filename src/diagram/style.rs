//! Prefix-based class assignment
//!
//! A course's prefix is the text before its first space (`TCSS 142` → `TCSS`).
//! Each distinct prefix gets the next palette swatch the first time it is seen,
//! wrapping after six.

use rustc_hash::FxHashMap;

use crate::graph::CourseGraph;
use crate::util::{Swatch, MAJOR_MARKER, PALETTE, UNSTYLED_NAME};

/// Mermaid node id: spaces become underscores, nothing else is escaped
pub fn node_id(name: &str) -> String {
    name.replace(' ', "_")
}

/// Text before the first space, or the whole name
pub fn prefix_of(name: &str) -> &str {
    name.split(' ').next().unwrap_or(name)
}

/// `None` placeholder rows get no prefix class
pub fn is_unstyled(name: &str) -> bool {
    name.to_lowercase() == UNSTYLED_NAME
}

/// Courses containing "major" in any case get the highlight class
pub fn is_major(name: &str) -> bool {
    name.to_lowercase().contains(MAJOR_MARKER)
}

/// One line of the dynamic styling section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleStatement<'a> {
    /// `classDef style<prefix> ...`, emitted on a prefix's first appearance
    Define { prefix: &'a str, swatch: Swatch },
    /// `class <id> style<prefix>`, emitted for every styled course
    Assign { name: &'a str, prefix: &'a str },
}

/// Hands out palette swatches to prefixes in first-seen order
#[derive(Debug, Default)]
pub struct PrefixPalette<'a> {
    slots: FxHashMap<&'a str, usize>,
    next: usize,
}

impl<'a> PrefixPalette<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the swatch if `prefix` was not seen before, `None` otherwise.
    pub fn claim(&mut self, prefix: &'a str) -> Option<Swatch> {
        if self.slots.contains_key(prefix) {
            return None;
        }
        let slot = self.next % PALETTE.len();
        self.slots.insert(prefix, slot);
        self.next += 1;
        Some(PALETTE[slot])
    }

    /// Swatch already assigned to `prefix`
    pub fn swatch(&self, prefix: &str) -> Option<Swatch> {
        self.slots.get(prefix).map(|&slot| PALETTE[slot])
    }

    /// Number of distinct prefixes seen
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Styling statements for every course, in registry order
pub fn style_statements(graph: &CourseGraph) -> Vec<StyleStatement<'_>> {
    let mut palette = PrefixPalette::new();
    let mut statements = Vec::with_capacity(graph.len() * 2);

    for (_, course) in graph.courses() {
        let name = course.name();
        if is_unstyled(name) {
            continue;
        }
        let prefix = prefix_of(name);
        if let Some(swatch) = palette.claim(prefix) {
            statements.push(StyleStatement::Define { prefix, swatch });
        }
        statements.push(StyleStatement::Assign { name, prefix });
    }

    statements
}

/// Courses receiving the highlight class, in registry order
pub fn major_courses(graph: &CourseGraph) -> impl Iterator<Item = &str> {
    graph
        .courses()
        .map(|(_, course)| course.name())
        .filter(|name| is_major(name))
}
