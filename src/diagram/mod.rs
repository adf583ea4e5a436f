//! Diagram Module - Mermaid serialization of a validated CourseGraph
//!
//! - `mermaid`: document layout and file output
//! - `style`: prefix → palette class assignment, `None`/major rules

mod mermaid;
mod style;

// Re-export public types
pub use mermaid::{write_diagram, MermaidRenderer};
pub use style::{
    is_major, is_unstyled, major_courses, node_id, prefix_of, style_statements, PrefixPalette,
    StyleStatement,
};
