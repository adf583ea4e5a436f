//! Coursegraph - course prerequisite DAG validator and Mermaid generator
//!
//! ## Module Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        DOMAIN MODEL                          │
//! │  graph/     CSV → CourseGraph, three-color cycle detection   │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         OUTPUT                               │
//! │  diagram/   Mermaid rendering with prefix-derived classes    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Responsibilities
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`graph`] | Course registry, CSV builder, DAG validation |
//! | [`diagram`] | Deterministic Mermaid text and file output |
//! | [`config`] | Title/orientation/output settings (TOML + env) |
//! | [`util`] | Palette and default constants |
//! | [`error`] | Error types with codes and fix suggestions |
//!
//! ## Example
//!
//! ```
//! use coursegraph::{CourseGraph, MermaidRenderer};
//!
//! let graph = CourseGraph::from_csv_str("prereq,course\nMATH101,MATH102\n");
//! graph.validate("inline.csv").unwrap();
//!
//! let text = MermaidRenderer::default().render(&graph);
//! assert!(text.contains(r#"MATH101["MATH101"] --> MATH102["MATH102"]"#));
//! ```

// ═══════════════════════════════════════════════════════════════
// DOMAIN MODEL
// ═══════════════════════════════════════════════════════════════
pub mod graph;

// ═══════════════════════════════════════════════════════════════
// OUTPUT
// ═══════════════════════════════════════════════════════════════
pub mod diagram;

// ═══════════════════════════════════════════════════════════════
// CROSS-CUTTING - Error handling, configuration
// ═══════════════════════════════════════════════════════════════
pub mod config;
pub mod error;
pub mod util;

// ═══════════════════════════════════════════════════════════════
// PUBLIC API RE-EXPORTS
// ═══════════════════════════════════════════════════════════════

pub use config::{Direction, RenderConfig};
pub use diagram::{write_diagram, MermaidRenderer};
pub use error::{FixSuggestion, GraphError};
pub use graph::{Course, CourseGraph, CourseId};
