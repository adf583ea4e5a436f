//! Centralized constants for diagram rendering
//!
//! Defaults and palette values in one place for easy tuning.

// ═══════════════════════════════════════════════════════════════
// Output Defaults
// ═══════════════════════════════════════════════════════════════

/// File the rendered diagram is written to when no output is configured
pub const DEFAULT_OUTPUT_FILE: &str = "graph.txt";

/// Title placed in the diagram front matter
pub const DEFAULT_TITLE: &str = "Course Prerequisite Model using DAG";

// ═══════════════════════════════════════════════════════════════
// Styling
// ═══════════════════════════════════════════════════════════════

/// A fill/stroke pair for one prefix class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub fill: &'static str,
    pub stroke: &'static str,
}

/// Prefix colors (Material Design tints), assigned cyclically
pub const PALETTE: [Swatch; 6] = [
    Swatch {
        fill: "#e1f5fe",
        stroke: "#01579b",
    },
    Swatch {
        fill: "#e8f5e9",
        stroke: "#2e7d32",
    },
    Swatch {
        fill: "#fff3e0",
        stroke: "#e65100",
    },
    Swatch {
        fill: "#f3e5f5",
        stroke: "#7b1fa2",
    },
    Swatch {
        fill: "#f1f8e9",
        stroke: "#558b2f",
    },
    Swatch {
        fill: "#fffde7",
        stroke: "#fbc02d",
    },
];

/// Course name (compared case-insensitively) that gets no prefix class
pub const UNSTYLED_NAME: &str = "none";

/// Substring (lowercase) marking a course for the highlight class
pub const MAJOR_MARKER: &str = "major";

/// Class name of the highlight applied to major courses
pub const MAJOR_CLASS: &str = "majorNode";

/// Style of the highlight class
pub const MAJOR_STYLE: &str = "fill:#fff,stroke:#333,stroke-width:4px,stroke-dasharray: 5 5;";

// ═══════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════
