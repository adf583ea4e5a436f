//! Mermaid flowchart rendering
//!
//! Document layout:
//!
//! ```text
//! ---
//! title: <title>
//! ---
//! graph TD
//!     <edges>
//!
//!     %% Dynamic Styling
//!     <classDef + class per prefix>
//!
//!     classDef majorNode ...
//!     <class per major course>
//! ```

use std::fmt::{self, Write};
use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::{Direction, RenderConfig};
use crate::error::{GraphError, Result};
use crate::graph::CourseGraph;
use crate::util::{MAJOR_CLASS, MAJOR_STYLE};

use super::style::{major_courses, node_id, style_statements, StyleStatement};

const INDENT: &str = "    ";

/// Renders a validated CourseGraph as Mermaid text
#[derive(Debug, Clone)]
pub struct MermaidRenderer {
    title: String,
    direction: Direction,
}

impl Default for MermaidRenderer {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}

impl MermaidRenderer {
    pub fn new(title: impl Into<String>, direction: Direction) -> Self {
        Self {
            title: title.into(),
            direction,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.title.clone(), config.direction)
    }

    /// Render the whole document
    pub fn render(&self, graph: &CourseGraph) -> String {
        let mut out = String::with_capacity(64 * (graph.edge_count() + graph.len() + 8));
        // fmt::Write for String never fails
        let _ = self.write_to(&mut out, graph);
        out
    }

    /// Write the whole document into any `fmt::Write` sink
    pub fn write_to<W: Write>(&self, out: &mut W, graph: &CourseGraph) -> fmt::Result {
        self.write_header(out)?;
        write_edges(out, graph)?;
        write_prefix_styles(out, graph)?;
        write_major_styles(out, graph)
    }

    fn write_header<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "---")?;
        writeln!(out, "title: {}", self.title)?;
        writeln!(out, "---")?;
        writeln!(out, "graph {}", self.direction)
    }
}

fn write_edges<W: Write>(out: &mut W, graph: &CourseGraph) -> fmt::Result {
    for (parent, child) in graph.edges() {
        writeln!(
            out,
            "{INDENT}{}[\"{}\"] --> {}[\"{}\"]",
            node_id(parent.name()),
            parent.name(),
            node_id(child.name()),
            child.name()
        )?;
    }
    Ok(())
}

fn write_prefix_styles<W: Write>(out: &mut W, graph: &CourseGraph) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{INDENT}%% Dynamic Styling")?;
    for statement in style_statements(graph) {
        match statement {
            StyleStatement::Define { prefix, swatch } => writeln!(
                out,
                "{INDENT}classDef style{prefix} fill:{},stroke:{},stroke-width:2px;",
                swatch.fill, swatch.stroke
            )?,
            StyleStatement::Assign { name, prefix } => {
                writeln!(out, "{INDENT}class {} style{prefix}", node_id(name))?;
            }
        }
    }
    Ok(())
}

fn write_major_styles<W: Write>(out: &mut W, graph: &CourseGraph) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{INDENT}classDef {MAJOR_CLASS} {MAJOR_STYLE}")?;
    for name in major_courses(graph) {
        writeln!(out, "{INDENT}class {} {MAJOR_CLASS}", node_id(name))?;
    }
    Ok(())
}

/// Render with `config` and replace `config.output` with the result
pub fn write_diagram(graph: &CourseGraph, config: &RenderConfig) -> Result<()> {
    let text = MermaidRenderer::from_config(config).render(graph);
    save(&config.output, &text)
}

fn save(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| GraphError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = text.len(), "diagram saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn graph(edges: &[(&str, &str)]) -> CourseGraph {
        let mut graph = CourseGraph::new();
        for (from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }

    #[test]
    fn test_render_single_edge() {
        let text = MermaidRenderer::default().render(&graph(&[("MATH101", "MATH102")]));
        let expected = "\
---
title: Course Prerequisite Model using DAG
---
graph TD
    MATH101[\"MATH101\"] --> MATH102[\"MATH102\"]

    %% Dynamic Styling
    classDef styleMATH101 fill:#e1f5fe,stroke:#01579b,stroke-width:2px;
    class MATH101 styleMATH101
    classDef styleMATH102 fill:#e8f5e9,stroke:#2e7d32,stroke-width:2px;
    class MATH102 styleMATH102

    classDef majorNode fill:#fff,stroke:#333,stroke-width:4px,stroke-dasharray: 5 5;
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_prefixes_none_and_major() {
        let g = graph(&[
            ("None", "TCSS 142"),
            ("TCSS 142", "TCSS 143"),
            ("MATH 124", "TCSS 143"),
            ("TCSS 143", "CS Major"),
        ]);
        let text = MermaidRenderer::new("Roadmap", Direction::LeftRight).render(&g);
        let expected = "\
---
title: Roadmap
---
graph LR
    None[\"None\"] --> TCSS_142[\"TCSS 142\"]
    TCSS_142[\"TCSS 142\"] --> TCSS_143[\"TCSS 143\"]
    TCSS_143[\"TCSS 143\"] --> CS_Major[\"CS Major\"]
    MATH_124[\"MATH 124\"] --> TCSS_143[\"TCSS 143\"]

    %% Dynamic Styling
    classDef styleTCSS fill:#e1f5fe,stroke:#01579b,stroke-width:2px;
    class TCSS_142 styleTCSS
    class TCSS_143 styleTCSS
    classDef styleMATH fill:#e8f5e9,stroke:#2e7d32,stroke-width:2px;
    class MATH_124 styleMATH
    classDef styleCS fill:#fff3e0,stroke:#e65100,stroke-width:2px;
    class CS_Major styleCS

    classDef majorNode fill:#fff,stroke:#333,stroke-width:4px,stroke-dasharray: 5 5;
    class CS_Major majorNode
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_is_deterministic() {
        let g = graph(&[("B 1", "A 1"), ("C 1", "A 1"), ("A 1", "D 2")]);
        let renderer = MermaidRenderer::default();
        assert_eq!(renderer.render(&g), renderer.render(&g));
    }

    #[test]
    fn test_duplicate_edges_are_rendered_twice() {
        let text = MermaidRenderer::default().render(&graph(&[("A", "B"), ("A", "B")]));
        assert_eq!(text.matches("A[\"A\"] --> B[\"B\"]").count(), 2);
    }

    #[test]
    fn test_write_diagram_replaces_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("graph.txt");
        fs::write(&output, "stale contents that are much longer than needed\n".repeat(50))
            .unwrap();

        let config = RenderConfig {
            output: output.clone(),
            ..RenderConfig::default()
        };
        write_diagram(&graph(&[("A", "B")]), &config).unwrap();

        let saved = fs::read_to_string(&output).unwrap();
        assert!(saved.starts_with("---\n"));
        assert!(!saved.contains("stale"));
    }

    #[test]
    fn test_write_diagram_to_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let config = RenderConfig {
            output: dir.path().join("no/such/dir/graph.txt"),
            ..RenderConfig::default()
        };
        let err = write_diagram(&graph(&[("A", "B")]), &config).unwrap_err();
        assert_eq!(err.code(), "CG-091");
    }
}
