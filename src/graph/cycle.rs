//! DAG validation - cycle detection using the DFS three-color algorithm
//!
//! - White: unvisited
//! - Gray: on the current DFS path
//! - Black: fully explored, no cycle reachable from it
//!
//! Reaching a Gray course closes a cycle. Black courses are skipped, which is
//! what keeps reconvergent paths (diamonds) from being reported.
//!
//! The walk keeps its own frame stack instead of recursing, so long
//! prerequisite chains cannot overflow the call stack.

use tracing::debug;

use crate::error::{GraphError, Result};

use super::registry::{Course, CourseGraph, CourseId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

impl CourseGraph {
    /// Find one cycle, returned as a path whose last course repeats its first.
    ///
    /// Roots are tried in registry order; the search stops at the first back-edge.
    pub fn find_cycle(&self) -> Option<Vec<CourseId>> {
        let mut colors = vec![Color::White; self.len()];
        // (course, position of the next successor to examine)
        let mut stack: Vec<(CourseId, usize)> = Vec::new();

        for (root, _) in self.courses() {
            if colors[root.index()] != Color::White {
                continue;
            }
            colors[root.index()] = Color::Gray;
            stack.push((root, 0));

            while let Some((node, pos)) = stack.last_mut() {
                let node = *node;
                let next = self
                    .get(node)
                    .map_or(&[][..], Course::successors)
                    .get(*pos)
                    .copied();
                *pos += 1;

                match next {
                    Some(succ) => match colors[succ.index()] {
                        Color::Gray => {
                            let start = stack
                                .iter()
                                .position(|&(id, _)| id == succ)
                                .unwrap_or(0);
                            let mut cycle: Vec<CourseId> =
                                stack[start..].iter().map(|&(id, _)| id).collect();
                            cycle.push(succ);
                            return Some(cycle);
                        }
                        Color::White => {
                            colors[succ.index()] = Color::Gray;
                            stack.push((succ, 0));
                        }
                        Color::Black => {}
                    },
                    None => {
                        colors[node.index()] = Color::Black;
                        stack.pop();
                    }
                }
            }
        }

        None
    }

    #[inline]
    pub fn has_cycle(&self) -> bool {
        self.find_cycle().is_some()
    }

    /// `Ok(())` if acyclic, `Err(GraphError::CycleDetected)` carrying the cycle path otherwise
    pub fn detect_cycles(&self) -> Result<()> {
        match self.find_cycle() {
            None => Ok(()),
            Some(path) => {
                let cycle = path
                    .iter()
                    .map(|&id| self.name(id))
                    .collect::<Vec<_>>()
                    .join(" → ");
                debug!(%cycle, "cycle detected");
                Err(GraphError::CycleDetected { cycle })
            }
        }
    }

    /// Full validation: the graph must be non-empty and acyclic.
    ///
    /// `source_name` names the input in the empty-graph message.
    pub fn validate(&self, source_name: &str) -> Result<()> {
        if self.is_empty() {
            return Err(GraphError::EmptyGraph {
                source_name: source_name.to_string(),
            });
        }
        self.detect_cycles()
    }
}
