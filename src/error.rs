// The #[error] attribute from thiserror uses struct fields via string interpolation,
// but Rust's unused_assignments lint doesn't recognize this.
#![allow(unused_assignments)]

//! Coursegraph Error Types with Error Codes
//!
//! Error code ranges:
//! - CG-000-009: Input errors
//! - CG-020-029: DAG errors
//! - CG-040-049: Configuration errors
//! - CG-090-099: IO errors
//!
//! Display strings are the exact user-facing messages; codes and help text
//! are carried separately through `code()` and `miette::Diagnostic`.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

#[derive(Error, Debug, Diagnostic)]
pub enum GraphError {
    // ═══════════════════════════════════════════
    // INPUT ERRORS (000-009)
    // ═══════════════════════════════════════════
    /// No courses were registered. Also covers an input file that could not be read.
    #[error("{source_name} not found or empty.")]
    #[diagnostic(
        code(coursegraph::empty_graph),
        help("Add at least one 'prerequisite,course' row below the header")
    )]
    EmptyGraph { source_name: String },

    // ═══════════════════════════════════════════
    // DAG ERRORS (020-029)
    // ═══════════════════════════════════════════
    #[error("Data is not a DAG.")]
    #[diagnostic(code(coursegraph::cycle_detected))]
    CycleDetected {
        /// Course path closing the cycle, shown as diagnostic help
        #[help]
        cycle: String,
    },

    // ═══════════════════════════════════════════
    // CONFIG ERRORS (040-049)
    // ═══════════════════════════════════════════
    #[error("Invalid configuration: {reason}")]
    #[diagnostic(code(coursegraph::config_error))]
    ConfigError { reason: String },

    // ═══════════════════════════════════════════
    // IO ERRORS (090-099)
    // ═══════════════════════════════════════════
    #[error("{}: {source}", path.display())]
    #[diagnostic(code(coursegraph::read_failed))]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    #[diagnostic(code(coursegraph::write_failed))]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl GraphError {
    /// Get the error code (e.g., "CG-020")
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyGraph { .. } => "CG-001",
            Self::CycleDetected { .. } => "CG-020",
            Self::ConfigError { .. } => "CG-040",
            Self::ReadFailed { .. } => "CG-090",
            Self::WriteFailed { .. } => "CG-091",
        }
    }

    /// True for the two failures reported as `Validation Error:`
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyGraph { .. } | Self::CycleDetected { .. })
    }
}

impl FixSuggestion for GraphError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            GraphError::EmptyGraph { .. } => {
                Some("Check the file path and that rows follow the header line")
            }
            GraphError::CycleDetected { .. } => {
                Some("Remove one prerequisite row from the reported cycle")
            }
            GraphError::ConfigError { .. } => Some("Check the config file is valid TOML"),
            GraphError::ReadFailed { .. } => Some("Check file path and permissions"),
            GraphError::WriteFailed { .. } => {
                Some("Check the output directory exists and is writable")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    // ═══════════════════════════════════════════════════════════════
    // MESSAGES
    // ═══════════════════════════════════════════════════════════════

    #[test]
    fn test_empty_graph_message() {
        let err = GraphError::EmptyGraph {
            source_name: "courses.csv".to_string(),
        };
        assert_eq!(err.to_string(), "courses.csv not found or empty.");
        assert_eq!(err.code(), "CG-001");
    }

    #[test]
    fn test_cycle_message_hides_path() {
        let err = GraphError::CycleDetected {
            cycle: "A → B → A".to_string(),
        };
        assert_eq!(err.to_string(), "Data is not a DAG.");
        assert_eq!(err.code(), "CG-020");
    }

    #[test]
    fn test_cycle_help_shows_path() {
        let err = GraphError::CycleDetected {
            cycle: "A → B → A".to_string(),
        };
        let help = err.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("A → B → A"));
    }

    #[test]
    fn test_write_failed_message_includes_path() {
        let err = GraphError::WriteFailed {
            path: PathBuf::from("out/graph.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("out/graph.txt: "));
        assert!(msg.contains("Permission denied"));
        assert_eq!(err.code(), "CG-091");
    }

    // ═══════════════════════════════════════════════════════════════
    // CLASSIFICATION
    // ═══════════════════════════════════════════════════════════════

    #[test]
    fn test_validation_errors() {
        let empty = GraphError::EmptyGraph {
            source_name: "x".into(),
        };
        let cycle = GraphError::CycleDetected { cycle: "x".into() };
        let config = GraphError::ConfigError {
            reason: "x".into(),
        };
        let write = GraphError::WriteFailed {
            path: PathBuf::from("x"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(empty.is_validation());
        assert!(cycle.is_validation());
        assert!(!config.is_validation());
        assert!(!write.is_validation());
    }

    #[test]
    fn test_every_variant_has_suggestion() {
        let errors = [
            GraphError::EmptyGraph {
                source_name: "x".into(),
            },
            GraphError::CycleDetected { cycle: "x".into() },
            GraphError::ConfigError {
                reason: "x".into(),
            },
            GraphError::ReadFailed {
                path: PathBuf::from("x"),
                source: io::Error::from(io::ErrorKind::NotFound),
            },
        ];
        for err in &errors {
            assert!(err.fix_suggestion().is_some(), "{}", err.code());
        }
    }
}
