//! Graph Module - course prerequisite DAG
//!
//! - `registry`: CourseGraph, the name → course registry with successor lists
//! - `builder`: CSV record parsing into a CourseGraph
//! - `cycle`: three-color DFS cycle detection and validation
//!
//! The registry is immutable after construction: validation and rendering
//! only read it.

mod builder;
mod cycle;
mod registry;

// Re-export public types
pub use builder::parse_record;
pub use registry::{Course, CourseDisplay, CourseGraph, CourseId, SuccVec};
