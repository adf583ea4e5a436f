//! Utilities Module - shared constants
//!
//! - `constants`: palette, defaults and sentinel names used by the renderer

pub mod constants;

// Re-export public types
pub use constants::{
    Swatch, DEFAULT_OUTPUT_FILE, DEFAULT_TITLE, MAJOR_CLASS, MAJOR_MARKER, MAJOR_STYLE, PALETTE,
    UNSTYLED_NAME,
};
