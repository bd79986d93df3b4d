//! Components - Styled Controls
//!
//! Pure UI components that read the installed theme and never do I/O.

pub mod primitives;
pub mod style;
