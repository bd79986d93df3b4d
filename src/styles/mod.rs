//! Styles
//!
//! Process-wide baseline styling.

pub mod global;
