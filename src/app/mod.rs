//! Gallery Application
//!
//! Window setup and the showcase view used by the `vivid-ui` binary.

pub mod application;
pub mod gallery;
