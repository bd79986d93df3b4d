//! Error types for Vivid UI
//!
//! Rendering never fails; these errors only surface at the edges where
//! untyped input (theme files, color strings, variant names) enters the crate.

use snafu::Snafu;

/// Main error type for the library
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// A color string that is not `#rgb`, `#rrggbb` or `#rrggbbaa`
    #[snafu(display("Invalid color {value:?}: expected #rgb, #rrggbb or #rrggbbaa"))]
    InvalidColor { value: String },

    /// A name outside one of the closed enumerations (variant, size, gradient)
    #[snafu(display("Unknown {kind} {value:?}"))]
    UnknownToken { kind: &'static str, value: String },

    /// IO error (reading theme files)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
