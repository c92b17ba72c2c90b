//! Error types for the tools.

use thiserror::Error;

use mission_core::error::CatalogError;

/// Result type alias using [`ToolError`].
pub type Result<T> = std::result::Result<T, ToolError>;

/// Errors reported by a tool command.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Loading or exporting the catalog failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// No mission has the requested key.
    #[error("No mission with key '{0}'")]
    UnknownMission(String),

    /// Strict validation found warnings.
    #[error("{0} validation warning(s) in strict mode")]
    StrictWarnings(usize),
}
