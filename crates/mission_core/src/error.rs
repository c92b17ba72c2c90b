//! Error types for catalog construction and loading.

use thiserror::Error;

use crate::enemy::EnemyId;

/// Result type alias using [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Top-level error type for all catalog errors.
///
/// Display derivations never produce these; they only surface while a
/// catalog is being built, loaded or exported.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Spawn count range is inverted.
    #[error("Invalid count range: {from} - {to}")]
    InvalidCountRange {
        /// Lower bound.
        from: u32,
        /// Upper bound.
        to: u32,
    },

    /// Spawn references no enemies.
    #[error("Spawn has no enemies")]
    EmptySpawn,

    /// Mission data references an enemy missing from the roster.
    #[error("Unknown enemy: {0:?}")]
    UnknownEnemy(EnemyId),

    /// Enemy registered twice in one roster.
    #[error("Duplicate enemy: {0:?}")]
    DuplicateEnemy(EnemyId),

    /// Two missions derive the same key.
    #[error("Duplicate mission key: {0}")]
    DuplicateMissionKey(String),

    /// A nested error raised while resolving a mission.
    #[error("Mission '{mission}' at {location}: {source}")]
    InMission {
        /// Mission name.
        mission: String,
        /// Pocket / group / spawn path inside the mission.
        location: String,
        /// Underlying error.
        #[source]
        source: Box<CatalogError>,
    },

    /// Data file parsing error.
    #[error("Failed to parse data file '{path}': {message}")]
    DataParseError {
        /// Path (or origin label) of the data that failed to parse.
        path: String,
        /// Error message.
        message: String,
    },

    /// Failed to read a data file.
    #[error("Failed to read file '{path}': {source}")]
    Io {
        /// Path to the file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize a catalog.
    #[error("Failed to serialize catalog: {0}")]
    SerializeError(String),
}

impl CatalogError {
    /// Wrap this error with the mission and location it was raised in.
    #[must_use]
    pub fn in_mission(self, mission: impl Into<String>, location: impl Into<String>) -> Self {
        Self::InMission {
            mission: mission.into(),
            location: location.into(),
            source: Box::new(self),
        }
    }

    /// Innermost error, skipping [`CatalogError::InMission`] wrappers.
    #[must_use]
    pub fn root_cause(&self) -> &CatalogError {
        match self {
            Self::InMission { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_mission_message_includes_location() {
        let err = CatalogError::EmptySpawn.in_mission("Retribution", "Pocket 1 / Group 2 / spawn #1");
        assert_eq!(
            err.to_string(),
            "Mission 'Retribution' at Pocket 1 / Group 2 / spawn #1: Spawn has no enemies"
        );
    }

    #[test]
    fn test_root_cause_unwraps_context() {
        let err = CatalogError::InvalidCountRange { from: 6, to: 5 }.in_mission("Mission", "Pocket 1");
        assert!(matches!(
            err.root_cause(),
            CatalogError::InvalidCountRange { from: 6, to: 5 }
        ));
    }
}
