//! Data validation utilities.

use std::path::{Path, PathBuf};

use mission_core::prelude::*;

use crate::error::{Result, ToolError};

/// Where the catalog content comes from.
#[derive(Debug, Clone, Default)]
pub struct CatalogSources {
    /// Roster RON file applied on top of the standard roster.
    pub roster: Option<PathBuf>,
    /// Extra RON mission files merged after the built-in missions.
    pub missions: Vec<PathBuf>,
}

/// Summary of a validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Missions in the catalog.
    pub missions: usize,
    /// Spawns across all missions.
    pub spawns: usize,
    /// Non-fatal findings.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Check whether the report passes, treating warnings as failures when
    /// `strict` is set.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::StrictWarnings`] in strict mode if any warning was
    /// found.
    pub fn check(&self, strict: bool) -> Result<()> {
        if strict && !self.warnings.is_empty() {
            return Err(ToolError::StrictWarnings(self.warnings.len()));
        }
        Ok(())
    }
}

/// Build the standard roster, overridden by the roster file if one is given.
///
/// # Errors
///
/// Returns an error if the roster file cannot be read or parsed.
pub fn load_roster(path: Option<&Path>) -> Result<EnemyCatalog> {
    let roster = EnemyCatalog::standard();
    match path {
        Some(path) => {
            let overrides = EnemyCatalog::load_ron_file(path)?;
            Ok(roster.with_overrides(&overrides))
        }
        None => Ok(roster),
    }
}

/// Build the full catalog described by `sources`.
///
/// # Errors
///
/// Returns the first load, resolve or duplicate-key error.
pub fn load_catalog(sources: &CatalogSources) -> Result<MissionCatalog> {
    let roster = load_roster(sources.roster.as_deref())?;
    let mut catalog = MissionCatalog::standard(&roster)?;
    for path in &sources.missions {
        let extra = MissionCatalog::load_ron_file(&roster, path)?;
        catalog = catalog.merge(extra)?;
    }
    Ok(catalog)
}

/// Collect the validation report for a built catalog.
#[must_use]
pub fn validate_catalog(catalog: &MissionCatalog) -> ValidationReport {
    ValidationReport {
        missions: catalog.len(),
        spawns: catalog.iter().map(Mission::spawn_count).sum(),
        warnings: catalog.validate(),
    }
}

/// Load everything in `sources` and validate it.
///
/// # Errors
///
/// Returns an error if the catalog fails to build, or if `strict` is set and
/// any warning was found.
pub fn run_validation(sources: &CatalogSources, strict: bool) -> Result<ValidationReport> {
    let catalog = load_catalog(sources)?;
    let report = validate_catalog(&catalog);
    for warning in &report.warnings {
        tracing::warn!("{warning}");
    }
    tracing::info!(
        "Validated {} missions, {} spawns, {} warnings",
        report.missions,
        report.spawns,
        report.warnings.len()
    );
    report.check(strict)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_sources_pass() {
        let report = run_validation(&CatalogSources::default(), false).unwrap();
        assert_eq!(report.missions, 9);
        assert!(report.spawns > 0);
        assert!(!report.warnings.is_empty());
    }

    #[test]
    fn test_strict_fails_on_warnings() {
        let err = run_validation(&CatalogSources::default(), true).unwrap_err();
        assert!(matches!(err, ToolError::StrictWarnings(_)));
    }

    #[test]
    fn test_missing_mission_file() {
        let sources = CatalogSources {
            roster: None,
            missions: vec![PathBuf::from("does/not/exist.ron")],
        };
        let err = load_catalog(&sources).unwrap_err();
        assert!(matches!(err, ToolError::Catalog(CatalogError::Io { .. })));
    }

    #[test]
    fn test_clean_report_passes_strict() {
        let report = ValidationReport {
            missions: 1,
            spawns: 2,
            warnings: vec![],
        };
        assert!(report.check(true).is_ok());
    }
}
