//! Catalog export.

use std::path::Path;

use clap::ValueEnum;
use mission_core::prelude::*;

use crate::error::Result;

/// Output format for `export`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Pretty RON.
    #[default]
    Ron,
    /// Pretty JSON.
    Json,
}

/// Serialize the resolved catalog.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn export_catalog(catalog: &MissionCatalog, format: ExportFormat) -> Result<String> {
    let text = match format {
        ExportFormat::Ron => catalog.to_ron_string()?,
        ExportFormat::Json => catalog.to_json_string()?,
    };
    Ok(text)
}

/// Serialize the catalog and write it to `path`.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_export(catalog: &MissionCatalog, format: ExportFormat, path: &Path) -> Result<()> {
    let text = export_catalog(catalog, format)?;
    std::fs::write(path, text).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    tracing::info!("Exported {} missions to {}", catalog.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_export_uses_wire_names() {
        let catalog = MissionCatalog::standard(&EnemyCatalog::standard()).unwrap();
        let json = export_catalog(&catalog, ExportFormat::Json).unwrap();
        assert!(json.contains("\"LEVEL_3\""));
        assert!(json.contains("\"SECURITY\""));
        assert!(json.contains("SEEK_AND_DESTROY_GURISTAS_PIRATES"));
    }

    #[test]
    fn test_ron_export_lists_missions() {
        let catalog = MissionCatalog::standard(&EnemyCatalog::standard()).unwrap();
        let ron = export_catalog(&catalog, ExportFormat::Ron).unwrap();
        assert!(ron.contains("Retribution (Guristas Pirates)"));
    }
}
