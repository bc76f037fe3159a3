//! YAML export
//!
//! Exports all tracker data to YAML for human-readable backup.

use std::io::Write;

use crate::error::{LayakError, LayakResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export all data to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> LayakResult<()> {
    let export = FullExport::from_storage(storage)?;

    writeln!(writer, "# layak-cli data export")
        .map_err(|e| LayakError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| LayakError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| LayakError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LayakError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LayakError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a YAML export
pub fn import_from_yaml(yaml_str: &str) -> LayakResult<FullExport> {
    let export: FullExport =
        serde_yaml::from_str(yaml_str).map_err(|e| LayakError::Export(e.to_string()))?;

    export.validate().map_err(LayakError::Export)?;

    Ok(export)
}
