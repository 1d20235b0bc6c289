use anyhow::{Context, Result};

use super::model::SchemaExport;

/// Render the export document as pretty-printed JSON.
pub fn render_json(export: &SchemaExport) -> Result<String> {
    serde_json::to_string_pretty(export).context("failed to serialize schema export")
}
