//! JSON Export functionality
//!
//! Writes a computed plan as versioned JSON. Money amounts are integer cents.

use std::io::Write;

use super::PlanExport;
use crate::error::{StashError, StashResult};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Export a plan to JSON format
pub fn export_plan_json<W: Write>(
    export: &PlanExport,
    writer: &mut W,
    pretty: bool,
) -> StashResult<()> {
    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, export)
    } else {
        serde_json::to_writer(&mut *writer, export)
    };
    written.map_err(|e| StashError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| StashError::Export(e.to_string()))?;
    Ok(())
}

/// Read a plan export back from JSON
pub fn import_plan_json(json_str: &str) -> StashResult<PlanExport> {
    let export: PlanExport =
        serde_json::from_str(json_str).map_err(|e| StashError::Import(e.to_string()))?;

    export.validate().map_err(StashError::Import)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::sample_export;

    #[test]
    fn test_export_and_read_back() {
        let export = sample_export();

        let mut buf = Vec::new();
        export_plan_json(&export, &mut buf, true).unwrap();
        let json = String::from_utf8(buf).unwrap();

        assert!(json.contains("\"schema_version\": \"1.0.0\""));
        assert!(json.contains("\"income\": 46030"));

        let restored = import_plan_json(&json).unwrap();
        assert_eq!(restored.plan, export.plan);
        assert_eq!(restored.line_items, export.line_items);
        assert_eq!(restored.diagnostics.status, export.diagnostics.status);
    }

    #[test]
    fn test_schema_mismatch_is_rejected() {
        let mut export = sample_export();
        export.schema_version = "0.1.0".to_string();
        let json = serde_json::to_string(&export).unwrap();

        let err = import_plan_json(&json).unwrap_err();
        assert!(matches!(err, StashError::Import(_)));
    }
}
