//! YAML Export functionality
//!
//! Writes a computed plan as YAML for reading by people.

use std::io::Write;

use super::PlanExport;
use crate::error::{StashError, StashResult};

/// Export a plan to YAML format
pub fn export_plan_yaml<W: Write>(export: &PlanExport, writer: &mut W) -> StashResult<()> {
    writeln!(writer, "# stashflow weekly plan")
        .map_err(|e| StashError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| StashError::Export(e.to_string()))?;
    writeln!(writer, "# Week of: {}", export.plan.week_start)
        .map_err(|e| StashError::Export(e.to_string()))?;
    writeln!(writer, "# Amounts are in cents.").map_err(|e| StashError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| StashError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::sample_export;
    use crate::export::PlanExport;

    #[test]
    fn test_yaml_export() {
        let export = sample_export();

        let mut buf = Vec::new();
        export_plan_yaml(&export, &mut buf).unwrap();
        let yaml = String::from_utf8(buf).unwrap();

        assert!(yaml.starts_with("# stashflow weekly plan"));
        assert!(yaml.contains("# Week of: 2026-10-12"));
        assert!(yaml.contains("tier: paid"));
        assert!(yaml.contains("status: warning"));

        let parsed: PlanExport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.plan, export.plan);
    }
}
