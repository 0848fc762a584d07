//! CSV export of inventory rows.

use crate::error::InventoryError;
use crate::models::{ExportRow, CSV_HEADER};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the header and all rows to `path`, replacing any existing content.
///
/// The file is written exactly once per run, after every subscription has
/// been processed.
pub fn write_inventory_csv(path: &Path, rows: &[ExportRow]) -> Result<(), InventoryError> {
    log::info!("Writing {} rows to {}", rows.len(), path.display());

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{CSV_HEADER}")?;
    for row in rows {
        writeln!(writer, "{}", row.to_csv_line())?;
    }
    writer.flush()?;

    Ok(())
}

/// Quote a CSV field when it contains a comma or double quote, doubling any
/// embedded quotes. Excel dislikes spaces after the field separator, so
/// joined IP lists arrive quoted rather than re-split.
pub fn escape_csv_field(input: &str) -> String {
    if input.contains(',') || input.contains('"') {
        let escaped = input.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        input.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_field() {
        assert_eq!(escape_csv_field("vm-web-01"), "vm-web-01");
    }

    #[test]
    fn test_escape_field_with_comma() {
        assert_eq!(
            escape_csv_field("10.0.0.4, 10.0.0.5"),
            "\"10.0.0.4, 10.0.0.5\""
        );
    }

    #[test]
    fn test_escape_field_with_quote() {
        assert_eq!(escape_csv_field("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn test_escape_empty_field() {
        assert_eq!(escape_csv_field(""), "");
    }

    #[test]
    fn test_write_inventory_csv_roundtrip() {
        let row = ExportRow {
            vm_name: "vm-a".to_string(),
            vm_type: "Standard_D2s_v3".to_string(),
            cpu: Some(2),
            ram_mb: Some(8192),
            disk_size_gb: 180,
            region: "eastus".to_string(),
            resource_group: "rg-a".to_string(),
            private_ips: "10.0.0.4".to_string(),
            public_ips: String::new(),
        };
        let path = std::env::temp_dir().join("vm_inventory_csv_roundtrip_test.csv");

        write_inventory_csv(&path, &[row]).expect("Error writing CSV");
        let content = std::fs::read_to_string(&path).expect("Error reading CSV back");
        std::fs::remove_file(&path).ok();

        let mut lines = content.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        assert_eq!(
            lines.next(),
            Some("vm-a,Standard_D2s_v3,2,8192,180,eastus,rg-a,10.0.0.4,")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_write_inventory_csv_truncates_existing() {
        let path = std::env::temp_dir().join("vm_inventory_csv_truncate_test.csv");
        std::fs::write(&path, "stale content\nstale row\nstale row\n").unwrap();

        write_inventory_csv(&path, &[]).expect("Error writing CSV");
        let content = std::fs::read_to_string(&path).expect("Error reading CSV back");
        std::fs::remove_file(&path).ok();

        assert_eq!(content, format!("{CSV_HEADER}\n"));
    }
}
