//! The flattened export record.

use crate::output::escape_csv_field;

/// Fixed CSV header; field order must match [`ExportRow::to_csv_line`].
pub const CSV_HEADER: &str =
    "VMName,VMType,CPU,RAM,DiskSizeGB,Region,ResourceGroupName,PrivateIPs,PublicIPs";

/// One row of the inventory export, derived from a VM and its joined
/// resources. Every successfully-inspected VM produces exactly one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    /// VM name.
    pub vm_name: String,
    /// Size identifier, e.g. `Standard_D2s_v3`.
    pub vm_type: String,
    /// Core count from the size catalog; None when the lookup found nothing.
    pub cpu: Option<u32>,
    /// Memory in MB from the size catalog; None when the lookup found nothing.
    pub ram_mb: Option<u32>,
    /// OS disk size plus the sum of all data disk sizes, in GB.
    pub disk_size_gb: u64,
    /// Azure region.
    pub region: String,
    /// Owning resource group.
    pub resource_group: String,
    /// Private addresses, comma+space joined, in NIC/IP-config order.
    pub private_ips: String,
    /// Public addresses, comma+space joined, in NIC/IP-config order.
    pub public_ips: String,
}

impl ExportRow {
    /// Render the row as one CSV line, fields in [`CSV_HEADER`] order.
    pub fn to_csv_line(&self) -> String {
        let cpu = self.cpu.map(|c| c.to_string()).unwrap_or_default();
        let ram = self.ram_mb.map(|m| m.to_string()).unwrap_or_default();
        [
            escape_csv_field(&self.vm_name),
            escape_csv_field(&self.vm_type),
            cpu,
            ram,
            self.disk_size_gb.to_string(),
            escape_csv_field(&self.region),
            escape_csv_field(&self.resource_group),
            escape_csv_field(&self.private_ips),
            escape_csv_field(&self.public_ips),
        ]
        .join(",")
    }
}
