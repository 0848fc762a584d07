//! Domain models for the VM inventory export.
//!
//! Wire models mirror the JSON shapes emitted by the `az` CLI:
//! - [`ResourceGroup`] - resource group listing entry
//! - [`VirtualMachine`] - VM listing entry with hardware and storage profiles
//! - [`VmSize`] - size catalog entry (cores, memory)
//! - [`NetworkInterface`] / [`IpConfiguration`] - NIC records with IP configs
//! - [`PublicIpAddress`] - resolved public IP resource
//!
//! [`ExportRow`] is the flattened record written to the CSV export.

mod export_row;
mod nic;
mod resource_group;
mod vm;
mod vm_size;

// Re-export public types
pub use export_row::{ExportRow, CSV_HEADER};
pub use nic::{IpConfiguration, NetworkInterface, PublicIpAddress, ResourceRef};
pub use resource_group::ResourceGroup;
pub use vm::{DataDisk, HardwareProfile, OsDisk, StorageProfile, VirtualMachine};
pub use vm_size::VmSize;
