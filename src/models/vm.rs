//! Azure virtual machine data model.

use serde::{Deserialize, Serialize};

/// A virtual machine listing entry from `az vm list`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachine {
    /// Full ARM resource id.
    pub id: String,
    /// VM name.
    pub name: String,
    /// Azure region.
    pub location: String,
    /// Owning resource group (the CLI includes it in list output).
    #[serde(default)]
    pub resource_group: Option<String>,
    /// Size identifier lives here.
    pub hardware_profile: HardwareProfile,
    /// OS and data disk layout.
    pub storage_profile: StorageProfile,
}

impl VirtualMachine {
    /// The size identifier, e.g. `Standard_D2s_v3`.
    pub fn size_name(&self) -> &str {
        &self.hardware_profile.vm_size
    }
}

/// Hardware profile of a VM.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HardwareProfile {
    /// Size identifier, looked up in the per-location size catalog.
    pub vm_size: String,
}

/// Storage profile of a VM.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct StorageProfile {
    /// OS disk; size can be null for VMs created from specialized images.
    #[serde(default)]
    pub os_disk: Option<OsDisk>,
    /// Attached data disks in LUN order.
    #[serde(default)]
    pub data_disks: Vec<DataDisk>,
}

/// OS disk of a VM.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct OsDisk {
    /// Provisioned size in GB.
    #[serde(default, alias = "diskSizeGB")]
    pub disk_size_gb: Option<u64>,
}

/// A data disk attached to a VM.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DataDisk {
    /// Provisioned size in GB.
    #[serde(default, alias = "diskSizeGB")]
    pub disk_size_gb: Option<u64>,
    /// Logical unit number.
    #[serde(default)]
    pub lun: Option<i32>,
}
