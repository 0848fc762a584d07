//! Aggregation helpers for export rows.

use crate::models::VirtualMachine;
use itertools::Itertools;

/// Total provisioned disk capacity: OS disk plus all data disks, in GB.
///
/// Disks without a recorded size (specialized images report null) count as
/// zero rather than failing the VM.
pub fn total_disk_gb(vm: &VirtualMachine) -> u64 {
    let os_disk = vm
        .storage_profile
        .os_disk
        .as_ref()
        .and_then(|d| d.disk_size_gb)
        .unwrap_or(0);
    let data_disks: u64 = vm
        .storage_profile
        .data_disks
        .iter()
        .filter_map(|d| d.disk_size_gb)
        .sum();
    os_disk + data_disks
}

/// Join addresses into one `", "`-separated string, no trailing separator.
pub fn join_ips<S: AsRef<str>>(ips: &[S]) -> String {
    ips.iter().map(|ip| ip.as_ref()).join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DataDisk, HardwareProfile, OsDisk, StorageProfile};

    fn vm_with_disks(os_disk: Option<u64>, data_disks: &[u64]) -> VirtualMachine {
        VirtualMachine {
            id: "/subscriptions/s/resourceGroups/rg/providers/Microsoft.Compute/virtualMachines/vm"
                .to_string(),
            name: "vm".to_string(),
            location: "eastus".to_string(),
            resource_group: Some("rg".to_string()),
            hardware_profile: HardwareProfile {
                vm_size: "Standard_D2s_v3".to_string(),
            },
            storage_profile: StorageProfile {
                os_disk: Some(OsDisk {
                    disk_size_gb: os_disk,
                }),
                data_disks: data_disks
                    .iter()
                    .enumerate()
                    .map(|(lun, gb)| DataDisk {
                        disk_size_gb: Some(*gb),
                        lun: Some(lun as i32),
                    })
                    .collect(),
            },
        }
    }

    #[test]
    fn test_total_disk_os_plus_data() {
        let vm = vm_with_disks(Some(30), &[100, 50]);
        assert_eq!(total_disk_gb(&vm), 180);
    }

    #[test]
    fn test_total_disk_no_data_disks() {
        let vm = vm_with_disks(Some(64), &[]);
        assert_eq!(total_disk_gb(&vm), 64);
    }

    #[test]
    fn test_total_disk_null_os_disk_size() {
        let vm = vm_with_disks(None, &[128]);
        assert_eq!(total_disk_gb(&vm), 128);
    }

    #[test]
    fn test_join_ips_multiple() {
        let ips = ["10.0.0.4", "10.0.0.5", "10.0.1.4"];
        assert_eq!(join_ips(&ips), "10.0.0.4, 10.0.0.5, 10.0.1.4");
    }

    #[test]
    fn test_join_ips_single_no_separator() {
        assert_eq!(join_ips(&["10.0.0.4"]), "10.0.0.4");
    }

    #[test]
    fn test_join_ips_empty() {
        let none: [&str; 0] = [];
        assert_eq!(join_ips(&none), "");
    }
}
