//! Typed Azure listing and lookup calls.
//!
//! [`AzureApi`] is the seam between the collector and Azure: the production
//! implementation [`AzCli`] shells out to the `az` CLI, and tests swap in a
//! mock. The `az` list commands drain server-side pagination themselves, so
//! every listing arrives as one complete JSON array.

use super::cli;
use super::session::SubscriptionSession;
use crate::error::InventoryError;
use crate::models::{NetworkInterface, PublicIpAddress, ResourceGroup, VirtualMachine, VmSize};
use serde::de::DeserializeOwned;

/// Listing and lookup operations the collector needs from Azure.
pub trait AzureApi {
    /// Establish an authenticated session scoped to `subscription_id`.
    ///
    /// Subsequent listing calls run against this subscription until the
    /// returned guard is dropped.
    fn open_session(&self, subscription_id: &str)
        -> Result<SubscriptionSession, InventoryError>;

    /// List all resource groups in the active subscription.
    fn list_resource_groups(&self) -> Result<Vec<ResourceGroup>, InventoryError>;

    /// List the VMs in one resource group.
    fn list_vms(&self, resource_group: &str) -> Result<Vec<VirtualMachine>, InventoryError>;

    /// List the size catalog for one region.
    fn list_vm_sizes(&self, location: &str) -> Result<Vec<VmSize>, InventoryError>;

    /// List the NICs in one resource group.
    fn list_network_interfaces(
        &self,
        resource_group: &str,
    ) -> Result<Vec<NetworkInterface>, InventoryError>;

    /// Resolve a public IP resource id to its address value.
    ///
    /// Returns `Ok(None)` when the resource exists but Azure has not
    /// assigned it an address yet.
    fn resolve_public_ip(&self, public_ip_id: &str) -> Result<Option<String>, InventoryError>;
}

/// Production [`AzureApi`] backed by the `az` CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct AzCli;

impl AzCli {
    /// Creates a new `AzCli` instance.
    pub fn new() -> AzCli {
        AzCli
    }
}

impl AzureApi for AzCli {
    fn open_session(
        &self,
        subscription_id: &str,
    ) -> Result<SubscriptionSession, InventoryError> {
        cli::run(&format!(
            "az account set --subscription '{subscription_id}'"
        ))
        .map_err(|e| InventoryError::Auth(format!("{subscription_id}: {e}")))?;
        Ok(SubscriptionSession::new(subscription_id))
    }

    fn list_resource_groups(&self) -> Result<Vec<ResourceGroup>, InventoryError> {
        let output = cli::run("az group list --output json")?;
        parse_json("resource group list", &output)
    }

    fn list_vms(&self, resource_group: &str) -> Result<Vec<VirtualMachine>, InventoryError> {
        let output = cli::run(&format!(
            "az vm list --resource-group '{resource_group}' --output json"
        ))?;
        parse_json("vm list", &output)
    }

    fn list_vm_sizes(&self, location: &str) -> Result<Vec<VmSize>, InventoryError> {
        let output = cli::run(&format!(
            "az vm list-sizes --location '{location}' --output json"
        ))?;
        parse_json("vm size list", &output)
    }

    fn list_network_interfaces(
        &self,
        resource_group: &str,
    ) -> Result<Vec<NetworkInterface>, InventoryError> {
        let output = cli::run(&format!(
            "az network nic list --resource-group '{resource_group}' --output json"
        ))?;
        parse_json("nic list", &output)
    }

    fn resolve_public_ip(&self, public_ip_id: &str) -> Result<Option<String>, InventoryError> {
        let output = cli::run(&format!(
            "az network public-ip show --ids '{public_ip_id}' --output json"
        ))?;
        let public_ip: PublicIpAddress = parse_json("public ip", &output)?;
        Ok(public_ip.ip_address)
    }
}

/// Deserialize `az` JSON output, reporting the failing path on error.
pub(crate) fn parse_json<T: DeserializeOwned>(
    what: &str,
    payload: &str,
) -> Result<T, InventoryError> {
    let mut deserializer = serde_json::Deserializer::from_str(payload);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::error!("OUTPUT START:\n\n{}\n\nOUTPUT END\n", payload);
        InventoryError::Parse(format!("{what}: path={} error={}", e.path(), e))
    })
}

// Fixture files under src/tests/test_data hold captured `az` output shapes.
#[cfg(test)]
mod tests {
    use super::*;

    fn read_fixture(name: &str) -> String {
        std::fs::read_to_string(format!("src/tests/test_data/{name}"))
            .unwrap_or_else(|e| panic!("Error reading fixture {name}: {e}"))
    }

    #[test]
    fn test_parse_resource_group_list() {
        let groups: Vec<ResourceGroup> =
            parse_json("resource group list", &read_fixture("group_list_01.json"))
                .expect("Error parsing resource group fixture");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "rg-prod-weu");
        assert_eq!(groups[1].location, "eastus");
    }

    #[test]
    fn test_parse_vm_list() {
        let vms: Vec<VirtualMachine> =
            parse_json("vm list", &read_fixture("vm_list_01.json"))
                .expect("Error parsing vm list fixture");
        assert_eq!(vms.len(), 2);

        let vm = &vms[0];
        assert_eq!(vm.name, "vm-web-01");
        assert_eq!(vm.size_name(), "Standard_D2s_v3");
        assert_eq!(
            vm.storage_profile.os_disk.as_ref().unwrap().disk_size_gb,
            Some(30)
        );
        assert_eq!(vm.storage_profile.data_disks.len(), 2);

        // Second VM has a null os disk size and no data disks.
        let vm = &vms[1];
        assert_eq!(vm.storage_profile.os_disk.as_ref().unwrap().disk_size_gb, None);
        assert!(vm.storage_profile.data_disks.is_empty());
    }

    #[test]
    fn test_parse_vm_size_list() {
        let sizes: Vec<VmSize> =
            parse_json("vm size list", &read_fixture("vm_sizes_01.json"))
                .expect("Error parsing vm sizes fixture");
        assert_eq!(sizes.len(), 3);
        let d2s = sizes
            .iter()
            .find(|s| s.name == "Standard_D2s_v3")
            .expect("Standard_D2s_v3 missing from fixture");
        assert_eq!(d2s.number_of_cores, 2);
        assert_eq!(d2s.memory_in_mb, 8192);
    }

    #[test]
    fn test_parse_nic_list() {
        let nics: Vec<NetworkInterface> =
            parse_json("nic list", &read_fixture("nic_list_01.json"))
                .expect("Error parsing nic list fixture");
        assert_eq!(nics.len(), 3);

        // First NIC: attached, one private IP, one public IP reference.
        assert!(nics[0].virtual_machine.is_some());
        assert_eq!(
            nics[0].ip_configurations[0].private_ip_address.as_deref(),
            Some("10.1.0.4")
        );
        assert!(nics[0].ip_configurations[0].public_ip_address.is_some());

        // Last NIC is orphaned: no VM back-reference.
        assert!(nics[2].virtual_machine.is_none());
    }

    #[test]
    fn test_parse_public_ip() {
        let ip: PublicIpAddress = parse_json("public ip", &read_fixture("public_ip_01.json"))
            .expect("Error parsing public ip fixture");
        assert_eq!(ip.ip_address.as_deref(), Some("52.170.10.20"));
    }

    #[test]
    fn test_parse_public_ip_unassigned() {
        let ip: PublicIpAddress =
            parse_json("public ip", r#"{"id": "/x/y/z", "ipAddress": null}"#)
                .expect("Error parsing unassigned public ip");
        assert!(ip.ip_address.is_none());
    }

    #[test]
    fn test_parse_json_reports_path() {
        let err = parse_json::<Vec<VirtualMachine>>(
            "vm list",
            r#"[{"id": "x", "name": "vm", "location": "eastus", "hardwareProfile": {"vmSize": 42}, "storageProfile": {}}]"#,
        )
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("vm list"), "unexpected error: {msg}");
        assert!(msg.contains("hardwareProfile.vmSize"), "unexpected error: {msg}");
    }
}
