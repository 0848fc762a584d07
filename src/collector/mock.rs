//! In-memory [`AzureApi`] for tests.
//!
//! `MockApi` serves fixture inventory without touching the `az` CLI and can
//! inject failures at each scope the collector isolates: denied
//! subscriptions, failing VM listings, failing size-catalog fetches and
//! failing public IP resolutions.

use crate::azure::{AzureApi, SubscriptionSession};
use crate::error::InventoryError;
use crate::models::{
    HardwareProfile, IpConfiguration, NetworkInterface, OsDisk, ResourceGroup, ResourceRef,
    StorageProfile, VirtualMachine, VmSize,
};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

/// Scripted Azure inventory with failure injection.
#[derive(Debug, Default)]
pub struct MockApi {
    resource_groups: Vec<ResourceGroup>,
    vms_by_group: HashMap<String, Vec<VirtualMachine>>,
    sizes_by_location: HashMap<String, Vec<VmSize>>,
    nics_by_group: HashMap<String, Vec<NetworkInterface>>,
    public_ips: HashMap<String, String>,

    /// Subscriptions whose session establishment fails.
    pub deny_subscriptions: HashSet<String>,
    /// Resource groups whose VM listing fails.
    pub fail_vm_list_groups: HashSet<String>,
    /// Locations whose size catalog fetch fails.
    pub fail_vm_sizes_locations: HashSet<String>,
    /// Public IP ids whose resolution fails.
    pub fail_public_ip_ids: HashSet<String>,

    auth_attempts: RefCell<Vec<String>>,
    size_fetch_count: Cell<usize>,
}

impl MockApi {
    /// Creates an empty mock; populate it with the `add_*` methods.
    pub fn new() -> MockApi {
        MockApi::default()
    }

    pub fn add_resource_group(&mut self, name: &str, location: &str) {
        self.resource_groups.push(ResourceGroup {
            name: name.to_string(),
            location: location.to_string(),
        });
    }

    /// Register a VM under its resource group.
    pub fn add_vm(&mut self, vm: VirtualMachine) {
        let group = vm
            .resource_group
            .clone()
            .expect("mock VMs carry a resource group");
        self.vms_by_group.entry(group).or_default().push(vm);
    }

    pub fn add_size(&mut self, location: &str, name: &str, cores: u32, memory_mb: u32) {
        self.sizes_by_location
            .entry(location.to_string())
            .or_default()
            .push(VmSize {
                name: name.to_string(),
                number_of_cores: cores,
                memory_in_mb: memory_mb,
            });
    }

    pub fn add_nic(&mut self, group: &str, nic: NetworkInterface) {
        self.nics_by_group
            .entry(group.to_string())
            .or_default()
            .push(nic);
    }

    pub fn add_public_ip(&mut self, id: &str, address: &str) {
        self.public_ips.insert(id.to_string(), address.to_string());
    }

    /// Subscriptions for which a session was attempted, in order.
    pub fn auth_attempts(&self) -> Vec<String> {
        self.auth_attempts.borrow().clone()
    }

    /// How many size catalog fetches were served (or failed).
    pub fn size_fetches(&self) -> usize {
        self.size_fetch_count.get()
    }
}

impl AzureApi for MockApi {
    fn open_session(
        &self,
        subscription_id: &str,
    ) -> Result<SubscriptionSession, InventoryError> {
        self.auth_attempts
            .borrow_mut()
            .push(subscription_id.to_string());
        if self.deny_subscriptions.contains(subscription_id) {
            return Err(InventoryError::Auth(format!(
                "{subscription_id}: access denied"
            )));
        }
        Ok(SubscriptionSession::new(subscription_id))
    }

    fn list_resource_groups(&self) -> Result<Vec<ResourceGroup>, InventoryError> {
        Ok(self.resource_groups.clone())
    }

    fn list_vms(&self, resource_group: &str) -> Result<Vec<VirtualMachine>, InventoryError> {
        if self.fail_vm_list_groups.contains(resource_group) {
            return Err(InventoryError::Fetch(format!(
                "vm list failed for {resource_group}"
            )));
        }
        Ok(self
            .vms_by_group
            .get(resource_group)
            .cloned()
            .unwrap_or_default())
    }

    fn list_vm_sizes(&self, location: &str) -> Result<Vec<VmSize>, InventoryError> {
        self.size_fetch_count.set(self.size_fetch_count.get() + 1);
        if self.fail_vm_sizes_locations.contains(location) {
            return Err(InventoryError::Fetch(format!(
                "size list failed for {location}"
            )));
        }
        Ok(self
            .sizes_by_location
            .get(location)
            .cloned()
            .unwrap_or_default())
    }

    fn list_network_interfaces(
        &self,
        resource_group: &str,
    ) -> Result<Vec<NetworkInterface>, InventoryError> {
        Ok(self
            .nics_by_group
            .get(resource_group)
            .cloned()
            .unwrap_or_default())
    }

    fn resolve_public_ip(&self, public_ip_id: &str) -> Result<Option<String>, InventoryError> {
        if self.fail_public_ip_ids.contains(public_ip_id) {
            return Err(InventoryError::Fetch(format!(
                "public ip show failed for {public_ip_id}"
            )));
        }
        Ok(self.public_ips.get(public_ip_id).cloned())
    }
}

/// Build a mock VM with a well-formed ARM id.
pub fn vm(
    group: &str,
    name: &str,
    location: &str,
    size: &str,
    os_disk_gb: Option<u64>,
    data_disk_gbs: &[u64],
) -> VirtualMachine {
    VirtualMachine {
        id: format!(
            "/subscriptions/sub1/resourceGroups/{group}/providers/Microsoft.Compute/virtualMachines/{name}"
        ),
        name: name.to_string(),
        location: location.to_string(),
        resource_group: Some(group.to_string()),
        hardware_profile: HardwareProfile {
            vm_size: size.to_string(),
        },
        storage_profile: StorageProfile {
            os_disk: Some(OsDisk {
                disk_size_gb: os_disk_gb,
            }),
            data_disks: data_disk_gbs
                .iter()
                .enumerate()
                .map(|(lun, gb)| crate::models::DataDisk {
                    disk_size_gb: Some(*gb),
                    lun: Some(lun as i32),
                })
                .collect(),
        },
    }
}

/// Build a mock NIC; each entry in `ip_configs` is
/// `(private ip, optional public ip resource id)`.
pub fn nic(
    group: &str,
    name: &str,
    vm_id: Option<&str>,
    ip_configs: &[(&str, Option<&str>)],
) -> NetworkInterface {
    NetworkInterface {
        id: format!(
            "/subscriptions/sub1/resourceGroups/{group}/providers/Microsoft.Network/networkInterfaces/{name}"
        ),
        virtual_machine: vm_id.map(|id| ResourceRef { id: id.to_string() }),
        ip_configurations: ip_configs
            .iter()
            .map(|(private_ip, public_ip_id)| IpConfiguration {
                private_ip_address: Some(private_ip.to_string()),
                public_ip_address: public_ip_id.map(|id| ResourceRef { id: id.to_string() }),
            })
            .collect(),
    }
}
