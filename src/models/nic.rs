//! Network interface and public IP data models.

use serde::{Deserialize, Serialize};

/// A NIC listing entry from `az network nic list`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterface {
    /// Full ARM resource id.
    pub id: String,
    /// Back-reference to the VM this NIC is attached to, if any.
    #[serde(default)]
    pub virtual_machine: Option<ResourceRef>,
    /// IP configurations in enumeration order.
    #[serde(default)]
    pub ip_configurations: Vec<IpConfiguration>,
}

impl NetworkInterface {
    /// Whether this NIC is attached to the VM with the given ARM id.
    ///
    /// ARM resource ids are compared case-insensitively; the casing of the
    /// resource-group segment differs between the VM and NIC listings.
    pub fn is_attached_to(&self, vm_id: &str) -> bool {
        self.virtual_machine
            .as_ref()
            .map(|r| r.id.eq_ignore_ascii_case(vm_id))
            .unwrap_or(false)
    }
}

/// One IP configuration on a NIC.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct IpConfiguration {
    /// Private address, if allocated.
    #[serde(default, alias = "privateIPAddress")]
    pub private_ip_address: Option<String>,
    /// Reference to a public IP resource, present only if one is assigned.
    #[serde(default, alias = "publicIPAddress")]
    pub public_ip_address: Option<ResourceRef>,
}

/// Reference to another ARM resource by id.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRef {
    /// Full ARM resource id.
    pub id: String,
}

/// A public IP resource from `az network public-ip show`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PublicIpAddress {
    /// The address value; null until Azure assigns one.
    #[serde(default, alias = "ipAddress")]
    pub ip_address: Option<String>,
}
