//! VM size catalog data model.

use serde::{Deserialize, Serialize};

/// A size catalog entry from `az vm list-sizes --location <region>`.
///
/// The catalog is location-scoped: the same size identifier can carry
/// different capabilities per region.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VmSize {
    /// Size identifier, e.g. `Standard_D2s_v3`.
    pub name: String,
    /// Virtual CPU count.
    pub number_of_cores: u32,
    /// Memory in MB.
    #[serde(alias = "memoryInMB")]
    pub memory_in_mb: u32,
}
