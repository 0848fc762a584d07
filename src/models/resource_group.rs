//! Azure resource group data model.

use serde::{Deserialize, Serialize};

/// A resource group listing entry from `az group list`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGroup {
    /// Name of the resource group.
    pub name: String,
    /// Azure region the group lives in.
    pub location: String,
}
