//! Per-location VM size catalog cache.

use crate::azure::AzureApi;
use crate::error::InventoryError;
use crate::models::VmSize;
use std::collections::HashMap;

/// Fetch-through cache of `az vm list-sizes` per location.
///
/// Only successful fetches are cached; a failed fetch surfaces to the
/// current VM and is retried when the next VM in that location asks, so one
/// transient failure does not poison the rest of the pass.
#[derive(Debug, Default)]
pub struct SizeCatalog {
    /// Size entries keyed by location, then by lowercased size name.
    by_location: HashMap<String, HashMap<String, VmSize>>,
}

impl SizeCatalog {
    /// Create an empty catalog; it fills lazily as locations are seen.
    pub fn new() -> SizeCatalog {
        SizeCatalog::default()
    }

    /// Look up a size entry for (location, size name).
    ///
    /// # Returns
    /// * `Ok(Some(VmSize))` - catalog entry found
    /// * `Ok(None)` - catalog fetched but the size is not listed there
    /// * `Err` - the catalog fetch for this location failed
    pub fn lookup<A: AzureApi>(
        &mut self,
        api: &A,
        location: &str,
        size_name: &str,
    ) -> Result<Option<VmSize>, InventoryError> {
        if !self.by_location.contains_key(location) {
            let sizes = api.list_vm_sizes(location)?;
            log::debug!("Loaded {} sizes for location {location}", sizes.len());
            let entries = sizes
                .into_iter()
                .map(|s| (s.name.to_ascii_lowercase(), s))
                .collect();
            self.by_location.insert(location.to_string(), entries);
        }

        // Size identifiers are case-insensitive in ARM.
        Ok(self
            .by_location
            .get(location)
            .and_then(|entries| entries.get(&size_name.to_ascii_lowercase()))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockApi;

    fn api_with_sizes() -> MockApi {
        let mut api = MockApi::new();
        api.add_size("eastus", "Standard_D2s_v3", 2, 8192);
        api.add_size("eastus", "Standard_D4s_v3", 4, 16384);
        api
    }

    #[test]
    fn test_lookup_found() {
        let api = api_with_sizes();
        let mut catalog = SizeCatalog::new();
        let size = catalog
            .lookup(&api, "eastus", "Standard_D2s_v3")
            .expect("lookup failed")
            .expect("size missing");
        assert_eq!(size.number_of_cores, 2);
        assert_eq!(size.memory_in_mb, 8192);
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let api = api_with_sizes();
        let mut catalog = SizeCatalog::new();
        let size = catalog
            .lookup(&api, "eastus", "standard_d4s_V3")
            .expect("lookup failed");
        assert_eq!(size.expect("size missing").name, "Standard_D4s_v3");
    }

    #[test]
    fn test_lookup_absent_size_is_none() {
        let api = api_with_sizes();
        let mut catalog = SizeCatalog::new();
        let size = catalog
            .lookup(&api, "eastus", "Standard_M128ms")
            .expect("lookup failed");
        assert!(size.is_none());
    }

    #[test]
    fn test_lookup_caches_per_location() {
        let api = api_with_sizes();
        let mut catalog = SizeCatalog::new();
        catalog.lookup(&api, "eastus", "Standard_D2s_v3").unwrap();
        catalog.lookup(&api, "eastus", "Standard_D4s_v3").unwrap();
        assert_eq!(api.size_fetches(), 1);
    }

    #[test]
    fn test_failed_fetch_not_cached() {
        let mut api = api_with_sizes();
        api.fail_vm_sizes_locations.insert("westus".to_string());
        let mut catalog = SizeCatalog::new();

        assert!(catalog.lookup(&api, "westus", "Standard_D2s_v3").is_err());
        // The failure must not have been cached as an empty catalog.
        assert!(catalog.lookup(&api, "westus", "Standard_D2s_v3").is_err());
        assert_eq!(api.size_fetches(), 2);
    }
}
