//! The collection pass for one subscription.

use super::aggregate::{join_ips, total_disk_gb};
use super::catalog::SizeCatalog;
use crate::azure::AzureApi;
use crate::config;
use crate::error::InventoryError;
use crate::models::{ExportRow, ResourceGroup, VirtualMachine};

/// Collect one export row per successfully-inspected VM in `subscription_id`.
///
/// Failure scopes, narrowest first: a VM whose detail fetch fails is logged
/// and skipped; a resource group whose VM listing fails is logged and
/// skipped; an authentication failure aborts the whole subscription. The
/// session guard is dropped on every exit path.
///
/// # Arguments
/// * `api` - Azure listing/lookup implementation
/// * `subscription_id` - subscription to collect
///
/// # Returns
/// * `Ok(Vec<ExportRow>)` - rows in group, then VM enumeration order
/// * `Err(InventoryError::Auth)` - session establishment failed
pub fn collect_subscription<A: AzureApi>(
    api: &A,
    subscription_id: &str,
) -> Result<Vec<ExportRow>, InventoryError> {
    let _session = api.open_session(subscription_id)?;

    let groups = api.list_resource_groups()?;
    if groups.is_empty() {
        log::info!("No resource groups in subscription {subscription_id}");
        return Ok(Vec::new());
    }
    log::info!(
        "Subscription {subscription_id}: {} resource groups",
        groups.len()
    );

    let mut catalog = SizeCatalog::new();
    let mut rows = Vec::new();

    for group in &groups {
        log::info!("## Resource group {}", group.name);

        let vms = match api.list_vms(&group.name) {
            Ok(vms) => vms,
            Err(e) => {
                log::warn!("Skipping resource group {}: {e}", group.name);
                continue;
            }
        };
        if vms.is_empty() {
            log::info!("No VMs in resource group {}", group.name);
            continue;
        }

        for vm in &vms {
            log::info!("### VM {} ({})", vm.name, vm.size_name());
            match build_export_row(api, &mut catalog, group, vm) {
                Ok(row) => rows.push(row),
                Err(e) => log::warn!("Skipping VM {}: {e}", vm.name),
            }
        }

        std::thread::sleep(std::time::Duration::from_millis(config::SLEEP_MSEC));
    }

    log::info!(
        "Subscription {subscription_id}: collected {} rows",
        rows.len()
    );
    Ok(rows)
}

/// Join one VM with its size catalog entry, NICs and public IPs.
fn build_export_row<A: AzureApi>(
    api: &A,
    catalog: &mut SizeCatalog,
    group: &ResourceGroup,
    vm: &VirtualMachine,
) -> Result<ExportRow, InventoryError> {
    // Absent catalog entry leaves CPU/RAM empty; only the fetch itself can fail.
    let size = catalog.lookup(api, &vm.location, vm.size_name())?;
    if size.is_none() {
        log::warn!(
            "Size {} not in catalog for location {}",
            vm.size_name(),
            vm.location
        );
    }

    let nics = api.list_network_interfaces(&group.name)?;

    let mut private_ips = Vec::new();
    let mut public_ips = Vec::new();
    for nic in nics.iter().filter(|nic| nic.is_attached_to(&vm.id)) {
        for ip_config in &nic.ip_configurations {
            if let Some(private_ip) = &ip_config.private_ip_address {
                private_ips.push(private_ip.clone());
            }
            if let Some(public_ip_ref) = &ip_config.public_ip_address {
                if let Some(address) = api.resolve_public_ip(&public_ip_ref.id)? {
                    public_ips.push(address);
                }
            }
        }
    }

    Ok(ExportRow {
        vm_name: vm.name.clone(),
        vm_type: vm.size_name().to_string(),
        cpu: size.as_ref().map(|s| s.number_of_cores),
        ram_mb: size.as_ref().map(|s| s.memory_in_mb),
        disk_size_gb: total_disk_gb(vm),
        region: vm.location.clone(),
        resource_group: group.name.clone(),
        private_ips: join_ips(&private_ips),
        public_ips: join_ips(&public_ips),
    })
}
