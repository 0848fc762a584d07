//! Cross-subscription Azure VM inventory export.
//!
//! Walks every subscription in the configuration, lists its resource groups
//! and VMs, joins each VM with the size catalog, its NICs and public IPs,
//! and writes one flat CSV row per VM:
//! - [`azure`] - `az` CLI transport and the [`azure::AzureApi`] seam
//! - [`collector`] - the per-subscription collection pass
//! - [`models`] - wire models and the [`models::ExportRow`] record
//! - [`output`] - CSV file and terminal summary
//! - [`config`] / [`error`] - run configuration and the error taxonomy

pub mod azure;
pub mod collector;
pub mod config;
pub mod error;
pub mod models;
pub mod output;

pub use config::Config;
pub use error::InventoryError;

use azure::AzureApi;
use std::error::Error;
use std::path::PathBuf;

/// Outcome of one inventory run.
#[derive(Debug)]
pub struct RunSummary {
    /// Rows written to the export file.
    pub rows_written: usize,
    /// Subscriptions that completed collection, in input order.
    pub subscriptions_ok: Vec<String>,
    /// Subscriptions that failed (authentication or a top-level error).
    pub subscriptions_failed: Vec<String>,
    /// Where the export landed.
    pub output_path: PathBuf,
}

impl RunSummary {
    /// True when a non-empty subscription list produced no successful pass.
    /// Drives the process exit code.
    pub fn all_failed(&self) -> bool {
        self.subscriptions_ok.is_empty() && !self.subscriptions_failed.is_empty()
    }
}

/// Collect every configured subscription and write the CSV export once.
///
/// Subscriptions are processed sequentially in input order. A failing
/// subscription is logged and recorded in the summary; it never stops the
/// run. Rows from all subscriptions accumulate and the output file is
/// written a single time at the end, so a multi-subscription run yields one
/// combined export rather than each subscription overwriting the last.
///
/// # Returns
/// * `Ok(RunSummary)` - per-subscription outcomes and the row count
/// * `Err` - only when writing the export file fails
pub fn run_inventory<A: AzureApi>(api: &A, config: &Config) -> Result<RunSummary, Box<dyn Error>> {
    let mut all_rows = Vec::new();
    let mut subscriptions_ok = Vec::new();
    let mut subscriptions_failed = Vec::new();

    for subscription_id in &config.subscription_ids {
        log::info!("# Collecting subscription {subscription_id}");
        match collector::collect_subscription(api, subscription_id) {
            Ok(rows) => {
                all_rows.extend(rows);
                subscriptions_ok.push(subscription_id.clone());
            }
            Err(e) => {
                log::error!("Subscription {subscription_id} failed: {e}");
                subscriptions_failed.push(subscription_id.clone());
            }
        }
    }

    output::write_inventory_csv(&config.output_path, &all_rows)?;

    Ok(RunSummary {
        rows_written: all_rows.len(),
        subscriptions_ok,
        subscriptions_failed,
        output_path: config.output_path.clone(),
    })
}
