//! Run configuration.
//!
//! Configuration comes from environment variables (a `.env` file is loaded
//! in `main`), replacing the interactive prompts of earlier tooling:
//! - `VM_INVENTORY_SUBSCRIPTIONS` - comma-separated subscription ids (required)
//! - `VM_INVENTORY_OUTPUT` - CSV output path (optional, defaults to a
//!   date-stamped file in the working directory)

use std::env;
use std::error::Error;
use std::path::PathBuf;

/// Pause between resource groups, to stay friendly with ARM throttling.
pub const SLEEP_MSEC: u64 = 100;

/// Resolved configuration for one inventory run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path the CSV export is written to.
    pub output_path: PathBuf,
    /// Subscriptions to collect, in input order.
    pub subscription_ids: Vec<String>,
}

impl Config {
    /// Build a config directly; used by tests and embedding callers.
    pub fn new(output_path: impl Into<PathBuf>, subscription_ids: Vec<String>) -> Config {
        Config {
            output_path: output_path.into(),
            subscription_ids,
        }
    }

    /// Read configuration from the environment.
    ///
    /// # Returns
    /// * `Ok(Config)` - if at least one subscription id is configured
    /// * `Err` - if `VM_INVENTORY_SUBSCRIPTIONS` is missing or empty
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        let raw = env::var("VM_INVENTORY_SUBSCRIPTIONS")
            .map_err(|_| "VM_INVENTORY_SUBSCRIPTIONS is not set (comma-separated ids)")?;
        let subscription_ids = parse_subscription_list(&raw);
        if subscription_ids.is_empty() {
            return Err("VM_INVENTORY_SUBSCRIPTIONS contains no subscription ids".into());
        }

        let output_path = env::var("VM_INVENTORY_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_output_path());

        Ok(Config {
            output_path,
            subscription_ids,
        })
    }
}

/// Split a comma-separated subscription list, trimming each entry and
/// dropping empties.
pub fn parse_subscription_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Default export file name, date-stamped like `vm_inventory_2024-05-01.csv`.
fn default_output_path() -> PathBuf {
    PathBuf::from(format!(
        "vm_inventory_{}.csv",
        chrono::Utc::now().format("%Y-%m-%d")
    ))
}
