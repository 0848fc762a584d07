//! Error taxonomy for the inventory run.
//!
//! Failures are caught at the narrowest scope that contains them:
//! [`InventoryError::Auth`] aborts one subscription, [`InventoryError::Fetch`]
//! and [`InventoryError::Parse`] abort one VM, [`InventoryError::Output`]
//! aborts the run (there is nothing to export without the file).

use std::fmt;
use std::io;

/// Errors raised while collecting or exporting VM inventory.
#[derive(Debug)]
pub enum InventoryError {
    /// Session establishment failed for a subscription.
    Auth(String),
    /// A listing or lookup call against Azure failed.
    Fetch(String),
    /// Azure CLI output did not deserialize into the expected shape.
    Parse(String),
    /// Writing the CSV export failed.
    Output(io::Error),
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventoryError::Auth(msg) => write!(f, "authentication error: {}", msg),
            InventoryError::Fetch(msg) => write!(f, "resource fetch error: {}", msg),
            InventoryError::Parse(msg) => write!(f, "parse error: {}", msg),
            InventoryError::Output(err) => write!(f, "output error: {}", err),
        }
    }
}

impl std::error::Error for InventoryError {}

impl From<io::Error> for InventoryError {
    fn from(error: io::Error) -> Self {
        InventoryError::Output(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_auth() {
        let err = InventoryError::Auth("tenant not found".to_string());
        assert_eq!(err.to_string(), "authentication error: tenant not found");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: InventoryError = io_err.into();
        assert!(matches!(err, InventoryError::Output(_)));
    }
}
