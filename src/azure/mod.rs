//! Azure CLI interaction.
//!
//! This module handles all Azure-related operations:
//! - [`cli`] - Command execution for the `az` CLI
//! - [`api`] - Typed listing/lookup calls behind the [`AzureApi`] seam
//! - [`session`] - Scoped subscription sessions with guaranteed release

pub mod api;
pub mod cli;
pub mod session;

// Re-export public types and functions
pub use api::{AzCli, AzureApi};
pub use session::SubscriptionSession;
