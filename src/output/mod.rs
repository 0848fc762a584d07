//! Export and terminal output.
//!
//! - [`csv`] - the CSV inventory file
//! - [`terminal`] - run summary formatting for the console

pub mod csv;
pub mod terminal;

// Re-export public functions
pub use csv::{escape_csv_field, write_inventory_csv};
pub use terminal::{format_field, print_run_summary};
