//! Azure CLI command execution.
//!
//! Provides utilities for running `az` commands and capturing their output.

use crate::error::InventoryError;
use colored::Colorize;
use regex::Regex;
use std::process::Command;
use std::sync::OnceLock;

/// Stdout above this size is logged; VM listings in large subscriptions can
/// get big, so it is a warning rather than a failure.
const LARGE_OUTPUT_BYTES: usize = 5_000_000;

/// Regex for splitting command strings while preserving quoted substrings.
static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_command_regex() -> &'static Regex {
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]*)\s*"#).expect("Invalid Regex")
    })
}

/// Run a shell command and return its stdout.
///
/// The command string is split on spaces, with quoted substrings preserved,
/// so ARM ids and `--query` expressions survive intact.
///
/// # Arguments
/// * `cmd` - The command string to execute
///
/// # Returns
/// * `Ok(String)` - The stdout output on success
/// * `Err(InventoryError::Fetch)` - If the command fails to start, exits
///   non-zero, or emits non-UTF-8 output
pub fn run(cmd: &str) -> Result<String, InventoryError> {
    log::debug!("run({cmd})", cmd = cmd.on_blue());

    let cmds: Vec<&str> = split_and_strip(cmd);
    log::trace!("split cmds={:?}", cmds);

    // Build command and add args
    let mut command = Command::new(cmds[0]);
    for arg in cmds.iter().skip(1) {
        command.arg(arg);
    }

    let output = command.output().map_err(|e| {
        log::error!("Command execution failed: {}", e);
        InventoryError::Fetch(format!("failed to execute command: {}", e))
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        return Err(InventoryError::Fetch(format!("ERROR running: {stderr}")));
    }

    log::debug!("Success cmd: {cmd}");
    log::debug!("Success output.stdout.len(): {}", output.stdout.len());
    if output.stdout.len() > LARGE_OUTPUT_BYTES {
        log::warn!(
            "Large response: {} bytes from {cmd}",
            output.stdout.len(),
            cmd = cmd.on_blue()
        );
    }

    String::from_utf8(output.stdout)
        .map_err(|e| InventoryError::Fetch(format!("invalid UTF-8 in command output: {}", e)))
}

/// Split a command string on spaces, preserving quoted substrings.
fn split_and_strip(input: &str) -> Vec<&str> {
    get_command_regex()
        .find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .collect()
}
