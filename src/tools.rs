//! External tool detection and management.
//!
//! The stage drives two external binaries: the MRtrix streamline tracker and
//! the tck-to-trk converter. Both are resolved from PATH unless the config
//! pins an explicit path.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Name of the streamline-tracking binary (MRtrix 0.2).
pub const STREAMTRACK: &str = "streamtrack";

/// Name of the tck-to-trk track file converter.
pub const TCK2TRK: &str = "tck2trk";

/// Information about an external tool.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Name of the tool.
    pub name: String,
    /// Whether the tool is available.
    pub available: bool,
    /// Version string if the tool reports one.
    pub version: Option<String>,
    /// Path to the tool executable.
    pub path: Option<PathBuf>,
}

/// Check if a tool is available and get its information.
///
/// Availability is decided by PATH resolution. The version query is
/// best-effort: MRtrix 0.2 binaries print usage and exit non-zero when
/// invoked with `-version`, so a failed query does not mark the tool missing.
pub fn check_tool(name: &str) -> ToolInfo {
    let path = match which::which(name) {
        Ok(p) => p,
        Err(_) => {
            return ToolInfo {
                name: name.to_string(),
                available: false,
                version: None,
                path: None,
            }
        }
    };

    let version = Command::new(&path)
        .arg("-version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| {
            String::from_utf8_lossy(&output.stdout)
                .lines()
                .next()
                .map(|s| s.to_string())
        });

    ToolInfo {
        name: name.to_string(),
        available: true,
        version,
        path: Some(path),
    }
}

/// Check the external tools this stage depends on.
pub fn check_tools() -> Vec<ToolInfo> {
    vec![check_tool(STREAMTRACK), check_tool(TCK2TRK)]
}

/// Require that a tool is available, returning its path.
///
/// # Errors
///
/// Returns an error if the tool is not found.
pub fn require_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| Error::tool_not_found(name))
}

/// Get the path to a tool, preferring a configured path over PATH lookup.
pub fn get_tool_path(name: &str, config_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = config_path {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
    }

    require_tool(name)
}
