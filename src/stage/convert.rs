//! Track file format conversion.
//!
//! Converts the tracker's native `.tck` output into a TrackVis `.trk` file so
//! downstream analysis sees one data schema regardless of which toolbox did
//! the tracking. The seed-mask image supplies the spatial reference. The
//! intermediate `.tck` is removed afterwards unless the caller keeps it.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// What to do with the intermediate `.tck` file after conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cleanup {
    /// Remove the intermediate file to save storage (the default).
    #[default]
    Delete,
    /// Leave the intermediate file in place.
    Keep,
}

/// Convert `tck_file` to a `.trk` file at `output_file`.
///
/// Returns the final `.trk` path. Under [`Cleanup::Delete`] the intermediate
/// file is gone when this returns; a failed removal is an error, since the
/// orchestrator relies on cleanup to bound storage across thousands of seeds.
pub fn convert_to_trk(
    tool: &Path,
    tck_file: &Path,
    image_file: &Path,
    output_file: &Path,
    cleanup: Cleanup,
) -> Result<PathBuf> {
    info!("Converting {:?} to {:?}", tck_file, output_file);

    let output = Command::new(tool)
        .arg("-r")
        .arg(image_file)
        .arg(tck_file)
        .arg(output_file)
        .output()?;

    if !output.status.success() {
        return Err(Error::ToolFailed {
            tool: "tck2trk".to_string(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    if !output_file.exists() {
        return Err(Error::MissingOutput {
            tool: "tck2trk".to_string(),
            path: output_file.to_path_buf(),
        });
    }

    match cleanup {
        Cleanup::Delete => {
            debug!("Removing intermediate {:?}", tck_file);
            std::fs::remove_file(tck_file)?;
        }
        Cleanup::Keep => {
            debug!("Keeping intermediate {:?}", tck_file);
        }
    }

    Ok(output_file.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_defaults_to_delete() {
        assert_eq!(Cleanup::default(), Cleanup::Delete);
    }

    #[test]
    fn test_convert_missing_binary() {
        let err = convert_to_trk(
            Path::new("/nonexistent/tck2trk"),
            Path::new("in.tck"),
            Path::new("seed_0001.nii"),
            Path::new("out.trk"),
            Cleanup::Delete,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
