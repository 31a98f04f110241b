//! Streamline-tracking invocation.
//!
//! Drives the MRtrix `streamtrack` binary. Fiber tracking itself happens
//! entirely inside the external tool; this module only builds the argument
//! list and checks the outcome.

use crate::error::{Error, Result};
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

/// Fixed tracking parameters, shared by every seed of a pipeline run.
#[derive(Debug, Clone)]
pub struct TrackingSettings {
    /// Tracking model passed to the tracker (default: probabilistic, SD_PROB).
    pub input_model: String,
    /// Minimum tract length in millimetres (default: 30).
    pub min_tract_length_mm: u32,
    /// Stop tracks as soon as they enter the inclusion region.
    pub stop: bool,
    /// Turn off interpolation of the tracking mask.
    pub no_mask_interpolation: bool,
    /// Track from the seed point in one direction only.
    pub unidirectional: bool,
}

impl Default for TrackingSettings {
    fn default() -> Self {
        Self {
            input_model: "SD_PROB".to_string(),
            min_tract_length_mm: 30,
            stop: true,
            no_mask_interpolation: true,
            unidirectional: true,
        }
    }
}

/// Build the argument list for a `streamtrack` invocation.
///
/// Options come first, the input model and the in/out files are positional
/// and trail the options, matching the MRtrix 0.2 CLI.
pub fn streamtrack_args(
    settings: &TrackingSettings,
    sh_image: &Path,
    seedmask: &Path,
    targetmask: &Path,
    wm_mask: &Path,
    seed_count: u32,
    out_file: &Path,
) -> Vec<String> {
    let mut args = vec![
        "-seed".to_string(),
        seedmask.to_string_lossy().to_string(),
        "-include".to_string(),
        targetmask.to_string_lossy().to_string(),
        "-mask".to_string(),
        wm_mask.to_string_lossy().to_string(),
        "-number".to_string(),
        seed_count.to_string(),
        "-minlength".to_string(),
        settings.min_tract_length_mm.to_string(),
    ];

    if settings.stop {
        args.push("-stop".to_string());
    }
    if settings.no_mask_interpolation {
        args.push("-nomaskinterp".to_string());
    }
    if settings.unidirectional {
        args.push("-unidirectional".to_string());
    }

    args.extend([
        settings.input_model.clone(),
        sh_image.to_string_lossy().to_string(),
        out_file.to_string_lossy().to_string(),
    ]);

    args
}

/// Run the tracker for one seed, producing a `.tck` file at `out_file`.
#[allow(clippy::too_many_arguments)]
pub fn run_streamtrack(
    tool: &Path,
    settings: &TrackingSettings,
    sh_image: &Path,
    seedmask: &Path,
    targetmask: &Path,
    wm_mask: &Path,
    seed_count: u32,
    out_file: &Path,
) -> Result<()> {
    let args = streamtrack_args(
        settings, sh_image, seedmask, targetmask, wm_mask, seed_count, out_file,
    );

    info!(
        "Tracking {} streamlines from seed {:?}",
        seed_count, seedmask
    );
    debug!("streamtrack args: {:?}", args);

    let output = Command::new(tool).args(&args).output()?;

    if !output.status.success() {
        return Err(Error::ToolFailed {
            tool: "streamtrack".to_string(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    if !out_file.exists() {
        return Err(Error::MissingOutput {
            tool: "streamtrack".to_string(),
            path: out_file.to_path_buf(),
        });
    }

    Ok(())
}
