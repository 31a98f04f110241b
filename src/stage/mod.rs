//! The single-seed fiber-tracking stage.
//!
//! One invocation handles one seed mask: derive the per-seed output paths,
//! run the external tracker, convert the result to TrackVis format, clean up.
//! Parallelism across seeds belongs to the surrounding orchestrator.

pub mod convert;
pub mod tracking;

pub use convert::{convert_to_trk, Cleanup};
pub use tracking::{run_streamtrack, streamtrack_args, TrackingSettings};

use crate::config::ToolsConfig;
use crate::error::Result;
use crate::naming;
use crate::tools::{get_tool_path, STREAMTRACK, TCK2TRK};
use std::path::{Path, PathBuf};
use tracing::info;

/// Resolved paths of the external binaries the stage drives.
#[derive(Debug, Clone)]
pub struct StageTools {
    pub streamtrack: PathBuf,
    pub tck2trk: PathBuf,
}

impl StageTools {
    /// Resolve both tools, preferring configured paths over PATH lookup.
    pub fn resolve(config: &ToolsConfig) -> Result<Self> {
        Ok(Self {
            streamtrack: get_tool_path(STREAMTRACK, config.streamtrack_path.as_deref())?,
            tck2trk: get_tool_path(TCK2TRK, config.tck2trk_path.as_deref())?,
        })
    }
}

/// Inputs for one seed of the pipeline run.
///
/// The white-matter mask and the spherical-harmonics image are fixed for the
/// whole run; seed mask, target mask and seed count vary per invocation.
#[derive(Debug, Clone)]
pub struct SeedInputs {
    pub wm_mask: PathBuf,
    pub sh_image: PathBuf,
    pub seedmask: PathBuf,
    pub targetmask: PathBuf,
    pub seed_count: u32,
    pub tracks_dir: PathBuf,
}

/// Run the full stage for one seed and return the final `.trk` path.
///
/// Sequencing is a single synchronous pass: path derivation, blocking
/// tracking call, blocking conversion call, cleanup. The first failure
/// aborts the invocation and propagates to the caller.
pub fn run_stage(
    tools: &StageTools,
    inputs: &SeedInputs,
    settings: &TrackingSettings,
    cleanup: Cleanup,
) -> Result<PathBuf> {
    let index = naming::seed_index(&inputs.seedmask)?;
    let tck_file = naming::tck_path(&inputs.tracks_dir, &inputs.seedmask)?;
    let trk_file = naming::trk_path(&inputs.tracks_dir, &inputs.seedmask)?;

    std::fs::create_dir_all(&inputs.tracks_dir)?;

    info!("Starting fiber tracking for seed {}", index);

    run_streamtrack(
        &tools.streamtrack,
        settings,
        &inputs.sh_image,
        &inputs.seedmask,
        &inputs.targetmask,
        &inputs.wm_mask,
        inputs.seed_count,
        &tck_file,
    )?;

    // The seed mask doubles as the spatial reference for the conversion.
    let trk_file = convert_to_trk(
        &tools.tck2trk,
        &tck_file,
        &inputs.seedmask,
        &trk_file,
        cleanup,
    )?;

    info!("Seed {} complete: {:?}", index, trk_file);

    Ok(trk_file)
}

/// Derived per-seed paths, useful for dry-run style inspection.
pub fn stage_paths(tracks_dir: &Path, seedmask: &Path) -> Result<(PathBuf, PathBuf)> {
    Ok((
        naming::tck_path(tracks_dir, seedmask)?,
        naming::trk_path(tracks_dir, seedmask)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_paths() {
        let (tck, trk) = stage_paths(
            Path::new("/out"),
            Path::new("/data/seeds/seedmask_00123.nii"),
        )
        .unwrap();
        assert_eq!(tck, PathBuf::from("/out/00123_tracks.tck"));
        assert_eq!(trk, PathBuf::from("/out/00123_tracks.trk"));
    }

    #[test]
    fn test_stage_fails_fast_on_bad_seedmask() {
        let tools = StageTools {
            streamtrack: PathBuf::from("/nonexistent/streamtrack"),
            tck2trk: PathBuf::from("/nonexistent/tck2trk"),
        };
        let inputs = SeedInputs {
            wm_mask: PathBuf::from("wm.nii"),
            sh_image: PathBuf::from("sh.nii"),
            seedmask: PathBuf::from("seedmask.nii"),
            targetmask: PathBuf::from("target.nii"),
            seed_count: 10,
            tracks_dir: PathBuf::from("/tmp"),
        };

        // Path derivation fails before any external call is attempted.
        let err = run_stage(&tools, &inputs, &TrackingSettings::default(), Cleanup::Delete)
            .unwrap_err();
        assert!(matches!(err, crate::error::Error::SeedIndexNotFound(_)));
    }
}
