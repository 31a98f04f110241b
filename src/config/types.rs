use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub inputs: InputsConfig,

    #[serde(default)]
    pub tracking: TrackingConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub tools: ToolsConfig,
}

/// Inputs fixed for the whole pipeline run, shared by every seed.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InputsConfig {
    /// White-matter mask (1mm), used as the tracking mask.
    #[serde(default)]
    pub wm_mask: Option<PathBuf>,

    /// Spherical-harmonics diffusion image the tracker consumes.
    #[serde(default)]
    pub sh_image: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackingConfig {
    /// Desired number of tracks per seed, unless overridden on the command line.
    #[serde(default = "default_seed_count")]
    pub seed_count: u32,

    /// Minimum tract length in millimetres.
    #[serde(default = "default_min_tract_length")]
    pub min_tract_length_mm: u32,
}

fn default_seed_count() -> u32 {
    5000
}

fn default_min_tract_length() -> u32 {
    30
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            seed_count: default_seed_count(),
            min_tract_length_mm: default_min_tract_length(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory where per-seed track files are written.
    #[serde(default)]
    pub tracks_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ToolsConfig {
    #[serde(default)]
    pub streamtrack_path: Option<PathBuf>,

    #[serde(default)]
    pub tck2trk_path: Option<PathBuf>,
}
