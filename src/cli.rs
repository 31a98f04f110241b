use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fibertrack")]
#[command(author, version, about = "Single-seed fiber-tracking stage runner")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the tracking stage for a single seed mask
    Run {
        /// Seed mask to track from (filename must carry a 4+ digit index)
        #[arg(long, required = true)]
        seed_mask: PathBuf,

        /// Target/inclusion mask for this seed
        #[arg(long, required = true)]
        target_mask: PathBuf,

        /// White-matter tracking mask (falls back to config)
        #[arg(long)]
        wm_mask: Option<PathBuf>,

        /// Spherical-harmonics diffusion image (falls back to config)
        #[arg(long)]
        sh_image: Option<PathBuf>,

        /// Directory for per-seed track files (falls back to config)
        #[arg(long)]
        tracks_dir: Option<PathBuf>,

        /// Number of tracks to generate (falls back to config)
        #[arg(long)]
        seed_count: Option<u32>,

        /// Keep the intermediate .tck file instead of deleting it
        #[arg(long)]
        keep_tck: bool,
    },

    /// Check that required external tools are available
    CheckTools,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
