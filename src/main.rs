mod cli;

use fibertrack::{
    config,
    stage::{self, Cleanup, SeedInputs, StageTools, TrackingSettings},
    tools,
};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "fibertrack=trace".to_string()
        } else {
            "fibertrack=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Run {
            seed_mask,
            target_mask,
            wm_mask,
            sh_image,
            tracks_dir,
            seed_count,
            keep_tck,
        } => run_seed(
            cli.config.as_deref(),
            seed_mask,
            target_mask,
            wm_mask,
            sh_image,
            tracks_dir,
            seed_count,
            keep_tck,
        ),
        Commands::CheckTools => check_tools(),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("fibertrack {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn run_seed(
    config_path: Option<&Path>,
    seed_mask: PathBuf,
    target_mask: PathBuf,
    wm_mask: Option<PathBuf>,
    sh_image: Option<PathBuf>,
    tracks_dir: Option<PathBuf>,
    seed_count: Option<u32>,
    keep_tck: bool,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    // CLI flags override config; either source must supply the fixed inputs.
    let wm_mask = wm_mask
        .or(config.inputs.wm_mask)
        .ok_or_else(|| anyhow::anyhow!("No white-matter mask given (--wm-mask or [inputs] wm_mask)"))?;
    let sh_image = sh_image
        .or(config.inputs.sh_image)
        .ok_or_else(|| anyhow::anyhow!("No SH image given (--sh-image or [inputs] sh_image)"))?;
    let tracks_dir = tracks_dir
        .or(config.output.tracks_dir)
        .ok_or_else(|| anyhow::anyhow!("No tracks dir given (--tracks-dir or [output] tracks_dir)"))?;
    let seed_count = seed_count.unwrap_or(config.tracking.seed_count);

    for (name, path) in [
        ("Seed mask", &seed_mask),
        ("Target mask", &target_mask),
        ("White-matter mask", &wm_mask),
        ("SH image", &sh_image),
    ] {
        if !path.exists() {
            anyhow::bail!("{} does not exist: {:?}", name, path);
        }
    }

    let tools = StageTools::resolve(&config.tools)?;

    let settings = TrackingSettings {
        min_tract_length_mm: config.tracking.min_tract_length_mm,
        ..TrackingSettings::default()
    };

    let inputs = SeedInputs {
        wm_mask,
        sh_image,
        seedmask: seed_mask,
        targetmask: target_mask,
        seed_count,
        tracks_dir,
    };

    let cleanup = if keep_tck {
        Cleanup::Keep
    } else {
        Cleanup::Delete
    };

    let trk_file = stage::run_stage(&tools, &inputs, &settings, cleanup)?;

    // The orchestrator captures this as the stage's single output.
    println!("{}", trk_file.display());

    Ok(())
}

fn check_tools() -> Result<()> {
    println!("Checking external tools...\n");

    let tools = tools::check_tools();
    let mut all_ok = true;

    for tool in &tools {
        let status = if tool.available {
            "✓"
        } else {
            all_ok = false;
            "✗"
        };

        print!("{} {}", status, tool.name);

        if let Some(ref version) = tool.version {
            print!(" ({})", version);
        }

        if let Some(ref path) = tool.path {
            print!(" - {}", path.display());
        }

        println!();
    }

    println!();
    if all_ok {
        println!("All required tools are available!");
    } else {
        println!("Some tools are missing. Install MRtrix to enable tracking.");
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Seed count: {}", config.tracking.seed_count);
            println!(
                "  Min tract length: {} mm",
                config.tracking.min_tract_length_mm
            );
            if let Some(ref dir) = config.output.tracks_dir {
                println!("  Tracks dir: {:?}", dir);
            }
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Seed count: {}", config.tracking.seed_count);
            println!(
                "  Min tract length: {} mm",
                config.tracking.min_tract_length_mm
            );
        }
    }

    Ok(())
}
