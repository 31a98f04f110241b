mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./fibertrack.toml",
        "~/.config/fibertrack/config.toml",
        "/etc/fibertrack/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    // Return default config if no file found
    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.tracking.seed_count == 0 {
        anyhow::bail!("Seed count cannot be 0");
    }

    if config.tracking.min_tract_length_mm == 0 {
        anyhow::bail!("Minimum tract length cannot be 0");
    }

    // Fixed per-run inputs are optional in the file (the CLI may supply them),
    // but when present they should exist.
    for (name, path) in [
        ("wm_mask", &config.inputs.wm_mask),
        ("sh_image", &config.inputs.sh_image),
    ] {
        if let Some(p) = path {
            if !p.exists() {
                tracing::warn!("Configured {} does not exist: {:?}", name, p);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tracking.seed_count, 5000);
        assert_eq!(config.tracking.min_tract_length_mm, 30);
        assert!(config.inputs.wm_mask.is_none());
        assert!(config.output.tracks_dir.is_none());
        assert!(config.tools.streamtrack_path.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [inputs]
            wm_mask = "/data/wmmask_1mm.nii"
            sh_image = "/data/csd8.nii"

            [tracking]
            seed_count = 10000
            min_tract_length_mm = 30

            [output]
            tracks_dir = "/data/tracks"

            [tools]
            streamtrack_path = "/opt/mrtrix/bin/streamtrack"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.tracking.seed_count, 10000);
        assert_eq!(
            config.inputs.sh_image.as_deref(),
            Some(Path::new("/data/csd8.nii"))
        );
        assert_eq!(
            config.output.tracks_dir.as_deref(),
            Some(Path::new("/data/tracks"))
        );
        assert_eq!(
            config.tools.streamtrack_path.as_deref(),
            Some(Path::new("/opt/mrtrix/bin/streamtrack"))
        );
        assert!(config.tools.tck2trk_path.is_none());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[output]\ntracks_dir = \"/out\"\n").unwrap();
        assert_eq!(config.tracking.seed_count, 5000);
        assert_eq!(config.tracking.min_tract_length_mm, 30);
    }

    #[test]
    fn test_zero_seed_count_rejected() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[tracking]\nseed_count = 0\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("Seed count"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = load_config(Path::new("/nonexistent/fibertrack.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
