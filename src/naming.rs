//! Output filename derivation.
//!
//! Every seed mask carries a numeric index (a run of four or more digits) in
//! its filename. Per-seed output files are named after that index so the
//! results of parallel per-seed invocations land side by side in one
//! directory without colliding.

use crate::error::{Error, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static SEED_INDEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{4,}").expect("valid seed index pattern")
});

/// Extract the seed-mask index from a path.
///
/// Returns the first run of four or more consecutive ASCII digits in the
/// path string. Fails if the path contains no such run.
pub fn seed_index(seedmask: &Path) -> Result<String> {
    let text = seedmask.to_string_lossy();
    SEED_INDEX
        .find(&text)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| Error::seed_index_not_found(seedmask))
}

/// Build the intermediate track file path: `{dir}/{index}_tracks.tck`.
pub fn tck_path(tracks_dir: &Path, seedmask: &Path) -> Result<PathBuf> {
    let index = seed_index(seedmask)?;
    Ok(tracks_dir.join(format!("{}_tracks.tck", index)))
}

/// Build the final track file path: `{dir}/{index}_tracks.trk`.
pub fn trk_path(tracks_dir: &Path, seedmask: &Path) -> Result<PathBuf> {
    let index = seed_index(seedmask)?;
    Ok(tracks_dir.join(format!("{}_tracks.trk", index)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_index_extracts_digit_run() {
        let index = seed_index(Path::new("/data/seeds/seedmask_00123.nii")).unwrap();
        assert_eq!(index, "00123");
    }

    #[test]
    fn test_seed_index_exactly_four_digits() {
        let index = seed_index(Path::new("/data/seeds/seedmask_0042.nii")).unwrap();
        assert_eq!(index, "0042");
    }

    #[test]
    fn test_seed_index_long_run_kept_whole() {
        let index = seed_index(Path::new("/seeds/mask_000123456.nii.gz")).unwrap();
        assert_eq!(index, "000123456");
    }

    #[test]
    fn test_seed_index_first_run_wins() {
        // Directory components are part of the searched string, matching the
        // original behavior of searching the whole path.
        let index = seed_index(Path::new("/run_2024/seedmask_0007.nii")).unwrap();
        assert_eq!(index, "2024");
    }

    #[test]
    fn test_seed_index_short_runs_rejected() {
        let err = seed_index(Path::new("/data/seeds/seedmask_123.nii")).unwrap_err();
        assert!(matches!(err, Error::SeedIndexNotFound(_)));
    }

    #[test]
    fn test_seed_index_no_digits_rejected() {
        let err = seed_index(Path::new("/data/seeds/seedmask.nii")).unwrap_err();
        assert!(matches!(err, Error::SeedIndexNotFound(_)));
    }

    #[test]
    fn test_tck_path() {
        let path = tck_path(Path::new("/out"), Path::new("/data/seeds/seedmask_00123.nii"));
        assert_eq!(path.unwrap(), PathBuf::from("/out/00123_tracks.tck"));
    }

    #[test]
    fn test_trk_path() {
        let path = trk_path(Path::new("/out"), Path::new("/data/seeds/seedmask_00123.nii"));
        assert_eq!(path.unwrap(), PathBuf::from("/out/00123_tracks.trk"));
    }

    #[test]
    fn test_paths_injective_per_index() {
        let dir = Path::new("/out");
        let a = tck_path(dir, Path::new("seedmask_0001.nii")).unwrap();
        let b = tck_path(dir, Path::new("seedmask_0002.nii")).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_paths_deterministic() {
        let dir = Path::new("/out");
        let seed = Path::new("seedmask_0099.nii");
        assert_eq!(tck_path(dir, seed).unwrap(), tck_path(dir, seed).unwrap());
    }

    #[test]
    fn test_path_without_index_fails_for_both_extensions() {
        assert!(tck_path(Path::new("/out"), Path::new("seedmask.nii")).is_err());
        assert!(trk_path(Path::new("/out"), Path::new("seedmask.nii")).is_err());
    }
}
