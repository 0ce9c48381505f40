//! # Validate — check an artifact directory
//!
//! Provides the `spincorr validate` subcommand: reads every expected
//! artifact under a directory, runs the shape validation, and reports
//! per-key results. A missing or invalid artifact fails the run.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use spincorr_core::GridKey;
use spincorr_grid::{read_artifact, GridError};

/// Validate subcommand arguments.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Artifact directory to check.
    #[arg(long)]
    pub dir: PathBuf,
}

/// Per-key validation status.
enum KeyStatus {
    Ok,
    Missing,
    Invalid(GridError),
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let mut ok = 0usize;
    let mut bad = 0usize;

    for key in GridKey::all() {
        let status = match read_artifact(&args.dir, &key) {
            Ok(grid) => {
                // The artifact must also describe the key it is filed
                // under.
                if grid.key() != key {
                    KeyStatus::Invalid(GridError::Io(std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        format!("artifact describes key {}", grid.key()),
                    )))
                } else {
                    match grid.validate() {
                        Ok(()) => KeyStatus::Ok,
                        Err(e) => KeyStatus::Invalid(e),
                    }
                }
            }
            Err(GridError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                KeyStatus::Missing
            }
            Err(e) => KeyStatus::Invalid(e),
        };

        match status {
            KeyStatus::Ok => {
                ok += 1;
                println!("  {:<28} ok", key.to_string());
            }
            KeyStatus::Missing => {
                bad += 1;
                println!("  {:<28} MISSING", key.to_string());
            }
            KeyStatus::Invalid(e) => {
                bad += 1;
                println!("  {:<28} INVALID: {e}", key.to_string());
            }
        }
    }

    println!();
    println!("{} ok, {} failing, {} expected", ok, bad, GridKey::COUNT);

    Ok(if bad > 0 { 1 } else { 0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use spincorr_grid::{generate_into, write_artifact};

    #[test]
    fn complete_valid_directory_passes() {
        let dir = tempfile::tempdir().unwrap();
        generate_into(dir.path(), 3, 3, GridKey::all());
        let code = run_validate(&ValidateArgs {
            dir: dir.path().to_path_buf(),
        })
        .unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn missing_artifact_fails() {
        let dir = tempfile::tempdir().unwrap();
        let keys: Vec<GridKey> = GridKey::all().skip(1).collect();
        generate_into(dir.path(), 3, 3, keys);
        let code = run_validate(&ValidateArgs {
            dir: dir.path().to_path_buf(),
        })
        .unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn misfiled_artifact_fails() {
        let dir = tempfile::tempdir().unwrap();
        generate_into(dir.path(), 3, 3, GridKey::all());
        // Overwrite one artifact with a grid describing a different key.
        let keys: Vec<GridKey> = GridKey::all().collect();
        let other = spincorr_grid::generate_grid(keys[1], 3, 3).unwrap();
        let misfiled = dir.path().join(keys[0].artifact_filename());
        std::fs::write(&misfiled, serde_json::to_vec_pretty(&other).unwrap()).unwrap();
        // Keep the right artifact for keys[1] so only one key fails.
        write_artifact(dir.path(), &other).unwrap();

        let code = run_validate(&ValidateArgs {
            dir: dir.path().to_path_buf(),
        })
        .unwrap();
        assert_eq!(code, 1);
    }
}
