//! `zkp setup`: write the trusted setup of the fixed-constant variant

use crate::{common::CliConfig, CliError, Result};
use clap::Args;
use groth_backend::TrustedSetup;
use std::path::PathBuf;
use tracing::info;

/// Setup command configuration
#[derive(Debug, Args)]
pub struct SetupArgs {
    /// Path to save the setup (defaults to the configured setup path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Force overwrite existing files
    #[arg(short, long)]
    pub force: bool,
}

pub fn handle_setup_command(args: SetupArgs, config: &CliConfig) -> Result<PathBuf> {
    let output = args.output.unwrap_or_else(|| config.setup_path.clone());
    if output.exists() && !args.force {
        return Err(CliError::InvalidArguments(format!(
            "{} already exists, use --force to overwrite",
            output.display()
        )));
    }

    TrustedSetup::standard().save(&output)?;
    info!(path = %output.display(), "trusted setup generated");
    println!("Trusted setup saved to {}", output.display());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_setup_respects_force() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trusted_setup.json");
        let config = CliConfig::default();

        let args = |force| SetupArgs {
            output: Some(path.clone()),
            force,
        };
        assert_eq!(handle_setup_command(args(false), &config).unwrap(), path);
        assert!(handle_setup_command(args(false), &config).is_err());
        assert!(handle_setup_command(args(true), &config).is_ok());
        assert_eq!(TrustedSetup::load(&path).unwrap(), TrustedSetup::standard());
    }
}
