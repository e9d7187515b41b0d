//! Common utilities for CLI tools
//!
//! Configuration loading and argument parsing shared by all subcommands.

use crate::{CliError, Result};
use groth_backend::{read_json, write_json, BUNDLE_FILE, PROOF_FILE, TRUSTED_SETUP_FILE};
use num_bigint::BigUint;
use r1cs::ConstraintSystem;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;
use zk_system::SystemConfig;
use zkp_field::{parse_biguint, parse_decimal_canonical, PrimeField};

/// Configuration of the `zkp` binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Hasher selection and parameters of the proof pipeline
    #[serde(default)]
    pub system: SystemConfig,
    /// Where `setup` writes and `generate`/`verify` read the trusted setup
    #[serde(default = "default_setup_path")]
    pub setup_path: PathBuf,
    /// Where `generate` writes and `verify` reads the legacy proof
    #[serde(default = "default_proof_path")]
    pub proof_path: PathBuf,
    /// Default bundle location for `prove` and `check`
    #[serde(default = "default_bundle_path")]
    pub bundle_path: PathBuf,
}

fn default_setup_path() -> PathBuf {
    PathBuf::from(TRUSTED_SETUP_FILE)
}

fn default_proof_path() -> PathBuf {
    PathBuf::from(PROOF_FILE)
}

fn default_bundle_path() -> PathBuf {
    PathBuf::from(BUNDLE_FILE)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            system: SystemConfig::default(),
            setup_path: default_setup_path(),
            proof_path: default_proof_path(),
            bundle_path: default_bundle_path(),
        }
    }
}

/// Configuration management utilities
pub struct ConfigUtils;

impl ConfigUtils {
    /// Loads configuration from file or returns default
    pub fn load_or_default(config_path: Option<&Path>) -> Result<CliConfig> {
        if let Some(path) = config_path {
            if path.is_file() {
                info!(path = %path.display(), "loading configuration");
                let config: CliConfig = read_json(path)?;
                Self::validate_config(&config)?;
                return Ok(config);
            }
            return Err(CliError::InvalidArguments(format!(
                "configuration file {} not found",
                path.display()
            )));
        }

        info!("using default configuration");
        Ok(CliConfig::default())
    }

    /// Saves configuration to file
    pub fn save_config(config: &CliConfig, path: &Path) -> Result<()> {
        info!(path = %path.display(), "saving configuration");
        Ok(write_json(config, path)?)
    }

    /// Validates configuration parameters
    pub fn validate_config(config: &CliConfig) -> Result<()> {
        config.system.validate()?;

        for path in [&config.setup_path, &config.proof_path, &config.bundle_path] {
            if path.as_os_str().is_empty() {
                return Err(CliError::InvalidArguments("artifact paths must not be empty".to_string()));
            }
        }
        Ok(())
    }
}

/// Common command-line argument parsing utilities
pub struct ArgUtils;

impl ArgUtils {
    /// Parses base-10 witnesses of the fixed-constant variant
    pub fn parse_witnesses(values: &[String]) -> Result<Vec<BigUint>> {
        if values.is_empty() {
            return Err(CliError::InvalidArguments("missing witness values".to_string()));
        }
        values
            .iter()
            .map(|v| parse_biguint(v).map_err(CliError::from))
            .collect()
    }

    /// Parses base-10 field elements; values outside the field are rejected
    pub fn parse_field_inputs<F: PrimeField>(values: &[String]) -> Result<Vec<F>> {
        if values.is_empty() {
            return Err(CliError::InvalidArguments("missing witness values".to_string()));
        }
        values
            .iter()
            .map(|v| parse_decimal_canonical::<F>(v).map_err(CliError::from))
            .collect()
    }

    pub fn parse_field_input<F: PrimeField>(value: &str) -> Result<F> {
        Ok(parse_decimal_canonical::<F>(value)?)
    }

    /// Appends the constraints of a JSON circuit file
    pub fn load_circuit<F: PrimeField>(cs: &mut ConstraintSystem<F>, path: &Path) -> Result<usize> {
        let circuit: Value = read_json(path)?;
        let count = cs.load_constraints_json(&circuit)?;
        info!(path = %path.display(), constraints = count, "circuit loaded");
        Ok(count)
    }
}
