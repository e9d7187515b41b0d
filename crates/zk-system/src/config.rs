//! Proof system configuration

use crate::{Result, SystemError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;
use zkp_field::{Absorb, Blake2sHasher, PoseidonHasher, PoseidonParams, PrimeField};

/// Which field hasher backs constraints, challenges and commitments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HasherKind {
    #[default]
    Poseidon,
    Blake2s,
}

/// Configuration for the proof system
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default)]
    pub hasher: HasherKind,
    #[serde(default)]
    pub poseidon: PoseidonParams,
}

impl SystemConfig {
    /// Loads configuration from file or returns default
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if path.is_file() {
                info!(path = %path.display(), "loading configuration");
                let contents = std::fs::read_to_string(path)
                    .map_err(|e| SystemError::Config(format!("{}: {}", path.display(), e)))?;
                let config: Self = serde_json::from_str(&contents)
                    .map_err(|e| SystemError::Config(format!("{}: {}", path.display(), e)))?;
                config.validate()?;
                return Ok(config);
            }
        }

        info!("using default configuration");
        Ok(Self::default())
    }

    /// Saves configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| SystemError::Config(e.to_string()))?;
        std::fs::write(path, json).map_err(|e| SystemError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Validates configuration parameters
    pub fn validate(&self) -> Result<()> {
        self.poseidon
            .validate()
            .map_err(|e| SystemError::Config(e.to_string()))
    }

    /// Poseidon hasher built from the configured parameters
    pub fn poseidon_hasher<F: PrimeField + Absorb>(&self) -> Result<PoseidonHasher<F>> {
        PoseidonHasher::new(self.poseidon).map_err(|e| SystemError::Config(e.to_string()))
    }

    pub fn blake2s_hasher<F: PrimeField>(&self) -> Blake2sHasher<F> {
        Blake2sHasher::new()
    }
}
