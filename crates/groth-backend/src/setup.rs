//! Trusted setup constants of the fixed-constant variant

use crate::{read_json, write_json, ArtifactError};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;
use zkp_field::convert::serde_biguint;

/// Three public constants; serialized as `{"A", "B", "C"}` decimal strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustedSetup {
    #[serde(rename = "A", with = "serde_biguint")]
    pub a: BigUint,
    #[serde(rename = "B", with = "serde_biguint")]
    pub b: BigUint,
    #[serde(rename = "C", with = "serde_biguint")]
    pub c: BigUint,
}

impl TrustedSetup {
    /// The constants every existing setup file was generated with
    pub fn standard() -> Self {
        Self {
            a: BigUint::from(3_537_367_669_091_841_920u64),
            b: BigUint::from(6_350_629_685_160_213_760u64),
            c: BigUint::from(5_922_825_855_717_111_040u64),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let setup = read_json(path)?;
        info!(path = %path.display(), "trusted setup loaded");
        Ok(setup)
    }

    pub fn save(&self, path: &Path) -> Result<(), ArtifactError> {
        write_json(self, path)?;
        info!(path = %path.display(), "trusted setup written");
        Ok(())
    }
}

impl Default for TrustedSetup {
    fn default() -> Self {
        Self::standard()
    }
}
