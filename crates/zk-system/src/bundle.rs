//! Proof bundles

use ark_ff::PrimeField;
use serde::{Deserialize, Serialize};
use snark::Proof;
use zkp_field::convert::{serde_field, serde_field_opt};

/// What [`crate::ZkProofSystem::generate_proof`] hands back to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ProofBundle<F: PrimeField> {
    pub proof: Proof<F>,
    /// Hash of the witness
    #[serde(with = "serde_field")]
    pub output: F,
    /// Hash of the witness followed by the secret, when one was supplied
    #[serde(with = "serde_field_opt", default, skip_serializing_if = "Option::is_none")]
    pub commitment: Option<F>,
}

impl<F: PrimeField> ProofBundle<F> {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
