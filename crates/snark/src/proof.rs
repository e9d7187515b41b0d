//! Proof structure and digests

use crate::{Result, SnarkError};
use ark_ff::PrimeField;
use ark_serialize::CanonicalSerialize;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use zkp_field::convert::{serde_field, serde_field_vec};

/// A challenge-evaluation proof, optionally chained to a previous proof
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Proof<F: PrimeField> {
    /// Constraint polynomial evaluations at the challenge, in constraint order
    #[serde(with = "serde_field_vec")]
    pub results: Vec<F>,
    /// SHA-256 of the canonical encoding of `results`
    #[serde(with = "hex")]
    pub binding_hash: [u8; 32],
    /// The proof this one re-affirms
    pub previous_proof: Option<Box<Proof<F>>>,
    /// Hash of the witness
    #[serde(with = "serde_field")]
    pub challenge: F,
}

impl<F: PrimeField> Proof<F> {
    /// Iterate over this proof and every proof it carries, outermost first
    pub fn chain(&self) -> impl Iterator<Item = &Proof<F>> {
        std::iter::successors(Some(self), |proof| proof.previous_proof.as_deref())
    }

    /// Number of proofs in the chain, including this one
    pub fn depth(&self) -> usize {
        self.chain().count()
    }

    pub fn binding_hash_hex(&self) -> String {
        hex::encode(self.binding_hash)
    }

    /// Whether `binding_hash` matches the stored results
    pub fn binding_is_consistent(&self) -> bool {
        binding_digest(&self.results)
            .map(|digest| digest == self.binding_hash)
            .unwrap_or(false)
    }
}

/// SHA-256 over the compressed canonical encoding of a result vector
pub fn binding_digest<F: PrimeField>(results: &[F]) -> Result<[u8; 32]> {
    let mut bytes = Vec::new();
    results
        .serialize_compressed(&mut bytes)
        .map_err(|e| SnarkError::Serialization(e.to_string()))?;
    Ok(Sha256::digest(&bytes).into())
}

/// SHA-256 of a single element's canonical encoding
pub(crate) fn value_digest<F: PrimeField>(value: &F) -> Result<[u8; 32]> {
    let mut bytes = Vec::new();
    value
        .serialize_compressed(&mut bytes)
        .map_err(|e| SnarkError::Serialization(e.to_string()))?;
    Ok(Sha256::digest(&bytes).into())
}
