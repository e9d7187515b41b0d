//! Succinct challenge-evaluation proofs over a [`qap::QAP`]
//!
//! The prover derives a challenge by hashing the witness, evaluates every
//! constraint polynomial at that challenge and binds the results with a
//! SHA-256 digest. A proof may carry a previous proof, which is re-verified
//! against the same witness.

#![forbid(unsafe_code)]

pub mod engine;
pub mod proof;

pub use engine::*;
pub use proof::*;

use qap::QAPError;
use thiserror::Error;
use zkp_field::ProviderError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnarkError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Polynomial form has no constraint polynomials")]
    EmptyPolynomialForm,
    #[error("Evaluation of constraint polynomial {index} failed: {source}")]
    InvalidEvaluationResult { index: usize, source: QAPError },
    #[error("Proof unavailable: {0}")]
    ProofUnavailable(ProviderError),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, SnarkError>;
