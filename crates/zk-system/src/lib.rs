//! # Witness-hash proof system
//!
//! [`ZkProofSystem`] wires the pipeline together: it owns a
//! [`r1cs::ConstraintSystem`] holding the hash constraint `H(x1..xn) = y`,
//! derives a fresh [`qap::QAP`] for every call and delegates to a
//! [`snark::ProofEngine`]. Bundles carry the witness hash and an optional
//! commitment binding the witness to a secret.
//!
//! ```rust,ignore
//! use zk_system::ZkProofSystem;
//! use zkp_field::{Fr, PoseidonHasher, PoseidonParams};
//!
//! let hasher = PoseidonHasher::<Fr>::new(PoseidonParams::default())?;
//! let mut system = ZkProofSystem::new(hasher);
//! let inputs = [Fr::from(1u64), Fr::from(2u64), Fr::from(3u64)];
//! let bundle = system.generate_proof(&inputs, None, None)?;
//! assert!(system.verify_proof(&bundle, &inputs, None));
//! ```

#![forbid(unsafe_code)]

pub mod bundle;
pub mod config;
pub mod system;

pub use bundle::*;
pub use config::*;
pub use system::*;

use qap::QAPError;
use r1cs::R1CSError;
use snark::SnarkError;
use thiserror::Error;
use zkp_field::ProviderError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SystemError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Witness count must be a positive integer, got {0}")]
    InvalidWitnessCount(usize),
    #[error("Constraint system error: {0}")]
    R1CS(#[from] R1CSError),
    #[error("Polynomial form error: {0}")]
    QAP(#[from] QAPError),
    #[error("Proof engine error: {0}")]
    Snark(#[from] SnarkError),
    #[error("Proof unavailable: {0}")]
    ProofUnavailable(ProviderError),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SystemError {
    /// Lift hash provider failures out of the wrapped errors
    pub(crate) fn surface_provider(self) -> Self {
        match self {
            SystemError::R1CS(R1CSError::Provider(e)) | SystemError::Snark(SnarkError::ProofUnavailable(e)) => {
                SystemError::ProofUnavailable(e)
            }
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, SystemError>;
