//! # CLI Tools for the Proof Pipeline
//!
//! This crate provides the subcommands of the `zkp` binary: the witness-hash
//! pipeline (`prove`, `check`), the fixed-constant legacy variant (`setup`,
//! `generate`, `verify`) and the curve-equality check (`pairing-check`).

#![forbid(unsafe_code)]

pub mod common;
pub mod prove;
pub mod setup;
pub mod verify;

use groth_backend::{ArtifactError, BackendError};
use r1cs::R1CSError;
use thiserror::Error;
use zk_system::SystemError;
use zkp_field::ProviderError;

/// Error types for CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error(transparent)]
    System(#[from] SystemError),
    #[error("Invalid circuit: {0}")]
    Circuit(#[from] R1CSError),
    #[error("Invalid value: {0}")]
    Value(#[from] ProviderError),
    #[error("Invalid command arguments: {0}")]
    InvalidArguments(String),
    #[error("Verification failed: {0}")]
    VerificationFailed(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
