//! Peripheral proof backends
//!
//! - [`FixedConstantProver`]: the legacy "groth16" variant that scales three
//!   trusted-setup constants by the product of the witnesses
//! - [`CurveEqualityCheck`]: compares two scalar multiples of a curve base
//!   point in place of a pairing
//! - [`artifact`]: JSON persistence of setups, proofs and bundles
//!
//! Neither backend is a real Groth16 implementation. Both are kept for
//! compatibility with existing artifacts.

#![forbid(unsafe_code)]

pub mod artifact;
pub mod curve_check;
pub mod prover;
pub mod setup;

pub use artifact::*;
pub use curve_check::*;
pub use prover::*;
pub use setup::*;

use std::path::PathBuf;
use thiserror::Error;

/// Errors reading or writing persisted artifacts
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Artifact not found: {}", .0.display())]
    Missing(PathBuf),
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed artifact {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

pub type Result<T> = std::result::Result<T, BackendError>;
