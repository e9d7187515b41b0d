//! # Field, Curve and Hash Providers
//!
//! This crate provides the arithmetic capabilities consumed by the proof
//! pipeline, kept behind small traits so that every component receives its
//! provider explicitly instead of reaching for a process-wide modulus.
//!
//! ## Features
//!
//! - [`FieldHasher`]: maps an ordered sequence of field elements to one field
//!   element ([`PoseidonHasher`], [`Blake2sHasher`])
//! - [`CurveProvider`]: modular reduction and scalar multiplication of a curve
//!   base point ([`BabyJubjub`])
//! - Decimal and hex conversions between big integers and field elements, plus
//!   serde adapters that encode field elements as base-10 strings

#![forbid(unsafe_code)]

pub mod convert;
pub mod curve;
pub mod hash;

pub use convert::*;
pub use curve::*;
pub use hash::*;

pub use ark_crypto_primitives::sponge::Absorb;
pub use ark_ff::PrimeField;

/// The default field of the pipeline: the BN254 scalar field, which is also
/// the base field of the BabyJubjub curve.
pub type Fr = ark_bn254::Fr;

/// Errors reported by the field, curve and hash providers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("{hasher} hash called with no inputs")]
    EmptyInput { hasher: &'static str },
    #[error("{hasher} hash supports at most {max} inputs, got {got}")]
    ArityExceeded {
        hasher: &'static str,
        max: usize,
        got: usize,
    },
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),
    #[error("Value {value} is not a canonical element of a field with modulus {modulus}")]
    NonCanonical { value: String, modulus: String },
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<ark_serialize::SerializationError> for ProviderError {
    fn from(err: ark_serialize::SerializationError) -> Self {
        ProviderError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;
