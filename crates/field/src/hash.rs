//! Field hash providers
//!
//! A [`FieldHasher`] maps an ordered sequence of field elements to a single
//! field element. It is deterministic and sensitive to both order and length.

use crate::{ProviderError, Result};
use ark_crypto_primitives::sponge::{
    poseidon::{find_poseidon_ark_and_mds, PoseidonConfig, PoseidonSponge},
    Absorb, CryptographicSponge,
};
use ark_ff::{BigInteger, PrimeField};
use blake2::{Blake2s256, Digest};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::sync::Arc;

/// Hash provider trait used for hash constraints, commitments and challenges
pub trait FieldHasher<F: PrimeField>: Send + Sync {
    /// Hash an ordered sequence of field elements into one field element
    fn hash(&self, inputs: &[F]) -> Result<F>;

    /// Short name used in logs and errors
    fn name(&self) -> &'static str;
}

impl<F: PrimeField, H: FieldHasher<F> + ?Sized> FieldHasher<F> for &H {
    fn hash(&self, inputs: &[F]) -> Result<F> {
        (**self).hash(inputs)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Parameters of the Poseidon permutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoseidonParams {
    /// Number of full S-box rounds
    pub full_rounds: usize,
    /// Number of partial S-box rounds
    pub partial_rounds: usize,
    /// S-box exponent
    pub alpha: u64,
    /// Sponge rate
    pub rate: usize,
    /// Largest accepted number of inputs
    pub max_arity: usize,
}

impl Default for PoseidonParams {
    fn default() -> Self {
        Self {
            full_rounds: 8,
            partial_rounds: 57,
            alpha: 5,
            rate: 2,
            max_arity: 16,
        }
    }
}

impl PoseidonParams {
    /// Checks the parameters before round constants are generated
    pub fn validate(&self) -> Result<()> {
        if self.full_rounds == 0 || self.full_rounds % 2 != 0 {
            return Err(ProviderError::InvalidEncoding(format!(
                "full_rounds must be a positive even number, got {}",
                self.full_rounds
            )));
        }
        if self.rate == 0 || self.max_arity == 0 {
            return Err(ProviderError::InvalidEncoding(
                "rate and max_arity must be positive".to_string(),
            ));
        }
        if self.alpha < 3 {
            return Err(ProviderError::InvalidEncoding(format!(
                "alpha must be at least 3, got {}",
                self.alpha
            )));
        }
        Ok(())
    }
}

/// Poseidon sponge hasher
///
/// Round constants and the MDS matrix are derived once with the Grain LFSR
/// and shared between clones.
#[derive(Clone)]
pub struct PoseidonHasher<F: PrimeField> {
    config: Arc<PoseidonConfig<F>>,
    max_arity: usize,
}

impl<F: PrimeField> std::fmt::Debug for PoseidonHasher<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoseidonHasher")
            .field("full_rounds", &self.config.full_rounds)
            .field("partial_rounds", &self.config.partial_rounds)
            .field("rate", &self.config.rate)
            .field("max_arity", &self.max_arity)
            .finish()
    }
}

impl<F: PrimeField + Absorb> PoseidonHasher<F> {
    /// Build a hasher from explicit parameters
    pub fn new(params: PoseidonParams) -> Result<Self> {
        params.validate()?;

        let (ark, mds) = find_poseidon_ark_and_mds::<F>(
            F::MODULUS_BIT_SIZE as u64,
            params.rate,
            params.full_rounds as u64,
            params.partial_rounds as u64,
            0,
        );
        let config = PoseidonConfig::new(
            params.full_rounds,
            params.partial_rounds,
            params.alpha,
            mds,
            ark,
            params.rate,
            1,
        );

        Ok(Self {
            config: Arc::new(config),
            max_arity: params.max_arity,
        })
    }

    /// Largest number of inputs accepted by [`FieldHasher::hash`]
    pub fn max_arity(&self) -> usize {
        self.max_arity
    }
}

impl<F: PrimeField + Absorb> FieldHasher<F> for PoseidonHasher<F> {
    fn hash(&self, inputs: &[F]) -> Result<F> {
        if inputs.is_empty() {
            return Err(ProviderError::EmptyInput { hasher: self.name() });
        }
        if inputs.len() > self.max_arity {
            return Err(ProviderError::ArityExceeded {
                hasher: self.name(),
                max: self.max_arity,
                got: inputs.len(),
            });
        }

        let mut sponge = PoseidonSponge::new(&self.config);
        // Length prefix keeps [x] and [x, 0] apart after sponge padding
        sponge.absorb(&F::from(inputs.len() as u64));
        sponge.absorb(&inputs.to_vec());

        sponge
            .squeeze_field_elements::<F>(1)
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Serialization("Poseidon squeeze returned nothing".to_string()))
    }

    fn name(&self) -> &'static str {
        "poseidon"
    }
}

/// Blake2s hash-to-field hasher
#[derive(Debug, Clone, Default)]
pub struct Blake2sHasher<F> {
    _field: PhantomData<fn() -> F>,
}

impl<F: PrimeField> Blake2sHasher<F> {
    pub fn new() -> Self {
        Self { _field: PhantomData }
    }
}

impl<F: PrimeField> FieldHasher<F> for Blake2sHasher<F> {
    fn hash(&self, inputs: &[F]) -> Result<F> {
        let mut hasher = Blake2s256::new();
        hasher.update(b"zkp-field-hash");
        hasher.update((inputs.len() as u64).to_le_bytes());
        for input in inputs {
            let bytes = input.into_bigint().to_bytes_le();
            hasher.update((bytes.len() as u64).to_le_bytes());
            hasher.update(&bytes);
        }
        let digest = hasher.finalize();

        // Stretch to 64 bytes so the reduction bias is negligible
        let mut extended = Blake2s256::new();
        extended.update(digest);
        extended.update(b"extend");

        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(&digest);
        bytes[32..].copy_from_slice(&extended.finalize());

        Ok(F::from_le_bytes_mod_order(&bytes))
    }

    fn name(&self) -> &'static str {
        "blake2s"
    }
}
