//! Proof system facade

use crate::{ProofBundle, Result, SystemError};
use ark_ff::PrimeField;
use qap::QAP;
use r1cs::ConstraintSystem;
use snark::{Proof, ProofEngine};
use tracing::{debug, info, warn};
use zkp_field::{field_to_decimal, FieldHasher};

/// Name of the `i`-th witness variable, counting from one
pub fn witness_variable(i: usize) -> String {
    format!("x{}", i)
}

/// Name of the output variable of the witness hash constraint
pub const OUTPUT_VARIABLE: &str = "y";

/// Proves knowledge of a witness whose hash is published as the output
///
/// Proof generation configures the system on first use with a hash
/// constraint over as many witness variables as the first witness has
/// elements. Verification never configures it. Callers may
/// append their own constraints through [`ZkProofSystem::constraint_system_mut`];
/// prover and verifier must hold the same constraint log.
#[derive(Debug)]
pub struct ZkProofSystem<F: PrimeField, H: FieldHasher<F>> {
    cs: ConstraintSystem<F>,
    hasher: H,
    configured: bool,
}

impl<F: PrimeField, H: FieldHasher<F>> ZkProofSystem<F, H> {
    pub fn new(hasher: H) -> Self {
        Self {
            cs: ConstraintSystem::new(),
            hasher,
            configured: false,
        }
    }

    /// Add `x1..xn` and `y`, bound to zero, and the constraint H(x1..xn) = y
    pub fn setup_constraints(&mut self, witness_count: usize) -> Result<()> {
        if witness_count == 0 {
            return Err(SystemError::InvalidWitnessCount(witness_count));
        }

        let names = (1..=witness_count)
            .map(|i| self.cs.add_default_variable(&witness_variable(i)))
            .collect::<std::result::Result<Vec<String>, _>>()?;
        let output = self.cs.add_default_variable(OUTPUT_VARIABLE)?;

        let inputs: Vec<&str> = names.iter().map(String::as_str).collect();
        self.cs.add_hash_constraint(&self.hasher, &inputs, &output)?;

        self.configured = true;
        info!(witness_count, hasher = self.hasher.name(), "constraints configured");
        Ok(())
    }

    /// Prove knowledge of `inputs`.
    ///
    /// With a `secret` the bundle also carries `H(inputs ++ [secret])`. A
    /// `previous` proof is chained and must prove the same witness.
    pub fn generate_proof(
        &mut self,
        inputs: &[F],
        secret: Option<F>,
        previous: Option<Proof<F>>,
    ) -> Result<ProofBundle<F>> {
        self.try_generate(inputs, secret, previous)
            .map_err(SystemError::surface_provider)
    }

    fn try_generate(
        &mut self,
        inputs: &[F],
        secret: Option<F>,
        previous: Option<Proof<F>>,
    ) -> Result<ProofBundle<F>> {
        if inputs.is_empty() {
            return Err(SystemError::InvalidInput("witness must not be empty".to_string()));
        }
        if !self.configured {
            self.setup_constraints(inputs.len())?;
        }

        let output = self.hasher.hash(inputs).map_err(SystemError::ProofUnavailable)?;
        debug!(output = %field_to_decimal(&output), "witness hash computed");

        let commitment = secret
            .map(|secret| self.commitment(inputs, secret))
            .transpose()?;

        let qap = QAP::from_r1cs(&self.cs)?;
        let engine = ProofEngine::new(&qap, &self.hasher);
        let proof = engine.generate_proof(inputs, previous)?;

        info!(
            depth = proof.depth(),
            committed = commitment.is_some(),
            "proof bundle generated"
        );
        Ok(ProofBundle {
            proof,
            output,
            commitment,
        })
    }

    /// Check a bundle against `inputs` and, when both are present, the secret.
    ///
    /// Verification failures of any kind are reported as `false`. Nothing is
    /// configured here: a system without constraints rejects every bundle.
    pub fn verify_proof(&self, bundle: &ProofBundle<F>, inputs: &[F], secret: Option<F>) -> bool {
        if inputs.is_empty() {
            warn!("verification rejected: empty witness");
            return false;
        }

        match self.hasher.hash(inputs) {
            Ok(expected) if expected == bundle.output => {}
            Ok(_) => {
                warn!("verification failed: output does not match witness hash");
                return false;
            }
            Err(e) => {
                warn!(error = %e, "verification rejected: hash provider failed");
                return false;
            }
        }

        if let (Some(commitment), Some(secret)) = (bundle.commitment, secret) {
            match self.commitment(inputs, secret) {
                Ok(expected) if expected == commitment => {}
                Ok(_) => {
                    warn!("verification failed: commitment does not match secret");
                    return false;
                }
                Err(e) => {
                    warn!(error = %e, "verification rejected: commitment unavailable");
                    return false;
                }
            }
        }

        let qap = match QAP::from_r1cs(&self.cs) {
            Ok(qap) => qap,
            Err(e) => {
                warn!(error = %e, "verification rejected: no polynomial form");
                return false;
            }
        };
        let valid = ProofEngine::new(&qap, &self.hasher).verify_proof(&bundle.proof, inputs);

        if valid {
            info!("proof bundle verified");
        }
        valid
    }

    fn commitment(&self, inputs: &[F], secret: F) -> Result<F> {
        let mut preimage = inputs.to_vec();
        preimage.push(secret);
        self.hasher.hash(&preimage).map_err(SystemError::ProofUnavailable)
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn constraint_system(&self) -> &ConstraintSystem<F> {
        &self.cs
    }

    pub fn constraint_system_mut(&mut self) -> &mut ConstraintSystem<F> {
        &mut self.cs
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}
