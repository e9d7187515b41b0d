//! Fixed-constant legacy proof variant

use crate::{read_json, write_json, ArtifactError, BackendError, Result, TrustedSetup};
use ark_ff::PrimeField;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::path::Path;
use tracing::{debug, info, warn};
use zkp_field::convert::{serde_biguint, serde_biguint_vec};
use zkp_field::{biguint_to_field, field_modulus, field_to_biguint, field_to_decimal, Fr};

/// Proof of the fixed-constant variant, as stored in `proof.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyProof {
    #[serde(rename = "A", with = "serde_biguint")]
    pub a: BigUint,
    #[serde(rename = "B", with = "serde_biguint")]
    pub b: BigUint,
    #[serde(rename = "C", with = "serde_biguint")]
    pub c: BigUint,
    /// Witnesses the proof was generated for; verification ignores them
    #[serde(with = "serde_biguint_vec")]
    pub witnesses: Vec<BigUint>,
}

impl LegacyProof {
    pub fn load(path: &Path) -> std::result::Result<Self, ArtifactError> {
        read_json(path)
    }

    pub fn save(&self, path: &Path) -> std::result::Result<(), ArtifactError> {
        write_json(self, path)
    }
}

/// Scales the setup constants by the product `p` of the witnesses:
/// `A' = A·p`, `B' = B·p`, `C' = A'·B'·C`, all modulo the field modulus.
///
/// The witnesses only enter through their product, so any two witness lists
/// with equal products modulo q produce the same proof. There is no pairing
/// check; the proof hides nothing and binds only the product.
#[derive(Debug, Clone)]
pub struct FixedConstantProver<F: PrimeField = Fr> {
    setup: TrustedSetup,
    _field: PhantomData<fn() -> F>,
}

impl<F: PrimeField> FixedConstantProver<F> {
    pub fn new(setup: TrustedSetup) -> Self {
        Self {
            setup,
            _field: PhantomData,
        }
    }

    /// Build a prover from a persisted setup
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::new(TrustedSetup::load(path)?))
    }

    pub fn setup(&self) -> &TrustedSetup {
        &self.setup
    }

    pub fn modulus(&self) -> BigUint {
        field_modulus::<F>()
    }

    fn evaluate(&self, witnesses: &[BigUint]) -> (F, F, F) {
        let product = witnesses
            .iter()
            .fold(F::one(), |acc, w| acc * biguint_to_field::<F>(w));

        let a = biguint_to_field::<F>(&self.setup.a) * product;
        let b = biguint_to_field::<F>(&self.setup.b) * product;
        let c = a * b * biguint_to_field::<F>(&self.setup.c);
        (a, b, c)
    }

    pub fn generate(&self, witnesses: &[BigUint]) -> Result<LegacyProof> {
        if witnesses.is_empty() {
            return Err(BackendError::InvalidInput(
                "witnesses must be a non-empty list".to_string(),
            ));
        }

        let (a, b, c) = self.evaluate(witnesses);
        debug!(
            a = %field_to_decimal(&a),
            b = %field_to_decimal(&b),
            c = %field_to_decimal(&c),
            "legacy proof values"
        );
        info!(witnesses = witnesses.len(), "legacy proof generated");

        Ok(LegacyProof {
            a: field_to_biguint(&a),
            b: field_to_biguint(&b),
            c: field_to_biguint(&c),
            witnesses: witnesses.to_vec(),
        })
    }

    /// Recompute the proof for `witnesses` and compare exactly
    pub fn verify(&self, proof: &LegacyProof, witnesses: &[BigUint]) -> bool {
        if witnesses.is_empty() {
            warn!("legacy verification rejected: no witnesses");
            return false;
        }

        let (a, b, c) = self.evaluate(witnesses);
        let valid = proof.a == field_to_biguint(&a)
            && proof.b == field_to_biguint(&b)
            && proof.c == field_to_biguint(&c);

        if valid {
            info!("legacy proof verified");
        } else {
            warn!("legacy verification failed: proof values differ");
        }
        valid
    }
}

impl<F: PrimeField> Default for FixedConstantProver<F> {
    fn default() -> Self {
        Self::new(TrustedSetup::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::tempdir;

    fn witnesses(values: &[u64]) -> Vec<BigUint> {
        values.iter().map(|v| BigUint::from(*v)).collect()
    }

    #[test]
    fn test_generate_and_verify() {
        let prover = FixedConstantProver::<Fr>::default();
        let proof = prover.generate(&witnesses(&[3, 5])).unwrap();

        let q = prover.modulus();
        let setup = TrustedSetup::standard();
        let expected_a = (&setup.a * 15u32) % &q;
        let expected_b = (&setup.b * 15u32) % &q;
        assert_eq!(proof.a, expected_a);
        assert_eq!(proof.b, expected_b);
        assert_eq!(proof.c, (&expected_a * &expected_b * &setup.c) % &q);

        assert!(prover.verify(&proof, &witnesses(&[3, 5])));
        assert!(!prover.verify(&proof, &witnesses(&[3, 6])));
        assert!(!prover.verify(&proof, &[]));
    }

    #[test]
    fn test_empty_witnesses() {
        let prover = FixedConstantProver::<Fr>::default();
        assert!(matches!(prover.generate(&[]), Err(BackendError::InvalidInput(_))));
    }

    #[test]
    fn test_equal_products_collide() {
        let prover = FixedConstantProver::<Fr>::default();
        let proof = prover.generate(&witnesses(&[2, 3])).unwrap();

        assert_eq!(proof.c, prover.generate(&witnesses(&[6])).unwrap().c);
        assert!(prover.verify(&proof, &witnesses(&[6])));
        assert!(prover.verify(&proof, &witnesses(&[3, 2])));
        assert!(prover.verify(&proof, &witnesses(&[1, 1, 6])));
    }

    #[test]
    fn test_other_field() {
        let bn = FixedConstantProver::<Fr>::default();
        let bls = FixedConstantProver::<ark_bls12_381::Fr>::default();
        let w = witnesses(&[u64::MAX, u64::MAX, u64::MAX, u64::MAX]);
        assert_ne!(bn.generate(&w).unwrap(), bls.generate(&w).unwrap());
    }

    #[test]
    fn test_proof_file_format() {
        let dir = tempdir().unwrap();
        let setup_path = dir.path().join("trusted_setup.json");
        let proof_path = dir.path().join("proof.json");

        TrustedSetup::standard().save(&setup_path).unwrap();
        let prover = FixedConstantProver::<Fr>::from_file(&setup_path).unwrap();
        let proof = prover.generate(&witnesses(&[7, 11])).unwrap();
        proof.save(&proof_path).unwrap();

        let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&proof_path).unwrap()).unwrap();
        assert_eq!(raw["witnesses"], serde_json::json!(["7", "11"]));
        assert!(raw["A"].is_string());

        let loaded = LegacyProof::load(&proof_path).unwrap();
        assert!(prover.verify(&loaded, &witnesses(&[7, 11])));
    }

    #[test]
    fn test_missing_setup() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            FixedConstantProver::<Fr>::from_file(&dir.path().join("trusted_setup.json")),
            Err(BackendError::Artifact(ArtifactError::Missing(_)))
        ));
    }

    proptest! {
        #[test]
        fn generated_proofs_verify(values in prop::collection::vec(1u64.., 1..5)) {
            let prover = FixedConstantProver::<Fr>::default();
            let w = witnesses(&values);
            let proof = prover.generate(&w).unwrap();
            prop_assert!(prover.verify(&proof, &w));
        }
    }
}
