//! Proof generation and verification

use crate::proof::{binding_digest, value_digest};
use crate::{Proof, Result, SnarkError};
use ark_ff::PrimeField;
use qap::QAP;
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};
use zkp_field::{field_to_decimal, FieldHasher};

/// Prover and verifier over a fixed polynomial form and hash provider
///
/// Each engine owns a random 32-byte secret whose SHA-256 commitment serves
/// as a debug identity. It plays no part in proofs.
pub struct ProofEngine<'a, F: PrimeField, H: FieldHasher<F>> {
    qap: &'a QAP<F>,
    hasher: &'a H,
    identity: [u8; 32],
}

impl<'a, F: PrimeField, H: FieldHasher<F>> ProofEngine<'a, F, H> {
    pub fn new(qap: &'a QAP<F>, hasher: &'a H) -> Self {
        let secret: [u8; 32] = rand::random();
        let identity: [u8; 32] = Sha256::digest(secret).into();
        debug!(identity = %hex::encode(identity), hasher = hasher.name(), "proof engine created");

        Self {
            qap,
            hasher,
            identity,
        }
    }

    /// Commitment to this engine's secret
    pub fn identity(&self) -> [u8; 32] {
        self.identity
    }

    pub fn qap(&self) -> &QAP<F> {
        self.qap
    }

    /// Prove knowledge of `inputs`, optionally chaining `previous_proof`.
    ///
    /// The chained proof is not re-checked here; it is verified against the
    /// same inputs when the new proof is verified.
    pub fn generate_proof(&self, inputs: &[F], previous_proof: Option<Proof<F>>) -> Result<Proof<F>> {
        if inputs.is_empty() {
            return Err(SnarkError::InvalidInput("witness must not be empty".to_string()));
        }
        if self.qap.num_constraints() == 0 {
            return Err(SnarkError::EmptyPolynomialForm);
        }

        let challenge = self.hasher.hash(inputs).map_err(SnarkError::ProofUnavailable)?;
        debug!(challenge = %field_to_decimal(&challenge), "challenge derived");

        let results = self
            .qap
            .polynomials()
            .iter()
            .enumerate()
            .map(|(index, polynomial)| {
                polynomial
                    .evaluate(challenge)
                    .map_err(|source| SnarkError::InvalidEvaluationResult { index, source })
            })
            .collect::<Result<Vec<F>>>()?;

        let binding_hash = binding_digest(&results)?;
        let proof = Proof {
            results,
            binding_hash,
            previous_proof: previous_proof.map(Box::new),
            challenge,
        };

        info!(
            constraints = proof.results.len(),
            depth = proof.depth(),
            binding_hash = %proof.binding_hash_hex(),
            "proof generated"
        );
        Ok(proof)
    }

    /// Verify `proof` and every proof it carries against `inputs`.
    ///
    /// Every link must carry the challenge of `inputs` and evaluations equal
    /// to this engine's polynomial form at that challenge. Any mismatch or
    /// provider failure yields `false`.
    pub fn verify_proof(&self, proof: &Proof<F>, inputs: &[F]) -> bool {
        if inputs.is_empty() {
            warn!("verification rejected: empty witness");
            return false;
        }

        let expected_challenge = match self.hasher.hash(inputs) {
            Ok(challenge) => challenge,
            Err(e) => {
                warn!(error = %e, "verification rejected: hash provider failed");
                return false;
            }
        };

        // Every link is checked against the same witness, so the expected
        // evaluations are shared by the whole chain.
        let expected = match self.qap.evaluate_all(expected_challenge) {
            Ok(values) => values,
            Err(e) => {
                warn!(error = %e, "verification rejected: evaluation failed");
                return false;
            }
        };
        let expected_digests = match expected.iter().map(value_digest).collect::<Result<Vec<_>>>() {
            Ok(digests) => digests,
            Err(e) => {
                warn!(error = %e, "verification rejected: digest failed");
                return false;
            }
        };

        for (depth, link) in proof.chain().enumerate() {
            if link.challenge != expected_challenge {
                warn!(depth, "verification failed: challenge does not match witness");
                return false;
            }
            if link.results.len() != expected_digests.len() {
                warn!(
                    depth,
                    expected = expected_digests.len(),
                    got = link.results.len(),
                    "verification failed: result count mismatch"
                );
                return false;
            }

            for (index, (received, expected_digest)) in link.results.iter().zip(&expected_digests).enumerate() {
                match value_digest(received) {
                    Ok(digest) if &digest == expected_digest => {}
                    _ => {
                        warn!(depth, index, "verification failed: evaluation mismatch");
                        return false;
                    }
                }
            }
        }

        info!(depth = proof.depth(), "proof verified");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Fr;
    use proptest::prelude::*;
    use qap::QAPError;
    use r1cs::{ConstraintSystem, LinearCombination};
    use zkp_field::{Blake2sHasher, ProviderError};

    fn qap_for(witness_count: usize, hasher: &Blake2sHasher<Fr>) -> QAP<Fr> {
        let mut cs = ConstraintSystem::new();
        let names: Vec<String> = (1..=witness_count).map(|i| format!("x{}", i)).collect();
        for name in &names {
            cs.add_default_variable(name).unwrap();
        }
        cs.add_default_variable("y").unwrap();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        cs.add_hash_constraint(hasher, &refs, "y").unwrap();
        QAP::from_r1cs(&cs).unwrap()
    }

    fn witness(values: &[u64]) -> Vec<Fr> {
        values.iter().map(|v| Fr::from(*v)).collect()
    }

    struct FailingHasher;

    impl FieldHasher<Fr> for FailingHasher {
        fn hash(&self, _inputs: &[Fr]) -> zkp_field::Result<Fr> {
            Err(ProviderError::EmptyInput { hasher: "failing" })
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn test_generate_and_verify() {
        let hasher = Blake2sHasher::new();
        let qap = qap_for(3, &hasher);
        let engine = ProofEngine::new(&qap, &hasher);

        let proof = engine.generate_proof(&witness(&[1, 2, 3]), None).unwrap();
        assert_eq!(proof.results.len(), 1);
        assert_eq!(proof.challenge, hasher.hash(&witness(&[1, 2, 3])).unwrap());
        assert!(proof.binding_is_consistent());

        assert!(engine.verify_proof(&proof, &witness(&[1, 2, 3])));
        assert!(!engine.verify_proof(&proof, &witness(&[1, 2, 4])));
        assert!(!engine.verify_proof(&proof, &[]));
    }

    #[test]
    fn test_empty_input_rejected() {
        let hasher = Blake2sHasher::new();
        let qap = qap_for(1, &hasher);
        let engine = ProofEngine::new(&qap, &hasher);

        assert!(matches!(
            engine.generate_proof(&[], None),
            Err(SnarkError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_provider_failure_is_unavailable() {
        let hasher = Blake2sHasher::new();
        let qap = qap_for(1, &hasher);
        let engine = ProofEngine::new(&qap, &FailingHasher);

        assert!(matches!(
            engine.generate_proof(&witness(&[1]), None),
            Err(SnarkError::ProofUnavailable(_))
        ));
    }

    #[test]
    fn test_unbound_name_fails_evaluation() {
        let hasher = Blake2sHasher::new();
        let mut cs = ConstraintSystem::new();
        cs.add_default_variable("x1").unwrap();
        cs.add_default_variable("y").unwrap();
        cs.add_hash_constraint(&hasher, &["x1"], "y").unwrap();
        cs.add_constraint(
            LinearCombination::from_variable("ghost"),
            LinearCombination::from_constant(Fr::from(1u64)),
            LinearCombination::new(),
        )
        .unwrap();
        let qap = QAP::from_r1cs(&cs).unwrap();
        let engine = ProofEngine::new(&qap, &hasher);
        let inputs = witness(&[6]);

        assert!(matches!(
            engine.generate_proof(&inputs, None),
            Err(SnarkError::InvalidEvaluationResult {
                index: 1,
                source: QAPError::UndefinedVariableInEvaluation { constraint: 1, ref name },
            }) if name == "ghost"
        ));

        // A proof from a well-formed system cannot be checked against this one
        let sound = qap_for(1, &hasher);
        let proof = ProofEngine::new(&sound, &hasher)
            .generate_proof(&inputs, None)
            .unwrap();
        assert!(!engine.verify_proof(&proof, &inputs));
    }

    #[test]
    fn test_tampered_results_fail() {
        let hasher = Blake2sHasher::new();
        let qap = qap_for(2, &hasher);
        let engine = ProofEngine::new(&qap, &hasher);
        let inputs = witness(&[4, 5]);

        let mut proof = engine.generate_proof(&inputs, None).unwrap();
        proof.results[0] += Fr::from(1u64);
        assert!(!engine.verify_proof(&proof, &inputs));

        let mut short = engine.generate_proof(&inputs, None).unwrap();
        short.results.clear();
        assert!(!engine.verify_proof(&short, &inputs));
    }

    #[test]
    fn test_recursive_chain() {
        let hasher = Blake2sHasher::new();
        let qap = qap_for(2, &hasher);
        let engine = ProofEngine::new(&qap, &hasher);
        let inputs = witness(&[8, 9]);

        let inner = engine.generate_proof(&inputs, None).unwrap();
        let outer = engine.generate_proof(&inputs, Some(inner.clone())).unwrap();
        assert_eq!(outer.depth(), 2);
        assert!(engine.verify_proof(&outer, &inputs));

        let mut tampered_inner = inner;
        tampered_inner.results[0] = Fr::from(0u64);
        let outer = engine.generate_proof(&inputs, Some(tampered_inner)).unwrap();
        assert!(!engine.verify_proof(&outer, &inputs));

        // A chain link proving a different witness breaks the whole chain
        let foreign = engine.generate_proof(&witness(&[1, 1]), None).unwrap();
        let outer = engine.generate_proof(&inputs, Some(foreign)).unwrap();
        assert!(!engine.verify_proof(&outer, &inputs));
    }

    #[test]
    fn test_engine_identities_differ() {
        let hasher = Blake2sHasher::new();
        let qap = qap_for(1, &hasher);
        let a = ProofEngine::new(&qap, &hasher);
        let b = ProofEngine::new(&qap, &hasher);
        assert_ne!(a.identity(), b.identity());

        // Proofs do not depend on the engine instance
        let inputs = witness(&[3]);
        let proof = a.generate_proof(&inputs, None).unwrap();
        assert!(b.verify_proof(&proof, &inputs));
    }

    proptest! {
        #[test]
        fn mismatched_witness_never_verifies(
            w1 in prop::collection::vec(any::<u64>(), 3),
            w2 in prop::collection::vec(any::<u64>(), 3),
        ) {
            prop_assume!(w1 != w2);
            let hasher = Blake2sHasher::new();
            let qap = qap_for(3, &hasher);
            let engine = ProofEngine::new(&qap, &hasher);

            let proof = engine.generate_proof(&witness(&w1), None).unwrap();
            prop_assert!(engine.verify_proof(&proof, &witness(&w1)));
            prop_assert!(!engine.verify_proof(&proof, &witness(&w2)));
        }
    }
}
