//! Conversion from R1CS to the polynomial form

use crate::{ConstraintPolynomial, QAPError, Result};
use ark_ff::PrimeField;
use r1cs::{ConstraintSystem, VariableTable};
use std::sync::Arc;
use tracing::debug;

/// Ordered polynomial form of a constraint system
///
/// One [`ConstraintPolynomial`] per constraint, in the order the constraints
/// were added. Variable bindings are snapshotted at conversion time; later
/// changes to the source system are not observed.
#[derive(Debug, Clone)]
pub struct QAP<F: PrimeField> {
    polynomials: Vec<ConstraintPolynomial<F>>,
    bindings: Arc<VariableTable<F>>,
}

impl<F: PrimeField> QAP<F> {
    /// Convert R1CS to QAP
    pub fn from_r1cs(cs: &ConstraintSystem<F>) -> Result<Self> {
        let constraints = cs.constraints();
        if constraints.is_empty() {
            return Err(QAPError::EmptyConstraintSet);
        }

        let bindings = Arc::new(cs.variables().clone());
        let polynomials = constraints
            .iter()
            .enumerate()
            .map(|(index, constraint)| {
                ConstraintPolynomial::new(index, constraint.clone(), Arc::clone(&bindings))
            })
            .collect::<Vec<_>>();

        debug!(
            constraints = polynomials.len(),
            variables = bindings.len(),
            "built polynomial form"
        );

        Ok(Self {
            polynomials,
            bindings,
        })
    }

    pub fn polynomials(&self) -> &[ConstraintPolynomial<F>] {
        &self.polynomials
    }

    pub fn num_constraints(&self) -> usize {
        self.polynomials.len()
    }

    /// Bindings captured at conversion time
    pub fn bindings(&self) -> &VariableTable<F> {
        &self.bindings
    }

    /// Evaluate every constraint polynomial at `x`, in order
    pub fn evaluate_all(&self, x: F) -> Result<Vec<F>> {
        self.polynomials.iter().map(|p| p.evaluate(x)).collect()
    }
}
