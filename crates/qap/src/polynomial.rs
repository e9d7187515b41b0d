//! Per-constraint evaluation polynomials

use crate::QAPError;
use ark_ff::PrimeField;
use ark_poly::{univariate::DensePolynomial, DenseUVPolynomial, Polynomial};
use r1cs::{Constraint, LinearCombination, VariableTable, ONE};
use std::sync::Arc;

/// The evaluation function of one constraint: x -> A(x) * B(x) - C(x)
///
/// Every non-constant variable of A, B and C is replaced by the same challenge
/// `x`, so each side collapses to `k0 + k1 * x` and the whole function is a
/// polynomial of degree at most two. This is much weaker than a real QAP,
/// which interpolates one wire polynomial per variable: distinct witnesses
/// that agree on the collapsed coefficients are indistinguishable, and the
/// result is not zero for satisfied constraints. Soundness against a
/// malicious prover is NOT established by this construction.
#[derive(Debug, Clone)]
pub struct ConstraintPolynomial<F: PrimeField> {
    index: usize,
    constraint: Constraint<F>,
    bindings: Arc<VariableTable<F>>,
}

impl<F: PrimeField> ConstraintPolynomial<F> {
    pub(crate) fn new(index: usize, constraint: Constraint<F>, bindings: Arc<VariableTable<F>>) -> Self {
        Self {
            index,
            constraint,
            bindings,
        }
    }

    /// Position of the source constraint
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn constraint(&self) -> &Constraint<F> {
        &self.constraint
    }

    /// The collapsed polynomial A(x) * B(x) - C(x)
    pub fn polynomial(&self) -> Result<DensePolynomial<F>, QAPError> {
        let a = self.collapse(&self.constraint.a)?;
        let b = self.collapse(&self.constraint.b)?;
        let c = self.collapse(&self.constraint.c)?;
        Ok(&(&a * &b) - &c)
    }

    /// Evaluate at the challenge `x`
    pub fn evaluate(&self, x: F) -> Result<F, QAPError> {
        Ok(self.polynomial()?.evaluate(&x))
    }

    /// Collapse a linear combination to `k0 + k1 * x`.
    ///
    /// Names must be the constant or bound in the snapshot taken when the
    /// polynomial form was built.
    fn collapse(&self, lc: &LinearCombination<F>) -> Result<DensePolynomial<F>, QAPError> {
        let mut constant = F::zero();
        let mut linear = F::zero();

        for (name, coefficient) in &lc.terms {
            if name == ONE {
                constant += coefficient;
            } else if self.bindings.contains(name) {
                linear += coefficient;
            } else {
                return Err(QAPError::UndefinedVariableInEvaluation {
                    constraint: self.index,
                    name: name.clone(),
                });
            }
        }

        Ok(DensePolynomial::from_coefficients_vec(vec![constant, linear]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Fr;

    fn bindings(names: &[&str]) -> Arc<VariableTable<Fr>> {
        let mut table = VariableTable::new();
        for name in names {
            table.insert(name, Fr::from(0u64)).unwrap();
        }
        Arc::new(table)
    }

    #[test]
    fn test_collapsed_evaluation() {
        // (2x + 3) * (1) - (5x) at x = 4: 11 - 20
        let constraint = Constraint::new(
            LinearCombination::new()
                .with_term("x", Fr::from(2u64))
                .with_term(ONE, Fr::from(3u64)),
            LinearCombination::from_constant(Fr::from(1u64)),
            LinearCombination::new().with_term("y", Fr::from(5u64)),
        );
        let poly = ConstraintPolynomial::new(0, constraint, bindings(&["x", "y"]));

        assert_eq!(poly.evaluate(Fr::from(4u64)).unwrap(), Fr::from(11u64) - Fr::from(20u64));
        assert!(poly.polynomial().unwrap().degree() <= 2);
    }

    #[test]
    fn test_values_of_bound_variables_are_ignored() {
        // Only membership matters; the bound value never enters the evaluation
        let constraint = Constraint::new(
            LinearCombination::from_variable("x"),
            LinearCombination::from_variable("x"),
            LinearCombination::<Fr>::new(),
        );
        let mut table = VariableTable::new();
        table.insert("x", Fr::from(1000u64)).unwrap();
        let poly = ConstraintPolynomial::new(0, constraint, Arc::new(table));

        assert_eq!(poly.evaluate(Fr::from(3u64)).unwrap(), Fr::from(9u64));
    }

    #[test]
    fn test_same_challenge_substitution_is_not_sound() {
        // x * y = z and x * x = z collapse to the same polynomial x^2 - x,
        // so the evaluation cannot tell the two circuits apart.
        let names = bindings(&["x", "y", "z"]);
        let xy = ConstraintPolynomial::new(
            0,
            Constraint::new(
                LinearCombination::from_variable("x"),
                LinearCombination::from_variable("y"),
                LinearCombination::from_variable("z"),
            ),
            names.clone(),
        );
        let xx = ConstraintPolynomial::new(
            0,
            Constraint::new(
                LinearCombination::from_variable("x"),
                LinearCombination::from_variable("x"),
                LinearCombination::from_variable("z"),
            ),
            names,
        );

        let challenge = Fr::from(77u64);
        assert_eq!(xy.evaluate(challenge).unwrap(), xx.evaluate(challenge).unwrap());
    }

    #[test]
    fn test_unbound_name_fails() {
        let constraint = Constraint::new(
            LinearCombination::from_variable("ghost"),
            LinearCombination::<Fr>::from_constant(Fr::from(1u64)),
            LinearCombination::new(),
        );
        let poly = ConstraintPolynomial::new(3, constraint, bindings(&[]));

        assert_eq!(
            poly.evaluate(Fr::from(1u64)),
            Err(QAPError::UndefinedVariableInEvaluation {
                constraint: 3,
                name: "ghost".to_string()
            })
        );
    }
}
