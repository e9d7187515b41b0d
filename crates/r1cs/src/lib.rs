//! R1CS (Rank-1 Constraint System) implementation
//!
//! This crate provides a constraint system for expressing arithmetic circuits
//! as R1CS constraints of the form: A * B = C, where A, B, and C are linear
//! combinations of named variables. The constant variable `"1"` is always
//! bound to one and serves as the bias term.

#![forbid(unsafe_code)]

pub mod constraint;
pub mod linear_combination;
pub mod variable;

pub use constraint::*;
pub use linear_combination::*;
pub use variable::*;

use ark_ff::PrimeField;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};
use zkp_field::{field_to_decimal, FieldHasher, ProviderError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum R1CSError {
    #[error("Variable name must be a non-empty string, got '{0}'")]
    InvalidVariableName(String),
    #[error("Variable {0} is not defined")]
    UndefinedVariable(String),
    #[error("The constant variable \"1\" can only be bound to one")]
    ConstantRebind,
    #[error("Malformed constraint: {0}")]
    MalformedConstraint(String),
    #[error("Hash provider failed: {0}")]
    Provider(#[from] ProviderError),
}

/// R1CS constraint system over named variables
///
/// Constraints form an append-only log: their order fixes the order of the
/// derived polynomial form and therefore the positions in a proof.
#[derive(Debug, Clone)]
pub struct ConstraintSystem<F: PrimeField> {
    variables: VariableTable<F>,
    constraints: Vec<Constraint<F>>,
}

impl<F: PrimeField> ConstraintSystem<F> {
    /// Create a new empty constraint system holding only the constant "1"
    pub fn new() -> Self {
        Self {
            variables: VariableTable::new(),
            constraints: Vec::new(),
        }
    }

    /// Bind (or overwrite) a variable and return its name
    pub fn add_variable(&mut self, name: &str, value: F) -> Result<String, R1CSError> {
        self.variables.insert(name, value)?;
        debug!(name, value = %field_to_decimal(&value), "variable added");
        Ok(name.to_string())
    }

    /// Bind a variable to zero
    pub fn add_default_variable(&mut self, name: &str) -> Result<String, R1CSError> {
        self.add_variable(name, F::zero())
    }

    /// Rebind an existing variable
    pub fn update_variable(&mut self, name: &str, value: F) -> Result<(), R1CSError> {
        self.variables.update(name, value)?;
        debug!(name, value = %field_to_decimal(&value), "variable updated");
        Ok(())
    }

    /// Current value of a variable
    pub fn variable(&self, name: &str) -> Option<F> {
        self.variables.get(name)
    }

    pub fn variables(&self) -> &VariableTable<F> {
        &self.variables
    }

    /// Add the constraint H(inputs) = output.
    ///
    /// A = {input: 1 for each input}, B = {"1": 1}, C = {output: H(values)}.
    /// The hash of the currently bound input values is recorded directly as
    /// the coefficient of `output`; no binding for `output` is created.
    pub fn add_hash_constraint<H: FieldHasher<F>>(
        &mut self,
        hasher: &H,
        inputs: &[&str],
        output: &str,
    ) -> Result<F, R1CSError> {
        validate_name(output)?;
        let values = inputs
            .iter()
            .map(|name| self.variables.value(name))
            .collect::<Result<Vec<F>, _>>()?;

        let digest = hasher.hash(&values)?;

        // Repeated inputs keep a unit coefficient
        let mut a = LinearCombination::new();
        for name in inputs {
            a.terms.insert(name.to_string(), F::one());
        }
        let constraint = Constraint::new(
            a,
            LinearCombination::from_constant(F::one()),
            LinearCombination::new().with_term(output, digest),
        );
        self.constraints.push(constraint);

        debug!(
            hasher = hasher.name(),
            inputs = ?inputs,
            output,
            digest = %field_to_decimal(&digest),
            "hash constraint added"
        );
        Ok(digest)
    }

    /// Add the constraint H(balance, secret) = output.
    ///
    /// A = {balance: 1, secret: 1}, B = {"1": 1}, C = {output: H(balance, secret)}.
    pub fn add_commitment_constraint<H: FieldHasher<F>>(
        &mut self,
        hasher: &H,
        balance: &str,
        secret: &str,
        output: &str,
    ) -> Result<F, R1CSError> {
        validate_name(output)?;
        let balance_value = self.variables.value(balance)?;
        let secret_value = self.variables.value(secret)?;

        let commitment = hasher.hash(&[balance_value, secret_value])?;

        let mut a = LinearCombination::new();
        a.terms.insert(balance.to_string(), F::one());
        a.terms.insert(secret.to_string(), F::one());

        self.constraints.push(Constraint::new(
            a,
            LinearCombination::from_constant(F::one()),
            LinearCombination::new().with_term(output, commitment),
        ));

        debug!(balance, secret, output, "commitment constraint added");
        Ok(commitment)
    }

    /// Append a generic constraint A * B = C.
    ///
    /// Names are validated against the variable table only when the
    /// constraint is evaluated.
    pub fn add_constraint(
        &mut self,
        a: LinearCombination<F>,
        b: LinearCombination<F>,
        c: LinearCombination<F>,
    ) -> Result<(), R1CSError> {
        let constraint = Constraint::new(a, b, c);
        if let Some(name) = constraint.names().find(|name| name.trim().is_empty()) {
            return Err(R1CSError::MalformedConstraint(format!(
                "invalid variable name '{}'",
                name
            )));
        }

        debug!(constraint = %constraint, "constraint added");
        self.constraints.push(constraint);
        Ok(())
    }

    /// Append a constraint whose parts are JSON objects of coefficients
    pub fn add_constraint_from_json(&mut self, a: &Value, b: &Value, c: &Value) -> Result<(), R1CSError> {
        self.add_constraint(
            LinearCombination::from_json(a)?,
            LinearCombination::from_json(b)?,
            LinearCombination::from_json(c)?,
        )
    }

    /// Append every constraint of a JSON array of `{"A", "B", "C"}` objects.
    ///
    /// Nothing is appended unless the whole array parses.
    pub fn load_constraints_json(&mut self, value: &Value) -> Result<usize, R1CSError> {
        let entries = value.as_array().ok_or_else(|| {
            R1CSError::MalformedConstraint("expected an array of constraints".to_string())
        })?;

        let parsed = entries
            .iter()
            .map(Constraint::from_json)
            .collect::<Result<Vec<_>, _>>()?;

        let count = parsed.len();
        for constraint in parsed {
            self.add_constraint(constraint.a, constraint.b, constraint.c)?;
        }
        Ok(count)
    }

    /// The ordered constraint log
    pub fn constraints(&self) -> &[Constraint<F>] {
        if self.constraints.is_empty() {
            warn!("constraint system has no constraints");
        }
        &self.constraints
    }

    /// Get the number of constraints
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Check every constraint against the current bindings
    pub fn is_satisfied(&self) -> Result<bool, R1CSError> {
        for constraint in &self.constraints {
            if !constraint.is_satisfied(&self.variables)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl<F: PrimeField> Default for ConstraintSystem<F> {
    fn default() -> Self {
        Self::new()
    }
}
