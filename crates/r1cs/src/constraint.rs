//! R1CS constraint representation

use crate::{LinearCombination, R1CSError, VariableTable};
use ark_ff::PrimeField;
use ark_std::fmt;
use serde_json::{json, Value};

/// An R1CS constraint: A * B = C
/// where A, B, and C are linear combinations of named variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint<F: PrimeField> {
    pub a: LinearCombination<F>,
    pub b: LinearCombination<F>,
    pub c: LinearCombination<F>,
}

impl<F: PrimeField> Constraint<F> {
    /// Create a new constraint
    pub fn new(a: LinearCombination<F>, b: LinearCombination<F>, c: LinearCombination<F>) -> Self {
        Self { a, b, c }
    }

    /// Check the constraint against the current bindings
    pub fn is_satisfied(&self, variables: &VariableTable<F>) -> Result<bool, R1CSError> {
        let a_val = self.a.evaluate(variables)?;
        let b_val = self.b.evaluate(variables)?;
        let c_val = self.c.evaluate(variables)?;

        Ok(a_val * b_val == c_val)
    }

    /// Every name referenced by A, B or C
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.a.names().chain(self.b.names()).chain(self.c.names())
    }

    /// Parse `{"A": {...}, "B": {...}, "C": {...}}`
    pub fn from_json(value: &Value) -> Result<Self, R1CSError> {
        let part = |key: &str| {
            value
                .get(key)
                .ok_or_else(|| R1CSError::MalformedConstraint(format!("missing constraint part {}", key)))
                .and_then(LinearCombination::<F>::from_json)
        };
        Ok(Self::new(part("A")?, part("B")?, part("C")?))
    }

    pub fn to_json(&self) -> Value {
        json!({
            "A": self.a.to_json(),
            "B": self.b.to_json(),
            "C": self.c.to_json(),
        })
    }
}

impl<F: PrimeField> fmt::Display for Constraint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) * ({}) = ({})", self.a, self.b, self.c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Fr;

    #[test]
    fn test_constraint_satisfaction() {
        let mut variables = VariableTable::<Fr>::new();
        variables.insert("x", Fr::from(3u64)).unwrap();
        variables.insert("y", Fr::from(4u64)).unwrap();
        variables.insert("z", Fr::from(12u64)).unwrap();

        // Constraint: x * y = z
        let constraint = Constraint::new(
            LinearCombination::from_variable("x"),
            LinearCombination::from_variable("y"),
            LinearCombination::from_variable("z"),
        );
        assert!(constraint.is_satisfied(&variables).unwrap());

        variables.update("z", Fr::from(13u64)).unwrap();
        assert!(!constraint.is_satisfied(&variables).unwrap());
    }

    #[test]
    fn test_constraint_json() {
        let value = serde_json::json!({"A": {"x": 1}, "B": {"1": 1}, "C": {"y": "7"}});
        let constraint = Constraint::<Fr>::from_json(&value).unwrap();
        assert_eq!(constraint.names().collect::<Vec<_>>(), vec!["x", "1", "y"]);
        assert_eq!(Constraint::from_json(&constraint.to_json()).unwrap(), constraint);

        let missing = serde_json::json!({"A": {}, "B": {}});
        assert!(matches!(
            Constraint::<Fr>::from_json(&missing),
            Err(R1CSError::MalformedConstraint(_))
        ));
    }
}
