//! Linear combination representation for R1CS

use crate::{variable::ONE, R1CSError, VariableTable};
use ark_ff::PrimeField;
use ark_std::fmt;
use serde_json::Value;
use std::collections::BTreeMap;
use zkp_field::{parse_decimal_reduced, field_to_decimal};

/// A sparse linear combination of named variables: c1*v1 + c2*v2 + ... + cn*vn
///
/// The constant variable `"1"` acts as the bias term. Names are not checked
/// against any variable table until the combination is evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearCombination<F: PrimeField> {
    pub terms: BTreeMap<String, F>,
}

impl<F: PrimeField> LinearCombination<F> {
    /// Create an empty linear combination
    pub fn new() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    /// Create a linear combination from a single variable
    pub fn from_variable(name: &str) -> Self {
        let mut lc = Self::new();
        lc.add_term(name, F::one());
        lc
    }

    /// Create a linear combination from a constant
    pub fn from_constant(constant: F) -> Self {
        let mut lc = Self::new();
        lc.add_term(ONE, constant);
        lc
    }

    /// Add `coefficient * name`, accumulating onto an existing term
    pub fn add_term(&mut self, name: &str, coefficient: F) {
        *self.terms.entry(name.to_string()).or_insert_with(F::zero) += coefficient;
    }

    /// Builder form of [`LinearCombination::add_term`]
    pub fn with_term(mut self, name: &str, coefficient: F) -> Self {
        self.add_term(name, coefficient);
        self
    }

    /// Multiply the linear combination by a scalar
    pub fn mul_scalar(&mut self, scalar: F) {
        for coefficient in self.terms.values_mut() {
            *coefficient *= scalar;
        }
    }

    /// Coefficient of the constant variable
    pub fn constant_coefficient(&self) -> F {
        self.terms.get(ONE).copied().unwrap_or_else(F::zero)
    }

    /// Iterate over the non-constant terms
    pub fn variable_terms(&self) -> impl Iterator<Item = (&str, &F)> {
        self.terms
            .iter()
            .filter(|(name, _)| name.as_str() != ONE)
            .map(|(name, coeff)| (name.as_str(), coeff))
    }

    /// Evaluate against the current variable bindings
    pub fn evaluate(&self, variables: &VariableTable<F>) -> Result<F, R1CSError> {
        let mut result = F::zero();
        for (name, coefficient) in &self.terms {
            result += *coefficient * variables.value(name)?;
        }
        Ok(result)
    }

    /// Names referenced by this combination
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    /// Get the number of terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Parse a JSON object mapping names to coefficients.
    ///
    /// Coefficients may be JSON integers (negative values are negated in the
    /// field) or base-10 strings.
    pub fn from_json(value: &Value) -> Result<Self, R1CSError> {
        let object = value.as_object().ok_or_else(|| {
            R1CSError::MalformedConstraint(format!("expected an object of coefficients, got {}", value))
        })?;

        let mut lc = Self::new();
        for (name, coefficient) in object {
            if name.trim().is_empty() {
                return Err(R1CSError::MalformedConstraint("empty variable name".to_string()));
            }
            lc.add_term(name, parse_coefficient(coefficient)?);
        }
        Ok(lc)
    }

    /// Encode as a JSON object, coefficients as base-10 strings
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.terms
                .iter()
                .map(|(name, coeff)| (name.clone(), Value::String(field_to_decimal(coeff))))
                .collect(),
        )
    }
}

fn parse_coefficient<F: PrimeField>(value: &Value) -> Result<F, R1CSError> {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Ok(F::from(u))
            } else if let Some(i) = n.as_i64() {
                Ok(-F::from(i.unsigned_abs()))
            } else {
                Err(R1CSError::MalformedConstraint(format!(
                    "coefficient {} is not an integer",
                    n
                )))
            }
        }
        Value::String(s) => {
            let (negative, digits) = match s.trim().strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, s.as_str()),
            };
            let parsed: F = parse_decimal_reduced(digits)
                .map_err(|e| R1CSError::MalformedConstraint(e.to_string()))?;
            Ok(if negative { -parsed } else { parsed })
        }
        other => Err(R1CSError::MalformedConstraint(format!(
            "coefficient {} is neither a number nor a decimal string",
            other
        ))),
    }
}

impl<F: PrimeField> Default for LinearCombination<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: PrimeField> fmt::Display for LinearCombination<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }

        for (i, (name, coefficient)) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}*{}", field_to_decimal(coefficient), name)?;
        }
        Ok(())
    }
}

// Arithmetic operations
impl<F: PrimeField> std::ops::Add for LinearCombination<F> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        for (name, coefficient) in other.terms {
            self.add_term(&name, coefficient);
        }
        self
    }
}

impl<F: PrimeField> std::ops::Mul<F> for LinearCombination<F> {
    type Output = Self;

    fn mul(mut self, scalar: F) -> Self {
        self.mul_scalar(scalar);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Fr;
    use serde_json::json;

    #[test]
    fn test_linear_combination() {
        let mut variables = VariableTable::<Fr>::new();
        variables.insert("x", Fr::from(5u64)).unwrap();
        variables.insert("y", Fr::from(7u64)).unwrap();

        // 2*x + 3*y + 4
        let lc = LinearCombination::<Fr>::new()
            .with_term("x", Fr::from(2u64))
            .with_term("y", Fr::from(3u64))
            .with_term(ONE, Fr::from(4u64));

        // 2*5 + 3*7 + 4 = 35
        assert_eq!(lc.evaluate(&variables).unwrap(), Fr::from(35u64));
        assert_eq!(lc.constant_coefficient(), Fr::from(4u64));
        assert_eq!(lc.variable_terms().count(), 2);
    }

    #[test]
    fn test_unbound_name_fails_on_evaluation() {
        let variables = VariableTable::<Fr>::new();
        let lc = LinearCombination::<Fr>::from_variable("ghost");
        assert!(matches!(
            lc.evaluate(&variables),
            Err(R1CSError::UndefinedVariable(name)) if name == "ghost"
        ));
    }

    #[test]
    fn test_linear_combination_operations() {
        let mut variables = VariableTable::<Fr>::new();
        variables.insert("x", Fr::from(2u64)).unwrap();
        variables.insert("y", Fr::from(3u64)).unwrap();

        let sum = LinearCombination::<Fr>::from_variable("x") + LinearCombination::from_variable("y");
        assert_eq!(sum.len(), 2);

        // (x + y) * 5 = (2 + 3) * 5 = 25
        let scaled = sum * Fr::from(5u64);
        assert_eq!(scaled.evaluate(&variables).unwrap(), Fr::from(25u64));

        // Repeated terms accumulate
        let doubled = LinearCombination::<Fr>::from_variable("x") + LinearCombination::from_variable("x");
        assert_eq!(doubled.len(), 1);
        assert_eq!(doubled.evaluate(&variables).unwrap(), Fr::from(4u64));
    }

    #[test]
    fn test_from_json() {
        let lc = LinearCombination::<Fr>::from_json(&json!({"x": 3, "1": "10", "y": -2})).unwrap();
        assert_eq!(lc.terms["x"], Fr::from(3u64));
        assert_eq!(lc.terms["1"], Fr::from(10u64));
        assert_eq!(lc.terms["y"], -Fr::from(2u64));

        let empty = LinearCombination::<Fr>::from_json(&json!({})).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        for bad in [json!(5), json!([1, 2]), json!("x"), json!(null), json!({"x": 1.5}), json!({"x": true})] {
            assert!(matches!(
                LinearCombination::<Fr>::from_json(&bad),
                Err(R1CSError::MalformedConstraint(_))
            ));
        }
    }

    #[test]
    fn test_json_roundtrip() {
        let lc = LinearCombination::<Fr>::from_variable("x").with_term(ONE, Fr::from(9u64));
        assert_eq!(LinearCombination::from_json(&lc.to_json()).unwrap(), lc);
    }
}
