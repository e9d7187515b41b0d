//! Variable bindings of a constraint system

use crate::R1CSError;
use ark_ff::PrimeField;
use std::collections::BTreeMap;

/// Name of the constant variable, always bound to one
pub const ONE: &str = "1";

/// Checks that a variable name is usable
pub fn validate_name(name: &str) -> Result<&str, R1CSError> {
    if name.trim().is_empty() {
        return Err(R1CSError::InvalidVariableName(name.to_string()));
    }
    Ok(name)
}

/// Table mapping variable names to their current values
///
/// The constant [`ONE`] is inserted on construction and can never be rebound
/// to anything but one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableTable<F: PrimeField> {
    values: BTreeMap<String, F>,
}

impl<F: PrimeField> VariableTable<F> {
    pub fn new() -> Self {
        let mut values = BTreeMap::new();
        values.insert(ONE.to_string(), F::one());
        Self { values }
    }

    /// Bind or overwrite a variable
    pub fn insert(&mut self, name: &str, value: F) -> Result<(), R1CSError> {
        validate_name(name)?;
        if name == ONE && value != F::one() {
            return Err(R1CSError::ConstantRebind);
        }
        self.values.insert(name.to_string(), value);
        Ok(())
    }

    /// Overwrite an existing binding
    pub fn update(&mut self, name: &str, value: F) -> Result<(), R1CSError> {
        if !self.contains(name) {
            return Err(R1CSError::UndefinedVariable(name.to_string()));
        }
        self.insert(name, value)
    }

    pub fn get(&self, name: &str) -> Option<F> {
        self.values.get(name).copied()
    }

    /// Value of a bound variable, or `UndefinedVariable`
    pub fn value(&self, name: &str) -> Result<F, R1CSError> {
        self.get(name)
            .ok_or_else(|| R1CSError::UndefinedVariable(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of bindings, including the constant
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &F)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<F: PrimeField> Default for VariableTable<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Fr;

    #[test]
    fn test_constant_always_present() {
        let table = VariableTable::<Fr>::new();
        assert_eq!(table.get(ONE), Some(Fr::from(1u64)));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_constant_cannot_be_rebound() {
        let mut table = VariableTable::<Fr>::new();
        assert!(matches!(
            table.insert(ONE, Fr::from(2u64)),
            Err(R1CSError::ConstantRebind)
        ));
        assert!(table.insert(ONE, Fr::from(1u64)).is_ok());
    }

    #[test]
    fn test_blank_names_rejected() {
        let mut table = VariableTable::<Fr>::new();
        assert!(table.insert("", Fr::from(1u64)).is_err());
        assert!(table.insert("   ", Fr::from(1u64)).is_err());
    }
}
