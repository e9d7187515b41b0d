//! QAP (Quadratic Arithmetic Program) form of a named-variable R1CS
//!
//! This crate turns each constraint of a [`r1cs::ConstraintSystem`] into a
//! low-degree evaluation function over a single challenge point.

#![forbid(unsafe_code)]

pub mod polynomial;
pub mod qap;

pub use polynomial::*;
pub use qap::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QAPError {
    #[error("Cannot build a polynomial form from an empty constraint set")]
    EmptyConstraintSet,
    #[error("Constraint {constraint} references undefined variable '{name}'")]
    UndefinedVariableInEvaluation { constraint: usize, name: String },
}

pub type Result<T> = std::result::Result<T, QAPError>;
