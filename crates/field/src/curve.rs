//! Curve provider: modular reduction and base-point scalar multiplication

use crate::convert::field_modulus;
use ark_ec::{CurveGroup, Group};
use ark_ed_on_bn254::{EdwardsProjective, Fq};
use num_bigint::BigUint;
use std::fmt::Debug;

/// Capabilities of the curve/field provider consumed by the pairing substitute
pub trait CurveProvider: Send + Sync {
    /// Group element type
    type Point: Clone + Debug + PartialEq;

    /// Modulus every scalar is reduced by
    fn modulus(&self) -> &BigUint;

    /// Reduce an integer modulo [`CurveProvider::modulus`]
    fn reduce_modulo(&self, value: &BigUint) -> BigUint {
        value % self.modulus()
    }

    /// The fixed base point
    fn base_point(&self) -> Self::Point;

    /// Multiply `point` by an integer scalar
    fn scalar_multiply(&self, point: &Self::Point, scalar: &BigUint) -> Self::Point;

    /// Group element equality
    fn points_equal(&self, a: &Self::Point, b: &Self::Point) -> bool {
        a == b
    }
}

/// The BabyJubjub twisted Edwards curve, defined over the BN254 scalar field
#[derive(Debug, Clone)]
pub struct BabyJubjub {
    modulus: BigUint,
}

impl BabyJubjub {
    pub fn new() -> Self {
        Self {
            modulus: field_modulus::<Fq>(),
        }
    }
}

impl Default for BabyJubjub {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveProvider for BabyJubjub {
    type Point = EdwardsProjective;

    fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    fn base_point(&self) -> Self::Point {
        EdwardsProjective::generator()
    }

    fn scalar_multiply(&self, point: &Self::Point, scalar: &BigUint) -> Self::Point {
        // Multiply by the integer itself, not its reduction modulo the group order
        point.mul_bigint(scalar.to_u64_digits())
    }

    fn points_equal(&self, a: &Self::Point, b: &Self::Point) -> bool {
        a.into_affine() == b.into_affine()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Fr;

    #[test]
    fn test_modulus_matches_bn254_scalar_field() {
        let curve = BabyJubjub::new();
        assert_eq!(curve.modulus(), &field_modulus::<Fr>());
    }

    #[test]
    fn test_reduce_modulo() {
        let curve = BabyJubjub::new();
        let value = curve.modulus() + BigUint::from(5u64);
        assert_eq!(curve.reduce_modulo(&value), BigUint::from(5u64));
    }

    #[test]
    fn test_scalar_multiplication_is_linear() {
        let curve = BabyJubjub::new();
        let base = curve.base_point();

        let six = curve.scalar_multiply(&base, &BigUint::from(6u64));
        let two = curve.scalar_multiply(&base, &BigUint::from(2u64));
        let two_times_three = curve.scalar_multiply(&two, &BigUint::from(3u64));

        assert!(curve.points_equal(&six, &two_times_three));
        assert!(!curve.points_equal(&six, &two));
    }

    #[test]
    fn test_zero_scalar_gives_identity() {
        let curve = BabyJubjub::new();
        let base = curve.base_point();
        let identity = curve.scalar_multiply(&base, &BigUint::from(0u64));
        let also_identity = base - base;
        assert!(curve.points_equal(&identity, &also_identity));
    }
}
