//! Curve-equality check standing in for a pairing

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use zkp_field::{decode_le_hex, BabyJubjub, CurveProvider, ProviderError};

/// Three hex-encoded little-endian integers, `{"A", "B", "C"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexTriple {
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
    #[serde(rename = "C")]
    pub c: String,
}

impl HexTriple {
    pub fn new(a: impl Into<String>, b: impl Into<String>, c: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            c: c.into(),
        }
    }
}

/// Accepts a proof `(A, B, C)` iff `G·(A·B mod q) == G·C` for the provider's
/// base point `G`, after reducing every value modulo `q`.
///
/// This is not a bilinear pairing. The verification key is only checked for
/// decodability.
#[derive(Debug, Clone, Default)]
pub struct CurveEqualityCheck<C: CurveProvider = BabyJubjub> {
    curve: C,
}

impl<C: CurveProvider> CurveEqualityCheck<C> {
    pub fn new(curve: C) -> Self {
        Self { curve }
    }

    pub fn curve(&self) -> &C {
        &self.curve
    }

    fn reduce(&self, triple: &HexTriple) -> Result<[BigUint; 3], ProviderError> {
        Ok([
            self.curve.reduce_modulo(&decode_le_hex(&triple.a)?),
            self.curve.reduce_modulo(&decode_le_hex(&triple.b)?),
            self.curve.reduce_modulo(&decode_le_hex(&triple.c)?),
        ])
    }

    pub fn check(&self, proof: &HexTriple, vk: &HexTriple) -> bool {
        let [a, b, c] = match self.reduce(proof) {
            Ok(values) => values,
            Err(e) => {
                warn!(error = %e, "curve check rejected: undecodable proof");
                return false;
            }
        };
        if let Err(e) = self.reduce(vk) {
            warn!(error = %e, "curve check rejected: undecodable verification key");
            return false;
        }

        if [&a, &b, &c].iter().any(|v| v.bits() == 0) {
            warn!("curve check rejected: zero proof value");
            return false;
        }

        let ab = self.curve.reduce_modulo(&(&a * &b));
        debug!(ab = %ab, c = %c, "curve check scalars");

        let base = self.curve.base_point();
        let lhs = self.curve.scalar_multiply(&base, &ab);
        let rhs = self.curve.scalar_multiply(&base, &c);
        let valid = self.curve.points_equal(&lhs, &rhs);

        if valid {
            info!("curve check passed");
        } else {
            warn!("curve check failed: points differ");
        }
        valid
    }
}
