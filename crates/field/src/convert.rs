//! Conversions between big integers, strings and field elements

use crate::{ProviderError, Result};
use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;

/// Returns the modulus of `F` as a big integer
pub fn field_modulus<F: PrimeField>() -> BigUint {
    BigUint::from_bytes_le(&F::MODULUS.to_bytes_le())
}

/// Reduces an arbitrary non-negative integer into `F`
pub fn biguint_to_field<F: PrimeField>(value: &BigUint) -> F {
    F::from_le_bytes_mod_order(&value.to_bytes_le())
}

/// Returns the canonical integer representative of a field element
pub fn field_to_biguint<F: PrimeField>(value: &F) -> BigUint {
    BigUint::from_bytes_le(&value.into_bigint().to_bytes_le())
}

/// Formats a field element as a base-10 string
pub fn field_to_decimal<F: PrimeField>(value: &F) -> String {
    field_to_biguint(value).to_string()
}

/// Parses a base-10 integer string
pub fn parse_biguint(s: &str) -> Result<BigUint> {
    let trimmed = s.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ProviderError::InvalidEncoding(format!(
            "'{}' is not a non-negative base-10 integer",
            s
        )));
    }
    trimmed
        .parse::<BigUint>()
        .map_err(|e| ProviderError::InvalidEncoding(e.to_string()))
}

/// Parses a base-10 integer and reduces it into `F`
pub fn parse_decimal_reduced<F: PrimeField>(s: &str) -> Result<F> {
    parse_biguint(s).map(|value| biguint_to_field(&value))
}

/// Parses a base-10 integer that must already be a canonical element of `F`
pub fn parse_decimal_canonical<F: PrimeField>(s: &str) -> Result<F> {
    let value = parse_biguint(s)?;
    let modulus = field_modulus::<F>();
    if value >= modulus {
        return Err(ProviderError::NonCanonical {
            value: value.to_string(),
            modulus: modulus.to_string(),
        });
    }
    Ok(biguint_to_field(&value))
}

/// Decodes a hex string holding a little-endian integer
pub fn decode_le_hex(s: &str) -> Result<BigUint> {
    let trimmed = s.trim();
    let trimmed = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    if trimmed.is_empty() {
        return Err(ProviderError::InvalidEncoding("empty hex string".to_string()));
    }
    let bytes = hex::decode(trimmed)
        .map_err(|e| ProviderError::InvalidEncoding(format!("'{}' is not valid hex: {}", s, e)))?;
    Ok(BigUint::from_bytes_le(&bytes))
}

/// Encodes an integer as little-endian hex, the inverse of [`decode_le_hex`]
pub fn encode_le_hex(value: &BigUint) -> String {
    hex::encode(value.to_bytes_le())
}

/// Serde adapter encoding a field element as a base-10 string
pub mod serde_field {
    use super::*;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<F: PrimeField, S: Serializer>(value: &F, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&field_to_decimal(value))
    }

    pub fn deserialize<'de, F: PrimeField, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<F, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_decimal_canonical(&s).map_err(D::Error::custom)
    }
}

/// Serde adapter for a vector of field elements
pub mod serde_field_vec {
    use super::*;
    use serde::{de::Error as _, ser::SerializeSeq, Deserialize, Deserializer, Serializer};

    pub fn serialize<F: PrimeField, S: Serializer>(values: &[F], serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values {
            seq.serialize_element(&field_to_decimal(value))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, F: PrimeField, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<F>, D::Error> {
        let strings = Vec::<String>::deserialize(deserializer)?;
        strings
            .iter()
            .map(|s| parse_decimal_canonical(s).map_err(D::Error::custom))
            .collect()
    }
}

/// Serde adapter for an optional field element (`null` when absent)
pub mod serde_field_opt {
    use super::*;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<F: PrimeField, S: Serializer>(value: &Option<F>, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.serialize_some(&field_to_decimal(v)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, F: PrimeField, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<F>, D::Error> {
        let s = Option::<String>::deserialize(deserializer)?;
        s.map(|s| parse_decimal_canonical(&s).map_err(D::Error::custom))
            .transpose()
    }
}

/// Serde adapter for a big integer as a base-10 string
pub mod serde_biguint {
    use super::*;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<BigUint, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_biguint(&s).map_err(D::Error::custom)
    }
}

/// Serde adapter for a vector of big integers as base-10 strings
pub mod serde_biguint_vec {
    use super::*;
    use serde::{de::Error as _, ser::SerializeSeq, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(values: &[BigUint], serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values {
            seq.serialize_element(&value.to_string())?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<BigUint>, D::Error> {
        let strings = Vec::<String>::deserialize(deserializer)?;
        strings
            .iter()
            .map(|s| parse_biguint(s).map_err(D::Error::custom))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Fr;
    use proptest::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Wrapped {
        #[serde(with = "serde_field")]
        value: Fr,
        #[serde(with = "serde_field_vec")]
        values: Vec<Fr>,
        #[serde(with = "serde_field_opt")]
        maybe: Option<Fr>,
    }

    #[test]
    fn test_decimal_reduction() {
        let modulus = field_modulus::<Fr>();
        let above = &modulus + BigUint::from(7u64);
        let reduced: Fr = parse_decimal_reduced(&above.to_string()).unwrap();
        assert_eq!(reduced, Fr::from(7u64));

        assert!(matches!(
            parse_decimal_canonical::<Fr>(&above.to_string()),
            Err(ProviderError::NonCanonical { .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_decimal() {
        assert!(parse_biguint("").is_err());
        assert!(parse_biguint("-5").is_err());
        assert!(parse_biguint("12a").is_err());
        assert_eq!(parse_biguint(" 42 ").unwrap(), BigUint::from(42u64));
    }

    #[test]
    fn test_le_hex_decoding() {
        // 0x0102 little-endian is 0x0201 = 513
        assert_eq!(decode_le_hex("0102").unwrap(), BigUint::from(513u64));
        assert!(decode_le_hex("abc").is_err());
        assert!(decode_le_hex("zz").is_err());
        assert!(decode_le_hex("").is_err());

        // A single 0x prefix is accepted, a repeated one is not
        assert_eq!(decode_le_hex("0x0102").unwrap(), BigUint::from(513u64));
        assert!(decode_le_hex("0x0x01").is_err());
        assert!(decode_le_hex("0x").is_err());
    }

    #[test]
    fn test_serde_adapters() {
        let wrapped = Wrapped {
            value: Fr::from(12345u64),
            values: vec![Fr::from(1u64), -Fr::from(1u64)],
            maybe: None,
        };
        let json = serde_json::to_string(&wrapped).unwrap();
        assert!(json.contains("\"12345\""));
        assert!(json.contains("\"maybe\":null"));

        let back: Wrapped = serde_json::from_str(&json).unwrap();
        assert_eq!(back, wrapped);
    }

    proptest! {
        #[test]
        fn prop_hex_encoding_inverts(value in any::<u128>()) {
            let n = BigUint::from(value);
            prop_assert_eq!(decode_le_hex(&encode_le_hex(&n)).unwrap_or_default(), n);
        }

        #[test]
        fn prop_decimal_roundtrip(value in any::<u64>()) {
            let f = Fr::from(value);
            prop_assert_eq!(field_to_decimal(&f), value.to_string());
        }
    }
}
