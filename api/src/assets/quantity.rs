//! Provides an arbitrary precision on-chain quantity and its display formatting.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_bigint::Sign;
use num_traits::Zero;
use serde::de;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use thiserror::Error;

/// Number of decimals of one ADA expressed in lovelace.
pub const ADA_DECIMALS: u8 = 6;

/// An error that can occur when parsing a string into a `Quantity`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseQuantityError {
    /// The string is empty or contains something other than an optional sign and digits.
    #[error("invalid quantity: {0:?}")]
    InvalidFormat(String),
}

/// A raw token quantity, exactly as stored on chain.
///
/// Quantities are unbounded integers. They arrive either as JSON strings
/// (`"1000000"`) or as JSON numbers and are always serialized back as strings
/// so that no precision is lost in transit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quantity(BigInt);

impl Quantity {
    pub fn new(value: BigInt) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    /// Compares `self / 10^decimals` against `other / 10^other_decimals` exactly.
    ///
    /// Both sides are brought to a common scale by cross multiplication, so
    /// `100` with 2 decimals (1.00) orders before `50` with 0 decimals.
    pub fn cmp_scaled(&self, decimals: u8, other: &Quantity, other_decimals: u8) -> Ordering {
        let lhs = &self.0 * pow10(other_decimals);
        let rhs = &other.0 * pow10(decimals);
        lhs.cmp(&rhs)
    }

    /// Splits the quantity into a comma grouped whole part and a fractional
    /// part holding exactly `decimals` digits.
    pub fn format(&self, decimals: u8) -> QuantityFormat {
        let digits = self.0.magnitude().to_string();
        let decimals = decimals as usize;

        let (whole, fraction) = if decimals == 0 {
            (digits, String::new())
        } else {
            let padded = format!("{:0>width$}", digits, width = decimals + 1);
            let split = padded.len() - decimals;
            (padded[..split].to_string(), padded[split..].to_string())
        };

        QuantityFormat {
            negative: self.0.sign() == Sign::Minus,
            whole: group_digits(&whole),
            fraction,
        }
    }
}

fn pow10(exp: u8) -> BigInt {
    BigInt::from(10u8).pow(exp as u32)
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self(BigInt::from(value))
    }
}

impl FromStr for Quantity {
    type Err = ParseQuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseQuantityError::InvalidFormat(s.to_string()));
        }
        trimmed
            .parse::<BigInt>()
            .map(Self)
            .map_err(|_| ParseQuantityError::InvalidFormat(s.to_string()))
    }
}

/// Displays the raw integer, without grouping or scaling.
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct QuantityVisitor;

        impl de::Visitor<'_> for QuantityVisitor {
            type Value = Quantity;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an integer or a string of digits")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Quantity, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Quantity, E> {
                Ok(Quantity::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Quantity, E> {
                Ok(Quantity::from(v))
            }

            fn visit_u128<E: de::Error>(self, v: u128) -> Result<Quantity, E> {
                Ok(Quantity(BigInt::from(v)))
            }

            fn visit_i128<E: de::Error>(self, v: i128) -> Result<Quantity, E> {
                Ok(Quantity(BigInt::from(v)))
            }
        }

        deserializer.deserialize_any(QuantityVisitor)
    }
}

/// A quantity split for display, e.g. `1,234` and `500000` for 1234.5 ADA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityFormat {
    pub negative: bool,
    /// Comma grouped integer part.
    pub whole: String,
    /// Fractional digits, padded to the requested number of decimals.
    pub fraction: String,
}

impl QuantityFormat {
    /// All fractional digits, e.g. `1,234.500000`.
    pub fn full(&self) -> String {
        self.join(&self.fraction)
    }

    /// Drops trailing fractional zeros, e.g. `1,234.5`.
    pub fn trimmed(&self) -> String {
        self.join(self.fraction.trim_end_matches('0'))
    }

    fn join(&self, fraction: &str) -> String {
        let sign = if self.negative { "-" } else { "" };
        if fraction.is_empty() {
            format!("{}{}", sign, self.whole)
        } else {
            format!("{}{}.{}", sign, self.whole, fraction)
        }
    }
}

impl fmt::Display for QuantityFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.trimmed())
    }
}

/// Groups the digits of any integer with commas: `1234567` becomes `1,234,567`.
pub fn with_commas(value: impl fmt::Display) -> String {
    let s = value.to_string();
    match s.strip_prefix('-') {
        Some(digits) => format!("-{}", group_digits(digits)),
        None => group_digits(&s),
    }
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(s: &str) -> Quantity {
        s.parse().unwrap()
    }

    #[test]
    fn parses_digit_strings_only() {
        assert_eq!(q("42"), Quantity::from(42u64));
        assert_eq!(q("-7"), Quantity::from(-7i64));
        assert!("".parse::<Quantity>().is_err());
        assert!("12a".parse::<Quantity>().is_err());
        assert!("1.5".parse::<Quantity>().is_err());
    }

    #[test]
    fn handles_values_beyond_u64() {
        let big = q("340282366920938463463374607431768211456");
        assert_eq!(big.to_string(), "340282366920938463463374607431768211456");
        assert_eq!(big.cmp(&Quantity::from(u64::MAX)), Ordering::Greater);
    }

    #[test]
    fn scaled_comparison_uses_true_decimal_value() {
        // 1.00 vs 50
        assert_eq!(q("100").cmp_scaled(2, &q("50"), 0), Ordering::Less);
        // 1.5 vs 1.50
        assert_eq!(q("15").cmp_scaled(1, &q("150"), 2), Ordering::Equal);
        assert_eq!(q("1").cmp_scaled(0, &q("999999"), 6), Ordering::Greater);
    }

    #[test]
    fn formats_with_decimals_and_grouping() {
        let f = q("1234500000").format(6);
        assert_eq!(f.whole, "1,234");
        assert_eq!(f.fraction, "500000");
        assert_eq!(f.full(), "1,234.500000");
        assert_eq!(f.trimmed(), "1,234.5");

        assert_eq!(q("5").format(6).full(), "0.000005");
        assert_eq!(q("1000000").format(6).trimmed(), "1");
        assert_eq!(q("1234567").format(0).to_string(), "1,234,567");
        assert_eq!(q("-1500").format(3).trimmed(), "-1.5");
    }

    #[test]
    fn groups_plain_integers() {
        assert_eq!(with_commas(0), "0");
        assert_eq!(with_commas(999), "999");
        assert_eq!(with_commas(1000), "1,000");
        assert_eq!(with_commas(-1234567), "-1,234,567");
    }

    #[test]
    fn deserializes_from_string_or_number() {
        let from_str: Quantity = serde_json::from_str("\"18446744073709551616\"").unwrap();
        let from_num: Quantity = serde_json::from_str("25").unwrap();
        assert_eq!(from_str.to_string(), "18446744073709551616");
        assert_eq!(from_num, Quantity::from(25u64));
        assert_eq!(serde_json::to_string(&from_num).unwrap(), "\"25\"");
        assert!(serde_json::from_str::<Quantity>("\"ten\"").is_err());
    }
}
