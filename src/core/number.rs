//! Validated UK VAT number type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::checksum::Algorithm;
use super::digits::{VAT_DIGIT_COUNT, extract_digits};
use super::error::VatError;
use super::validate::classify;

/// A nine-digit UK VAT number whose check digits have been verified.
///
/// `Display` uses the HMRC grouping `123 4567 89`; the alternate form
/// (`{:#}`) adds the `GB` prefix.
///
/// ```rust
/// use vatvalidate::VatNumber;
///
/// let vat: VatNumber = "GB163040349".parse().unwrap();
/// assert_eq!(vat.to_string(), "163 0403 49");
/// assert_eq!(format!("{vat:#}"), "GB 163 0403 49");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VatNumber {
    digits: [u8; VAT_DIGIT_COUNT],
    algorithm: Algorithm,
}

impl VatNumber {
    /// Parse and validate a VAT number from free-form input.
    ///
    /// # Errors
    ///
    /// [`VatError::InvalidDigitCount`] if the input does not contain exactly
    /// nine digits, [`VatError::ChecksumMismatch`] if the check digits are wrong.
    pub fn parse(input: &str) -> Result<Self, VatError> {
        let extracted = extract_digits(input);
        let digits = <[u8; VAT_DIGIT_COUNT]>::try_from(extracted.as_slice()).map_err(|_| {
            VatError::InvalidDigitCount {
                found: extracted.len(),
            }
        })?;
        let (_, algorithm) = classify(&digits)?;
        Ok(Self { digits, algorithm })
    }

    /// The nine digits.
    pub fn digits(&self) -> &[u8; VAT_DIGIT_COUNT] {
        &self.digits
    }

    /// The algorithm the check digits satisfy.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The nine digits without separators, e.g. "163040349".
    pub fn compact(&self) -> String {
        self.digits.iter().map(|d| char::from(b'0' + d)).collect()
    }
}

impl FromStr for VatNumber {
    type Err = VatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let compact = self.compact();
        if f.alternate() {
            f.write_str("GB ")?;
        }
        write!(f, "{} {} {}", &compact[..3], &compact[3..7], &compact[7..])
    }
}

impl Serialize for VatNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.compact())
    }
}

impl<'de> Deserialize<'de> for VatNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
