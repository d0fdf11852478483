//! Modulus 97 and modulus 97-55 check-digit arithmetic.
//!
//! HMRC issues VAT numbers from two ranges. Both weight the first seven
//! digits 8 down to 2 and derive the last two digits as `97 - (sum mod 97)`;
//! the newer range adds 55 to the sum first.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::digits::VAT_DIGIT_COUNT;
use super::error::VatError;

const MODULUS: u32 = 97;

/// Weights applied to the first seven digits.
const WEIGHTS: [u32; 7] = [8, 7, 6, 5, 4, 3, 2];

/// Check-digit algorithm variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Original range: no offset.
    Mod97,
    /// Range issued from November 2009: 55 is added before reducing.
    Mod9755,
}

impl Algorithm {
    /// Both variants in the order they are tried.
    pub const ALL: [Algorithm; 2] = [Algorithm::Mod97, Algorithm::Mod9755];

    /// Constant added to the weighted sum before reducing modulo 97.
    pub const fn offset(self) -> u32 {
        match self {
            Self::Mod97 => 0,
            Self::Mod9755 => 55,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mod97 => f.write_str("modulus 97"),
            Self::Mod9755 => f.write_str("modulus 97-55"),
        }
    }
}

/// Weighted sum of the first seven digits of a nine-digit VAT number.
///
/// # Errors
///
/// Returns [`VatError::InvalidDigitCount`] unless `digits` has exactly nine
/// elements.
pub fn weighted_sum(digits: &[u8]) -> Result<u32, VatError> {
    if digits.len() != VAT_DIGIT_COUNT {
        return Err(VatError::InvalidDigitCount {
            found: digits.len(),
        });
    }

    Ok(digits
        .iter()
        .zip(WEIGHTS)
        .map(|(&d, w)| u32::from(d) * w)
        .sum())
}

/// Check digits that `algorithm` expects for the given weighted sum.
///
/// The value `97 - (sum mod 97)` lies in `1..=97` and is split into two
/// decimal digits, so a remainder of zero yields `[9, 7]`.
pub fn expected_check_digits(weighted_sum: u32, algorithm: Algorithm) -> [u8; 2] {
    let remainder = (weighted_sum % MODULUS + algorithm.offset()) % MODULUS;
    let expected = MODULUS - remainder;
    [(expected / 10) as u8, (expected % 10) as u8]
}

/// Compare the trailing two digits against the check digits `algorithm`
/// derives from `weighted_sum`.
///
/// Returns `false` when `digits` has fewer than two elements.
pub fn check_modulus(weighted_sum: u32, digits: &[u8], algorithm: Algorithm) -> bool {
    let [.., tens, units] = digits else {
        return false;
    };
    expected_check_digits(weighted_sum, algorithm) == [*tens, *units]
}
