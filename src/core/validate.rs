//! Top-level VAT number validation.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::checksum::{Algorithm, check_modulus, expected_check_digits, weighted_sum};
use super::digits::extract_digits;
use super::error::VatError;

/// Detailed outcome of checking a VAT number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Whether the check digits are valid under either algorithm.
    pub valid: bool,
    /// Digits extracted from the input.
    pub digits: Vec<u8>,
    /// Weighted sum of the first seven digits, if nine digits were found.
    pub weighted_sum: Option<u32>,
    /// The algorithm whose check digits matched.
    pub algorithm: Option<Algorithm>,
    /// If not valid, the reason why.
    pub reason: Option<String>,
}

/// Validate a UK VAT number.
///
/// Digits are extracted from `vat_number` ignoring everything else, so
/// prefixes, spacing and punctuation do not matter. Exactly nine digits are
/// required. The check digits are tried against modulus 97 first and
/// modulus 97-55 second.
///
/// ```rust
/// use vatvalidate::validate;
///
/// assert!(validate("GB 1630 403 49"));
/// assert!(!validate("GB123456789"));
/// assert!(!validate("Not a VAT Number"));
/// ```
pub fn validate(vat_number: &str) -> bool {
    classify(&extract_digits(vat_number)).is_ok()
}

/// Check a UK VAT number and report how the decision was reached.
///
/// Same decision as [`validate`], with the intermediate values kept.
pub fn check(vat_number: &str) -> CheckResult {
    let digits = extract_digits(vat_number);

    match classify(&digits) {
        Ok((sum, algorithm)) => CheckResult {
            valid: true,
            digits,
            weighted_sum: Some(sum),
            algorithm: Some(algorithm),
            reason: None,
        },
        Err(e) => {
            let weighted_sum = match &e {
                VatError::ChecksumMismatch { weighted_sum, .. } => Some(*weighted_sum),
                _ => None,
            };
            CheckResult {
                valid: false,
                digits,
                weighted_sum,
                algorithm: None,
                reason: Some(e.to_string()),
            }
        }
    }
}

/// Find the algorithm whose check digits match `digits`, along with the
/// weighted sum it was decided on.
pub(crate) fn classify(digits: &[u8]) -> Result<(u32, Algorithm), VatError> {
    trace!(count = digits.len(), "extracted VAT digits");
    let sum = weighted_sum(digits)?;

    if let Some(algorithm) = Algorithm::ALL
        .into_iter()
        .find(|&a| check_modulus(sum, digits, a))
    {
        debug!(weighted_sum = sum, %algorithm, "VAT check digits matched");
        return Ok((sum, algorithm));
    }

    debug!(weighted_sum = sum, "VAT check digits matched no algorithm");
    Err(VatError::ChecksumMismatch {
        weighted_sum: sum,
        actual: [digits[7], digits[8]],
        mod97: expected_check_digits(sum, Algorithm::Mod97),
        mod9755: expected_check_digits(sum, Algorithm::Mod9755),
    })
}
