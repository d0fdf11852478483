use thiserror::Error;

/// Errors that can occur while validating a UK VAT number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VatError {
    /// The input did not contain exactly nine digits.
    #[error("expected 9 digits, found {found}")]
    InvalidDigitCount {
        /// Number of digits extracted from the input.
        found: usize,
    },

    /// Nine digits were found but the check digits match neither
    /// the modulus 97 nor the modulus 97-55 algorithm.
    #[error("check digits {actual:?} do not match modulus 97 ({mod97:?}) or modulus 97-55 ({mod9755:?})")]
    ChecksumMismatch {
        /// Weighted sum of the first seven digits.
        weighted_sum: u32,
        /// The trailing two digits of the input.
        actual: [u8; 2],
        /// Check digits expected by the modulus 97 algorithm.
        mod97: [u8; 2],
        /// Check digits expected by the modulus 97-55 algorithm.
        mod9755: [u8; 2],
    },
}
