//! Property-based tests for digit extraction and check-digit validation.
//!
//! Run with: `cargo test --test proptest_tests`

#![cfg(feature = "core")]

use proptest::prelude::*;
use vatvalidate::*;

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// A string of ASCII digits only.
fn arb_digit_string() -> impl Strategy<Value = String> {
    "[0-9]{0,20}"
}

/// A single non-digit character: letters, punctuation, whitespace or emoji.
fn arb_noise() -> impl Strategy<Value = char> {
    any::<char>().prop_filter("must not be a decimal digit", |c| {
        extract_digits(&c.to_string()).is_empty()
    })
}

/// Seven arbitrary leading digits.
fn arb_body() -> impl Strategy<Value = [u8; 7]> {
    prop::array::uniform7(0u8..=9)
}

/// Append the check digits `algorithm` expects to `body`.
fn with_check_digits(body: [u8; 7], algorithm: Algorithm) -> [u8; 9] {
    let mut digits = [0u8; 9];
    digits[..7].copy_from_slice(&body);
    let sum = weighted_sum(&digits).unwrap();
    let [tens, units] = expected_check_digits(sum, algorithm);
    digits[7] = tens;
    digits[8] = units;
    digits
}

fn render(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

proptest! {
    /// Pure-digit input extracts to exactly those digits.
    #[test]
    fn pure_digits_extract_unchanged(s in arb_digit_string()) {
        let expected: Vec<u8> = s.bytes().map(|b| b - b'0').collect();
        prop_assert_eq!(extract_digits(&s), expected);
    }

    /// Fullwidth digits extract to the same values as ASCII digits.
    #[test]
    fn fullwidth_digits_extract_like_ascii(s in arb_digit_string()) {
        let fullwidth: String = s
            .chars()
            .filter_map(|c| char::from_u32(u32::from(c) - u32::from('0') + 0xFF10))
            .collect();
        prop_assert_eq!(extract_digits(&fullwidth), extract_digits(&s));
    }

    /// Inserting non-digit characters never changes the extraction.
    #[test]
    fn noise_is_ignored(
        s in arb_digit_string(),
        noise in prop::collection::vec((any::<prop::sample::Index>(), arb_noise()), 0..10),
    ) {
        let mut chars: Vec<char> = s.chars().collect();
        for (idx, c) in noise {
            let at = idx.index(chars.len() + 1);
            chars.insert(at, c);
        }
        let noisy: String = chars.into_iter().collect();
        prop_assert_eq!(extract_digits(&noisy), extract_digits(&s));
    }

    /// Anything that does not contain exactly nine digits is invalid.
    #[test]
    fn length_gate(digits in prop::collection::vec(0u8..=9, 0..20)) {
        prop_assume!(digits.len() != 9);
        prop_assert!(!validate(&render(&digits)));
        prop_assert_eq!(
            weighted_sum(&digits),
            Err(VatError::InvalidDigitCount { found: digits.len() })
        );
    }

    /// Check digits computed for either algorithm always validate.
    #[test]
    fn generated_numbers_validate(body in arb_body(), use_offset in any::<bool>()) {
        let algorithm = if use_offset { Algorithm::Mod9755 } else { Algorithm::Mod97 };
        let digits = with_check_digits(body, algorithm);
        let input = format!("GB{}", render(&digits));
        prop_assert!(validate(&input));
        prop_assert!(VatNumber::parse(&input).is_ok());
    }

    /// The weighted sum stays within the bounds of the weights.
    #[test]
    fn weighted_sum_bounds(digits in prop::array::uniform9(0u8..=9)) {
        let sum = weighted_sum(&digits).unwrap();
        prop_assert!(sum <= 315);
    }

    /// Expected check digits are always a pair in 01..=97.
    #[test]
    fn expected_pair_in_range(sum in 0u32..10_000, use_offset in any::<bool>()) {
        let algorithm = if use_offset { Algorithm::Mod9755 } else { Algorithm::Mod97 };
        let [tens, units] = expected_check_digits(sum, algorithm);
        let value = u32::from(tens) * 10 + u32::from(units);
        prop_assert!((1..=97).contains(&value));
        prop_assert_eq!(value, 97 - (sum + algorithm.offset()) % 97);
    }

    /// `validate` never panics and agrees with `check`.
    #[test]
    fn validate_total(s in ".*") {
        prop_assert_eq!(validate(&s), check(&s).valid);
    }
}
