//! Digit extraction from free-form VAT number input.

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Number of digits in a UK VAT registration number.
pub const VAT_DIGIT_COUNT: usize = 9;

/// Return the decimal digits found in `input`, in the order they appear.
///
/// Any Unicode decimal digit (general category `Nd`) counts, so fullwidth
/// and Arabic-Indic digits are read as their values. Everything else
/// (letters, whitespace, punctuation, emoji, superscripts, fractions) is
/// skipped. Never fails; an input without digits yields an empty vector.
///
/// ```rust
/// use vatvalidate::extract_digits;
///
/// assert_eq!(extract_digits("GB 163 040 349"), vec![1, 6, 3, 0, 4, 0, 3, 4, 9]);
/// assert_eq!(extract_digits("GB１６３"), vec![1, 6, 3]);
/// assert!(extract_digits("Not a VAT Number").is_empty());
/// ```
pub fn extract_digits(input: &str) -> Vec<u8> {
    input.chars().filter_map(decimal_value).collect()
}

fn is_decimal_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}

/// Value of a decimal digit in any script.
///
/// `Nd` characters are encoded in contiguous runs of ten, zero first, and
/// adjacent runs start on a multiple of ten from the first one. The value
/// is the distance from the start of the contiguous block, modulo 10.
fn decimal_value(c: char) -> Option<u8> {
    if let Some(d) = c.to_digit(10) {
        return Some(d as u8);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let cp = u32::from(c);
    let offset = (1..=cp)
        .map_while(|back| char::from_u32(cp - back))
        .take_while(|&prev| is_decimal_digit(prev))
        .count();
    Some((offset % 10) as u8)
}
