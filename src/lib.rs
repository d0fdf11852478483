//! # vatvalidate
//!
//! Check-digit validation for UK VAT registration numbers.
//!
//! Digits are pulled out of arbitrary input (prefixes, spaces, punctuation
//! and anything else are ignored). A valid number has exactly nine digits
//! whose last two match either the modulus 97 or the modulus 97-55
//! algorithm. No network lookup is made: a valid checksum does not mean the
//! number is registered to anyone.
//!
//! ## Quick Start
//!
//! ```rust
//! use vatvalidate::*;
//!
//! assert!(validate("GB 1630 403 49"));
//! assert!(!validate("GB123456789"));
//!
//! let digits = extract_digits("GB 1630 403 49");
//! let sum = weighted_sum(&digits).unwrap();
//! assert_eq!(sum, 90);
//! assert!(!check_modulus(sum, &digits, Algorithm::Mod97));
//! assert!(check_modulus(sum, &digits, Algorithm::Mod9755));
//!
//! let vat: VatNumber = "GB163040349".parse().unwrap();
//! assert_eq!(format!("{vat:#}"), "GB 163 0403 49");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Digit extraction, checksums, `validate`, `VatNumber` |
//! | `all` | Everything |
//!
//! ## Logging
//!
//! Decisions are reported through [`tracing`] at `trace` and `debug` level.
//! The crate never installs a subscriber.

#[cfg(feature = "core")]
pub mod core;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
