//! UK VAT number check-digit validation.
//!
//! Extracts digits from free-form input, computes the weighted sum of the
//! first seven, and checks the last two against the modulus 97 and
//! modulus 97-55 algorithms.

mod checksum;
mod digits;
mod error;
mod number;
mod validate;

pub use checksum::*;
pub use digits::*;
pub use error::*;
pub use number::*;
pub use validate::{CheckResult, check, validate};
