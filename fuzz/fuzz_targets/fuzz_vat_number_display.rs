#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Display output must parse back to the same number.
        if let Ok(vat) = vatvalidate::VatNumber::parse(s) {
            let shown = format!("{vat:#}");
            assert_eq!(vatvalidate::VatNumber::parse(&shown).ok(), Some(vat));
        }
    }
});
