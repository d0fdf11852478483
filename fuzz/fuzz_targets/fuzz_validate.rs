#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic, and all entry points must agree.
        let valid = vatvalidate::validate(s);
        assert_eq!(valid, vatvalidate::check(s).valid);
        assert_eq!(valid, vatvalidate::VatNumber::parse(s).is_ok());
    }
});
