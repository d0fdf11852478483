use vatvalidate::*;

fn main() {
    // Check-digit validation (no network required)
    println!("=== UK VAT Number Validation ===\n");

    let inputs = [
        "GB 1630 403 49",
        "GB830927231",
        "GB/281/000-453",
        "GB123456789",  // wrong check digits
        "GB2834204846", // too long
        "Not a VAT Number",
    ];

    for input in &inputs {
        let result = check(input);
        match (result.algorithm, result.reason) {
            (Some(algorithm), _) => println!("  {input} => valid ({algorithm})"),
            (None, Some(reason)) => println!("  {input} => INVALID: {reason}"),
            (None, None) => println!("  {input} => INVALID"),
        }
    }

    // Parsing into a normalised VatNumber
    println!("\n=== Normalised Form ===\n");

    for input in &inputs {
        match input.parse::<VatNumber>() {
            Ok(vat) => println!("  {input} => {vat:#} (compact: {})", vat.compact()),
            Err(e) => println!("  {input} => {e}"),
        }
    }

    // Step by step
    println!("\n=== Step by Step ===\n");

    let digits = extract_digits("GB 1630 403 49");
    println!("  digits       = {digits:?}");
    match weighted_sum(&digits) {
        Ok(sum) => {
            println!("  weighted sum = {sum}");
            for algorithm in Algorithm::ALL {
                println!(
                    "  {algorithm}: expects {:?}, match = {}",
                    expected_check_digits(sum, algorithm),
                    check_modulus(sum, &digits, algorithm)
                );
            }
        }
        Err(e) => println!("  {e}"),
    }
}
