#![no_main]
use libfuzzer_sys::fuzz_target;

use bracefmt_core::{GENERIC_SPECIFIER, parse_directive};

fuzz_target!(|data: &[u8]| {
    let body = String::from_utf8_lossy(data);

    // The scanner is total: any body yields a directive without panicking.
    let directive = parse_directive(&body);

    // The captured specifier is either the default or a letter that
    // actually appears in the body.
    assert!(
        directive.specifier == GENERIC_SPECIFIER
            || (directive.specifier.is_alphabetic() && body.contains(directive.specifier))
    );
});
