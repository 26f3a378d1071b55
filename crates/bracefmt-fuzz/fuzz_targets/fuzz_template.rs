#![no_main]
use libfuzzer_sys::fuzz_target;

use bracefmt_core::build;

fuzz_target!(|data: &[u8]| {
    // Arbitrary byte soup as a template: rendering must terminate and
    // never panic, whatever bracket noise the scanner encounters.
    let template = String::from_utf8_lossy(data).into_owned();

    let formatter = build!(template.clone(), -1i64, 255u64, 1234.5678f64, "arg", true, 'x');
    let _ = formatter.render_to_string();

    // Zero-argument path: every placeholder is out of range.
    let empty = build!(template);
    let _ = empty.render_to_string();
});
