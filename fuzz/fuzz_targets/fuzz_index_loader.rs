#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Malformed index sources must be rejected with an error, never a panic
    let _ = wort::Index::parse(data);
});
