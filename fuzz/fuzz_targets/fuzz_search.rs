#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // First line is the search term, the rest is the index source.
    // Any term searched against any loadable index must resolve to a
    // valid entry number without panicking.
    let Some((term, source)) = data.split_once('\n') else {
        return;
    };

    if let Ok(index) = wort::Index::parse(source.as_bytes()) {
        if !index.is_empty() {
            let pos = index.search(term).unwrap();
            assert!(pos < index.len());
        }
    }
});
