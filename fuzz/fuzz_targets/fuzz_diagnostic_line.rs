#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(output) = std::str::from_utf8(data) {
        // Arbitrary checker output must never panic the parser or extractor
        let _ = mypy_missing_imports::missing_imports_from_output(output);
    }
});
