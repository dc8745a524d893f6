#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz tool config parsing - this should never panic
        let _ = toml::from_str::<mypy_missing_imports::Config>(content);
    }
});
