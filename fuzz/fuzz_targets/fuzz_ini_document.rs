#![no_main]

use libfuzzer_sys::fuzz_target;
use mypy_missing_imports::{ConfigDocument, IniDocument, SECTION_SETTINGS};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(mut doc) = IniDocument::parse(text) else {
        return;
    };

    // Whatever parsed must render to something that parses again
    let _ = doc.add_to_section("mypy-fuzz.*", SECTION_SETTINGS);
    let rendered = doc.render();
    assert!(IniDocument::parse(&rendered).is_ok(), "re-parse failed:\n{rendered}");
});
