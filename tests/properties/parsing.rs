//! Property tests for diagnostic and ini parsing.

use proptest::prelude::*;

use mypy_missing_imports::{missing_imports_from_output, parse_line, IniDocument};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `parse_line` never panics on arbitrary input.
    #[test]
    fn property_parse_line_never_panics(line in "(?s).{0,200}") {
        let _ = parse_line(&line);
    }

    /// PROPERTY: `IniDocument::parse` never panics on arbitrary input.
    #[test]
    fn property_ini_parse_never_panics(text in "(?s).{0,256}") {
        let _ = IniDocument::parse(&text);
    }

    /// PROPERTY: a well-formed import diagnostic always yields its module.
    #[test]
    fn property_import_diagnostic_yields_module(
        file in "[a-z_/]{1,20}\\.py",
        line in 1u32..10_000,
        module in "[a-z][a-z0-9_]{0,8}(\\.[a-z][a-z0-9_]{0,8}){0,2}",
    ) {
        let output = format!(
            "{file}:{line}: error: Cannot find implementation or library stub for module named '{module}' [import]\n"
        );
        let found = missing_imports_from_output(&output);
        prop_assert_eq!(found.into_iter().collect::<Vec<_>>(), vec![module]);
    }
}
