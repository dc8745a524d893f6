//! Canned checker output used across CLI tests.

/// Two unresolved packages plus noise that must be ignored.
pub const CHECKER_OUTPUT_MISSING: &str = "\
app/main.py:1: error: Cannot find implementation or library stub for module named 'yaml' [import]
app/main.py:2: error: Skipping analyzing 'google.protobuf': found module but no type hints or library stubs [import]
app/main.py:2: note: See https://mypy.readthedocs.io/en/stable/running_mypy.html#missing-imports
app/main.py:3: error: Skipping analyzing \"google\": found module but no type hints or library stubs [import]
app/main.py:9: error: Incompatible types in assignment (expression has type \"int\", variable has type \"str\") [assignment]
";

/// A clean run.
pub const CHECKER_OUTPUT_CLEAN: &str = "Success: no issues found in 4 source files\n";

/// What the preview prints for `CHECKER_OUTPUT_MISSING`.
pub const PREVIEW_INI: &str = "\
[mypy-google.*]
ignore_missing_imports = true

[mypy-yaml.*]
ignore_missing_imports = true

";
