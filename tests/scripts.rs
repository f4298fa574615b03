use std::{fs, path::Path};

use loxide::{error::Diagnostics, run};
use walkdir::WalkDir;

/// Reads a golden file as trimmed lines, or `None` when it does not exist.
fn read_golden(script: &Path, extension: &str) -> Option<Vec<String>> {
    let golden = script.with_extension(extension);
    let content = fs::read_to_string(&golden).ok()?;
    Some(content.lines().map(|l| l.trim_end().to_string()).collect())
}

#[test]
fn scripts_match_golden_tokens() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/scripts");
    let mut count = 0;

    for entry in
        WalkDir::new(&dir).sort_by_file_name()
                          .into_iter()
                          .filter_map(Result::ok)
                          .filter(|e| e.path().extension().is_some_and(|ext| ext == "lox"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut diagnostics = Diagnostics::default();
        let outcome = run(&source, &mut diagnostics);

        let expected_tokens =
            read_golden(path, "tokens").unwrap_or_else(|| panic!("Missing token file for {path:?}"));
        let actual_tokens: Vec<_> =
            outcome.tokens.iter().map(|t| t.to_string().trim_end().to_string()).collect();
        assert_eq!(actual_tokens, expected_tokens, "Token mismatch for {path:?}");

        let expected_diagnostics = read_golden(path, "diagnostics").unwrap_or_default();
        let actual_diagnostics: Vec<_> =
            diagnostics.entries().iter().map(ToString::to_string).collect();
        assert_eq!(actual_diagnostics,
                   expected_diagnostics,
                   "Diagnostic mismatch for {path:?}");
        assert_eq!(outcome.had_error, !expected_diagnostics.is_empty());

        count += 1;
    }

    assert!(count > 0, "No scripts found in {}", dir.display());
}
