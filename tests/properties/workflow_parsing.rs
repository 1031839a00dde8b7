//! Property tests for workflow parsing.

use std::path::Path;

use proptest::prelude::*;

use codeql_perms::report::NullSink;
use codeql_perms::{Validator, ValidatorOptions, WorkflowDocument};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary text never panics.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,256}") {
        if let Ok(Some(doc)) = WorkflowDocument::parse(&s) {
            let _ = doc.permissions();
            let _ = doc.jobs();
        }
    }

    /// PROPERTY: Validating arbitrary text never panics and every error is a diagnostic.
    #[test]
    fn property_validate_never_panics(s in "(?s).{0,256}") {
        let validator = Validator::new(ValidatorOptions::default());
        let report = validator.validate_source(Path::new("fuzz.yml"), &s, &mut NullSink);
        prop_assert_eq!(report.errors(), report.diagnostics.len());
    }

    /// PROPERTY: YAML-ish input built from workflow tokens never panics.
    #[test]
    fn property_workflow_shaped_input_never_panics(
        lines in proptest::collection::vec(
            prop_oneof![
                Just("jobs:".to_string()),
                Just("  analyze:".to_string()),
                Just("    permissions: write-all".to_string()),
                Just("    permissions:".to_string()),
                Just("      security-events: write".to_string()),
                Just("permissions:".to_string()),
                Just("  security-events: read".to_string()),
                Just("    steps:".to_string()),
                Just("      - uses: github/codeql-action/analyze@v3".to_string()),
                Just("      - uses: [1, 2]".to_string()),
                Just("      - run: echo".to_string()),
                Just("    steps: nope".to_string()),
                Just("- item".to_string()),
            ],
            0..16,
        )
    ) {
        let content = lines.join("\n");
        let validator = Validator::new(ValidatorOptions::default());
        let _ = validator.validate_source(Path::new("w.yml"), &content, &mut NullSink);
    }
}
