//! Property tests for the permission rules.

use std::collections::BTreeSet;
use std::path::Path;

use proptest::prelude::*;

use codeql_perms::report::NullSink;
use codeql_perms::{Validator, ValidatorOptions};

fn job_names() -> impl Strategy<Value = BTreeSet<String>> {
    proptest::collection::btree_set("job-[a-z0-9]{0,8}", 1..6)
}

fn permission_value() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("write"),
        Just("read"),
        Just("none"),
        Just("Write"),
    ]
}

fn workflow(root: Option<&str>, jobs: &BTreeSet<String>, uses: &str, grant: Option<&str>) -> String {
    let mut out = String::from("on: push\n");
    if let Some(value) = root {
        out.push_str(&format!("permissions:\n  security-events: {value}\n"));
    }
    out.push_str("jobs:\n");
    for job in jobs {
        out.push_str(&format!("  {job}:\n"));
        if let Some(value) = grant {
            out.push_str(&format!("    permissions:\n      security-events: {value}\n"));
        }
        out.push_str(&format!("    steps:\n      - uses: {uses}\n"));
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A workflow without the analyze action yields no diagnostics,
    /// whatever its permissions say.
    #[test]
    fn property_irrelevant_workflow_is_silent(
        jobs in job_names(),
        root in proptest::option::of(permission_value()),
        grant in proptest::option::of(permission_value()),
    ) {
        let content = workflow(root, &jobs, "actions/checkout@v4", grant);
        let validator = Validator::new(ValidatorOptions::default());
        let report = validator.validate_source(Path::new("ci.yml"), &content, &mut NullSink);
        prop_assert!(!report.is_relevant());
        prop_assert_eq!(report.errors(), 0);
    }

    /// PROPERTY: With a job-level write grant and nothing at root, every job is confirmed.
    #[test]
    fn property_job_level_write_confirms_every_job(jobs in job_names()) {
        let content = workflow(None, &jobs, "github/codeql-action/analyze@v3", Some("write"));
        let validator = Validator::new(ValidatorOptions::default());
        let report = validator.validate_source(Path::new("codeql.yml"), &content, &mut NullSink);
        prop_assert_eq!(report.errors(), 0);
        prop_assert_eq!(report.confirmed_jobs.len(), jobs.len());
    }

    /// PROPERTY: Error count is one per non-write job, plus one for a root write.
    #[test]
    fn property_error_count_matches_rules(
        jobs in job_names(),
        root in proptest::option::of(permission_value()),
        grant in proptest::option::of(permission_value()),
    ) {
        let content = workflow(root, &jobs, "github/codeql-action/analyze@v3", grant);
        let validator = Validator::new(ValidatorOptions::default());
        let report = validator.validate_source(Path::new("codeql.yml"), &content, &mut NullSink);

        let root_errors = usize::from(root == Some("write"));
        let job_errors = if grant == Some("write") { 0 } else { jobs.len() };
        prop_assert_eq!(report.errors(), root_errors + job_errors);
    }

    /// PROPERTY: Validating the same text twice gives the same report.
    #[test]
    fn property_validation_is_idempotent(
        jobs in job_names(),
        root in proptest::option::of(permission_value()),
        grant in proptest::option::of(permission_value()),
    ) {
        let content = workflow(root, &jobs, "github/codeql-action/analyze@v3", grant);
        let validator = Validator::new(ValidatorOptions::default());
        let path = Path::new("codeql.yml");
        let first = validator.validate_source(path, &content, &mut NullSink);
        let second = validator.validate_source(path, &content, &mut NullSink);
        prop_assert_eq!(first, second);
    }
}
