//! Workflow fixtures.

/// Job-level grant, nothing at root.
pub const WORKFLOW_CORRECT: &str = r#"name: CodeQL
on: push
jobs:
  analyze:
    permissions:
      security-events: write
    steps:
      - uses: actions/checkout@v4
      - uses: github/codeql-action/analyze@v3
"#;

/// Root-level grant and a job with none of its own.
pub const WORKFLOW_ROOT_WRITE: &str = r#"name: CodeQL
on: push
permissions:
  security-events: write
jobs:
  analyze:
    steps:
      - uses: github/codeql-action/analyze@v3
"#;

/// Job grants only `read`.
pub const WORKFLOW_READ_ONLY: &str = r#"name: CodeQL
on: push
jobs:
  analyze:
    permissions:
      security-events: read
    steps:
      - uses: github/codeql-action/analyze@v3
"#;

/// No CodeQL analyze step anywhere.
pub const WORKFLOW_UNRELATED: &str = r#"name: CI
on: push
permissions:
  security-events: write
jobs:
  build:
    steps:
      - uses: actions/checkout@v4
      - run: cargo test
"#;

/// Syntactically broken YAML.
pub const WORKFLOW_BROKEN: &str = "jobs:\n  analyze: [unclosed\n";
