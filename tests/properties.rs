//! Property tests for codeql-perms.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "never panics" and "same input, same report".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/workflow_parsing.rs"]
mod workflow_parsing;

#[path = "properties/permission_rules.rs"]
mod permission_rules;
