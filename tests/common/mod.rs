//! Common test utilities for codeql-perms CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory with a `.github/workflows` tree
//! - Fixtures: Workflow documents shared across tests

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
