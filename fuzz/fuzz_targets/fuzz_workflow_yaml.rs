#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

use codeql_perms::report::NullSink;
use codeql_perms::{Validator, ValidatorOptions};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Arbitrary workflow text must become diagnostics, never a panic
        let validator = Validator::new(ValidatorOptions::default());
        let _ = validator.validate_source(Path::new("fuzz.yml"), content, &mut NullSink);
    }
});
