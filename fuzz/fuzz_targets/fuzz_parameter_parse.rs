//! Fuzz target for parameter document parsing.
//!
//! Goal: The parsers should **never panic** on any input.
//! They may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_parameter_parse
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only test valid UTF-8 strings (manifests must be UTF-8)
    if let Ok(text) = std::str::from_utf8(data) {
        // YAML parameter parsing - should never panic
        if let Ok(doc) = vapguard_params::parse_parameter_yaml(text) {
            // Validation must also hold up on anything that parsed
            let _ = vapguard_params::validate_parameter(&doc);
        }

        // JSON parameter parsing - should never panic
        if let Ok(doc) = vapguard_params::parse_parameter_json(text) {
            let _ = vapguard_params::validate_parameter(&doc);
        }
    }
});
