//! Fuzz target for document path traversal.
//!
//! Goal: traversal over arbitrary documents with arbitrary paths should
//! **never panic**; malformed input must read as absent.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_document_path
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use vapguard_domain::document::Document;
use vapguard_types::FieldPath;

fuzz_target!(|input: (&str, &str, &str)| {
    let (json_text, path_text, annotation) = input;

    let Ok(value) = serde_json::from_str::<serde_json::Value>(json_text) else {
        return;
    };

    let doc = Document::new(value);
    let path = FieldPath::new(path_text);

    let _ = doc.get(&path);
    let _ = doc.get_str(&path);
    let _ = doc.list(&path);
    let _ = doc.annotation(annotation);
});
