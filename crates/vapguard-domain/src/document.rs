use serde_json::Value as JsonValue;
use vapguard_types::FieldPath;

/// Read-only view over a decoded request payload.
///
/// All accessors distinguish "path absent" from "present and empty/false".
/// Traversing through a non-map segment reads as absent: malformed input
/// fails a match, it never panics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document(JsonValue);

impl Document {
    pub fn new(value: JsonValue) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &JsonValue {
        &self.0
    }

    /// Value at `path`. `None` when any segment is missing or a non-map is
    /// traversed. An explicit `null` is reported as present here; the scalar
    /// accessors below treat it as absent.
    pub fn get(&self, path: &FieldPath) -> Option<&JsonValue> {
        let mut current = &self.0;
        for segment in path.segments() {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// String at `path`; `None` when absent, `null`, or not a string.
    pub fn get_str(&self, path: &FieldPath) -> Option<&str> {
        self.get(path)?.as_str()
    }

    /// List at `path`: `None` when absent (or not a list), `Some(&[])` when
    /// present but empty. Callers must treat these differently per rule.
    pub fn list(&self, path: &FieldPath) -> Option<&[JsonValue]> {
        self.get(path)?.as_array().map(Vec::as_slice)
    }

    /// `metadata.annotations.<name>`. Annotation names contain dots, so this
    /// is a dedicated accessor rather than dotted-path traversal.
    pub fn annotation(&self, name: &str) -> Option<&str> {
        self.0
            .get("metadata")?
            .get("annotations")?
            .get(name)?
            .as_str()
    }
}

impl From<JsonValue> for Document {
    fn from(value: JsonValue) -> Self {
        Document::new(value)
    }
}
