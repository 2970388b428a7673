use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical dotted field path used in decisions and reason strings.
///
/// Normalization rules are intentionally simple and deterministic:
/// - segments joined with `.`
/// - no leading or trailing dots
/// - list indices are rendered by callers as `path[i]`, never stored here
///
/// Annotation names contain dots themselves, so `metadata.annotations.<name>`
/// access goes through a dedicated document accessor rather than this type.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let v = s.as_ref().trim_matches('.').to_string();
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Non-empty path segments in traversal order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.').filter(|s| !s.is_empty())
    }

    pub fn join(&self, segment: &str) -> FieldPath {
        if self.0.is_empty() {
            FieldPath::new(segment)
        } else {
            FieldPath(format!("{}.{}", self.0, segment))
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldPath {
    fn from(value: &str) -> Self {
        FieldPath::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_leading_and_trailing_dots() {
        assert_eq!(FieldPath::new(".spec.type.").as_str(), "spec.type");
    }

    #[test]
    fn segments_skip_empty_runs() {
        let path = FieldPath::new("spec..targetNamespace");
        let segs: Vec<&str> = path.segments().collect();
        assert_eq!(segs, vec!["spec", "targetNamespace"]);
    }

    #[test]
    fn join_appends_segment() {
        let path = FieldPath::new("spec").join("hostnames");
        assert_eq!(path.as_str(), "spec.hostnames");
        assert_eq!(FieldPath::new("").join("spec").as_str(), "spec");
    }

    #[test]
    fn display_matches_as_str() {
        let path = FieldPath::new("spec.serviceAccountName");
        assert_eq!(format!("{path}"), "spec.serviceAccountName");
    }
}
