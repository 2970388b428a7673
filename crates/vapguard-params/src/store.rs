use crate::model::ParameterDoc;
use crate::validate::validate_parameter;
use std::collections::BTreeMap;
use vapguard_domain::model::{ParameterLookup, ParameterResult};

/// In-memory parameter store keyed by (policy id, namespace).
///
/// `insert` replaces any existing binding, which enforces the at-most-one
/// parameter invariant per (policy id, namespace) pair. Hosts with a live
/// object store implement `ParameterLookup` directly instead.
#[derive(Clone, Debug, Default)]
pub struct InMemoryParameterStore {
    entries: BTreeMap<(String, String), ParameterDoc>,
}

impl InMemoryParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a parameter document under `policy_id` in the document's own
    /// namespace. Returns the previous binding, if any.
    pub fn insert(&mut self, policy_id: &str, doc: ParameterDoc) -> Option<ParameterDoc> {
        let key = (policy_id.to_string(), doc.metadata.namespace.clone());
        self.entries.insert(key, doc)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl ParameterLookup for InMemoryParameterStore {
    fn resolve(&self, policy_id: &str, namespace: &str) -> ParameterResult {
        // Exact match only: no wildcard or default-namespace fallback.
        match self
            .entries
            .get(&(policy_id.to_string(), namespace.to_string()))
        {
            Some(doc) => validate_parameter(doc),
            None => ParameterResult::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParameterMeta;
    use serde_json::json;
    use vapguard_types::ids;

    fn doc(namespace: &str, spec: serde_json::Value) -> ParameterDoc {
        ParameterDoc {
            api_version: None,
            kind: None,
            metadata: ParameterMeta {
                name: "p".to_string(),
                namespace: namespace.to_string(),
                annotations: Default::default(),
            },
            spec,
        }
    }

    #[test]
    fn missing_binding_resolves_absent() {
        let store = InMemoryParameterStore::new();
        let result = store.resolve(ids::POLICY_SERVICE_ALLOWED_TYPES, "ns1");
        assert!(matches!(result, ParameterResult::Absent));
    }

    #[test]
    fn resolution_is_exact_on_namespace() {
        let mut store = InMemoryParameterStore::new();
        store.insert(
            ids::POLICY_SERVICE_ALLOWED_TYPES,
            doc("ns1", json!({"allowedTypes": ["ClusterIP"]})),
        );

        assert!(matches!(
            store.resolve(ids::POLICY_SERVICE_ALLOWED_TYPES, "ns1"),
            ParameterResult::Found(_)
        ));
        assert!(matches!(
            store.resolve(ids::POLICY_SERVICE_ALLOWED_TYPES, "ns2"),
            ParameterResult::Absent
        ));
        assert!(matches!(
            store.resolve(ids::POLICY_HTTPROUTE_ROUTE_BINDINGS, "ns1"),
            ParameterResult::Absent
        ));
    }

    #[test]
    fn insert_replaces_existing_binding() {
        let mut store = InMemoryParameterStore::new();
        store.insert(
            ids::POLICY_SERVICE_ALLOWED_TYPES,
            doc("ns1", json!({"allowedTypes": ["ClusterIP"]})),
        );
        let previous = store.insert(
            ids::POLICY_SERVICE_ALLOWED_TYPES,
            doc("ns1", json!({"allowedTypes": ["NodePort"]})),
        );

        assert!(previous.is_some());
        assert_eq!(store.len(), 1);

        match store.resolve(ids::POLICY_SERVICE_ALLOWED_TYPES, "ns1") {
            ParameterResult::Found(p) => {
                assert_eq!(
                    p.spec.as_value()["allowedTypes"][0],
                    serde_json::json!("NodePort")
                );
            }
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn malformed_binding_resolves_invalid() {
        let mut store = InMemoryParameterStore::new();
        store.insert(
            ids::POLICY_SERVICE_ALLOWED_TYPES,
            doc("ns1", json!("not-a-map")),
        );

        match store.resolve(ids::POLICY_SERVICE_ALLOWED_TYPES, "ns1") {
            ParameterResult::Invalid(reason) => assert_eq!(reason, "spec must be a map"),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }
}
