//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Subset-match algebra (monotonicity, extra-field tolerance)
//! - Document path traversal robustness
//! - Order independence of field-equality outcomes

use crate::checks::utils::subset_matches;
use crate::document::Document;
use crate::engine::evaluate;
use crate::policy::{CheckSpec, PolicySpec};
use crate::test_support::{found, resource};
use proptest::prelude::*;
use serde_json::{json, Map, Value as JsonValue};
use vapguard_types::{ids, FieldPath, Verdict};

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Strategy for short field names.
fn arb_field_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-zA-Z0-9]{0,8}").unwrap()
}

/// Strategy for scalar JSON values.
fn arb_scalar() -> impl Strategy<Value = JsonValue> {
    prop_oneof![
        prop::string::string_regex("[a-z0-9.-]{0,12}")
            .unwrap()
            .prop_map(JsonValue::from),
        any::<i32>().prop_map(JsonValue::from),
        any::<bool>().prop_map(JsonValue::from),
    ]
}

/// Strategy for flat string-keyed maps (pattern/candidate entries).
fn arb_entry() -> impl Strategy<Value = Map<String, JsonValue>> {
    prop::collection::btree_map(arb_field_name(), arb_scalar(), 0..5)
        .prop_map(|m| m.into_iter().collect())
}

/// Strategy for arbitrary JSON documents of bounded depth.
fn arb_json() -> impl Strategy<Value = JsonValue> {
    let leaf = prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::from),
        any::<i64>().prop_map(JsonValue::from),
        prop::string::string_regex("[a-zA-Z0-9._/-]{0,16}")
            .unwrap()
            .prop_map(JsonValue::from),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(JsonValue::from),
            prop::collection::btree_map(arb_field_name(), inner, 0..4)
                .prop_map(|m| JsonValue::Object(m.into_iter().collect())),
        ]
    })
}

/// Strategy for arbitrary dotted path strings, including degenerate ones.
fn arb_path() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9._]{0,24}").unwrap()
}

// ============================================================================
// Property tests: subset-match algebra
// ============================================================================

fn entry_passes(candidate: &Map<String, JsonValue>, patterns: &[Map<String, JsonValue>]) -> bool {
    patterns.iter().any(|p| subset_matches(p, candidate))
}

proptest! {
    /// Adding a pattern can only turn failing candidates into passing ones,
    /// never the reverse.
    #[test]
    fn subset_match_is_monotonic_in_pattern_set(
        candidate in arb_entry(),
        patterns in prop::collection::vec(arb_entry(), 0..4),
        extra in arb_entry(),
    ) {
        let before = entry_passes(&candidate, &patterns);

        let mut extended = patterns.clone();
        extended.push(extra);
        let after = entry_passes(&candidate, &extended);

        prop_assert!(
            !before || after,
            "candidate passed with {} patterns but failed with {}",
            patterns.len(),
            extended.len()
        );
    }

    /// Extra candidate attributes never disqualify a match.
    #[test]
    fn subset_match_ignores_extra_candidate_fields(
        pattern in arb_entry(),
        candidate in arb_entry(),
        extra_key in arb_field_name(),
        extra_value in arb_scalar(),
    ) {
        prop_assume!(!pattern.contains_key(&extra_key));

        let before = subset_matches(&pattern, &candidate);

        let mut widened = candidate.clone();
        widened.insert(extra_key, extra_value);
        let after = subset_matches(&pattern, &widened);

        prop_assert!(
            !before || after,
            "adding a field the pattern does not declare flipped a match"
        );
    }

    /// A pattern whose fields are a subset of the candidate's (with equal
    /// values) always matches.
    #[test]
    fn subset_match_accepts_literal_subsets(candidate in arb_entry()) {
        let mut pattern = Map::new();
        for (k, v) in candidate.iter().take(2) {
            pattern.insert(k.clone(), v.clone());
        }
        prop_assert!(subset_matches(&pattern, &candidate));
    }
}

// ============================================================================
// Property tests: document traversal robustness
// ============================================================================

proptest! {
    /// Traversal should **never panic** on any document/path combination; it
    /// may only report absence.
    #[test]
    fn document_traversal_never_panics(value in arb_json(), path in arb_path()) {
        let doc = Document::new(value);
        let path = FieldPath::new(path);
        let _ = doc.get(&path);
        let _ = doc.get_str(&path);
        let _ = doc.list(&path);
        let _ = doc.annotation("toolkit.fluxcd.io/tenant");
    }
}

// ============================================================================
// Property tests: field-equality ordering
// ============================================================================

static CHAIN_AB: &[CheckSpec] = &[
    CheckSpec::FieldEquality {
        path: "spec.targetNamespace",
        param_path: "targetNamespace",
    },
    CheckSpec::FieldEquality {
        path: "spec.serviceAccountName",
        param_path: "serviceAccountName",
    },
];

static CHAIN_BA: &[CheckSpec] = &[
    CheckSpec::FieldEquality {
        path: "spec.serviceAccountName",
        param_path: "serviceAccountName",
    },
    CheckSpec::FieldEquality {
        path: "spec.targetNamespace",
        param_path: "targetNamespace",
    },
];

fn policy_with_chain(chain: &'static [CheckSpec]) -> PolicySpec {
    PolicySpec {
        id: ids::POLICY_KUSTOMIZATION_REQUIRED_FIELDS,
        kind: "Kustomization",
        requires_parameter: true,
        chain,
    }
}

proptest! {
    /// Check order affects which reason is reported, never the verdict.
    #[test]
    fn field_equality_outcome_is_order_independent(
        target in prop::option::of(prop::string::string_regex("[a-z]{1,8}").unwrap()),
        account in prop::option::of(prop::string::string_regex("[a-z]{1,8}").unwrap()),
    ) {
        let mut spec = Map::new();
        if let Some(t) = &target {
            spec.insert("targetNamespace".to_string(), json!(t));
        }
        if let Some(a) = &account {
            spec.insert("serviceAccountName".to_string(), json!(a));
        }
        let r = resource("Kustomization", "ns1", json!({"spec": spec}));
        let params = found(
            "ns1",
            json!({"targetNamespace": "app", "serviceAccountName": "deployer"}),
        );

        let ab = evaluate(&r, &params, &policy_with_chain(CHAIN_AB));
        let ba = evaluate(&r, &params, &policy_with_chain(CHAIN_BA));

        prop_assert_eq!(ab.verdict, ba.verdict);

        // When both fields fail, the first declared field's reason surfaces.
        if ab.verdict == Verdict::Deny && target.as_deref() != Some("app") {
            prop_assert!(ab.reason().starts_with("spec.targetNamespace"));
        }
    }
}
