//! End-to-end scenario tests using fixture manifests.
//!
//! Each fixture in `tests/fixtures/` (workspace root) contains:
//! - A resource.yaml (the candidate object)
//! - An optional parameter.yaml (the namespace-scoped policy parameter)
//! - An expected.decision.json with the expected verdict projection
//!
//! These tests resolve the policy from the resource kind, bind the parameter
//! in an in-memory store, run a review, and verify:
//! 1. The projected decision matches expected.decision.json exactly
//! 2. Contract reason templates survive as literal suffixes

use serde_json::{json, Value};
use std::path::PathBuf;
use vapguard_domain::model::ResourceModel;
use vapguard_domain::{registry, review};
use vapguard_params::{parse_parameter_yaml, InMemoryParameterStore};
use vapguard_types::Decision;

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("vapguard-params crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

fn read_fixture_file(fixture_name: &str, file: &str) -> Option<String> {
    let path = fixtures_dir().join(fixture_name).join(file);
    std::fs::read_to_string(path).ok()
}

/// Build the resource model from a fixture's resource.yaml.
fn load_resource(fixture_name: &str) -> ResourceModel {
    let text = read_fixture_file(fixture_name, "resource.yaml").expect("read resource.yaml");
    let doc: Value = serde_yaml::from_str(&text).expect("parse resource.yaml");

    let kind = doc["kind"].as_str().expect("resource kind").to_string();
    let namespace = doc["metadata"]["namespace"]
        .as_str()
        .unwrap_or_default()
        .to_string();

    ResourceModel::new(kind, namespace, doc)
}

/// Run the review for a fixture and return the decision.
fn run_fixture(fixture_name: &str) -> Decision {
    let resource = load_resource(fixture_name);
    let policy = registry::lookup_kind(&resource.kind)
        .unwrap_or_else(|| panic!("no policy registered for kind {}", resource.kind));

    let mut store = InMemoryParameterStore::new();
    if let Some(text) = read_fixture_file(fixture_name, "parameter.yaml") {
        let doc = parse_parameter_yaml(&text).expect("parse parameter.yaml");
        store.insert(policy.id, doc);
    }

    review(&resource, policy.id, &store).expect("policy id is registered")
}

/// The projection compared against expected.decision.json.
fn project(decision: &Decision) -> Value {
    json!({
        "policy_id": decision.policy_id,
        "verdict": decision.verdict,
        "reason": decision.reason(),
    })
}

fn load_expected(fixture_name: &str) -> Value {
    let text =
        read_fixture_file(fixture_name, "expected.decision.json").expect("read expected decision");
    serde_json::from_str(&text).expect("parse expected decision")
}

fn assert_fixture(fixture_name: &str) -> Decision {
    let decision = run_fixture(fixture_name);
    let actual = project(&decision);
    let expected = load_expected(fixture_name);
    assert_eq!(
        actual, expected,
        "decision mismatch for fixture '{fixture_name}'"
    );
    decision
}

// ============================================================================
// Fixture tests
// ============================================================================

#[test]
fn fixture_kustomization_clean_allows() {
    assert_fixture("kustomization_clean");
}

#[test]
fn fixture_kustomization_missing_target_denies_with_template_suffix() {
    let decision = assert_fixture("kustomization_missing_target");
    assert!(decision.reason().ends_with(
        "spec.targetNamespace must be set to the namespace specified \
         in the Validating Admission Policy parameter"
    ));
}

#[test]
fn fixture_kustomization_wrong_account_reports_expected_and_actual() {
    assert_fixture("kustomization_wrong_account");
}

#[test]
fn fixture_no_parameter_denies_any_resource() {
    let decision = assert_fixture("no_parameter");
    assert_eq!(decision.reason(), "no policy parameter found for namespace");
}

#[test]
fn fixture_parameter_invalid_denies_before_business_rules() {
    // The resource itself is compliant; the malformed parameter still denies.
    assert_fixture("parameter_invalid");
}

#[test]
fn fixture_service_type_defaulted_allows() {
    assert_fixture("service_type_defaulted");
}

#[test]
fn fixture_service_type_not_allowed_denies() {
    assert_fixture("service_type_not_allowed");
}

#[test]
fn fixture_httproute_extra_ref_attribute_allows() {
    assert_fixture("httproute_extra_ref_attribute");
}

#[test]
fn fixture_httproute_ref_missing_field_denies() {
    assert_fixture("httproute_ref_missing_field");
}

#[test]
fn fixture_httproute_hostname_not_allowed_denies_with_literal_message() {
    let decision = assert_fixture("httproute_hostname_not_allowed");
    assert!(decision.reason().ends_with(
        "spec.hostnames must be present and each item must be on the \
         spec.allowedHostnames list in the policy parameter"
    ));
}

#[test]
fn fixture_rolebinding_default_sa_denies() {
    assert_fixture("rolebinding_default_sa");
}

#[test]
fn fixture_rolebinding_named_sa_allows() {
    assert_fixture("rolebinding_named_sa");
}

#[test]
fn fixture_pod_hostpath_volume_denies() {
    assert_fixture("pod_hostpath_volume");
}

#[test]
fn fixture_pod_permitted_volumes_allows() {
    assert_fixture("pod_permitted_volumes");
}

#[test]
fn fixture_helmrelease_tenant_annotation_allows() {
    assert_fixture("helmrelease_tenant_annotation");
}

#[test]
fn fixture_helmrelease_tenant_mismatch_denies_with_template_suffix() {
    let decision = assert_fixture("helmrelease_tenant_mismatch");
    assert!(decision
        .reason()
        .ends_with("must be set to the namespace of the HelmRelease"));
}
