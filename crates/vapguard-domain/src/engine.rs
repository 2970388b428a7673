use crate::checks::{self, NO_PARAMETER_REASON};
use crate::fingerprint::fingerprint_for_decision;
use crate::model::{ParameterLookup, ParameterModel, ParameterResult, ResourceModel};
use crate::policy::PolicySpec;
use crate::registry;
use thiserror::Error;
use vapguard_types::{ids, lookup_explanation, Decision, DecisionRecord, Denial, Verdict};

/// Errors at the dispatch seam. Evaluation itself never fails: a rule that
/// cannot match produces a deny, not an error.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no policy registered under id {policy_id:?}")]
    UnknownPolicy { policy_id: String },
}

/// Evaluate one policy chain against one resource.
///
/// The parameter gate runs first: for a policy that requires a parameter,
/// `Absent` and `Invalid` deny before any business rule. The chain is then a
/// logical AND in declaration order, short-circuited at the first deny, whose
/// reason is preserved verbatim.
pub fn evaluate(
    resource: &ResourceModel,
    params: &ParameterResult,
    policy: &PolicySpec,
) -> Decision {
    let param: Option<&ParameterModel> = if policy.requires_parameter {
        match params {
            ParameterResult::Absent => {
                return Decision::deny(
                    policy.id,
                    Denial::new(ids::CODE_PARAMETER_ABSENT, NO_PARAMETER_REASON),
                );
            }
            ParameterResult::Invalid(detail) => {
                return Decision::deny(
                    policy.id,
                    Denial::new(
                        ids::CODE_PARAMETER_INVALID,
                        format!("invalid policy parameter: {detail}"),
                    ),
                );
            }
            ParameterResult::Found(p) => Some(p),
        }
    } else {
        match params {
            ParameterResult::Found(p) => Some(p),
            _ => None,
        }
    };

    for check in policy.chain {
        if let Some(denial) = checks::run(resource, param, check) {
            return Decision::deny(policy.id, denial);
        }
    }

    Decision::allow(policy.id)
}

/// Host entry point: resolve the parameter for the resource's namespace and
/// evaluate the policy registered under `policy_id`.
pub fn review(
    resource: &ResourceModel,
    policy_id: &str,
    lookup: &dyn ParameterLookup,
) -> Result<Decision, DispatchError> {
    let policy = registry::lookup(policy_id).ok_or_else(|| DispatchError::UnknownPolicy {
        policy_id: policy_id.to_string(),
    })?;

    let params = if policy.requires_parameter {
        lookup.resolve(policy.id, &resource.namespace)
    } else {
        ParameterResult::Absent
    };

    Ok(evaluate(resource, &params, policy))
}

/// Assemble the host-facing record for a decision: fingerprint for dedup,
/// remediation help from the explain registry.
pub fn decision_record(resource: &ResourceModel, decision: &Decision) -> DecisionRecord {
    let mut record = DecisionRecord::new(
        decision.policy_id.clone(),
        resource.kind.clone(),
        resource.namespace.clone(),
        Verdict::Allow,
    );

    if let Some(denial) = &decision.denial {
        record = record.with_denial(denial);
        record.help = lookup_explanation(&denial.code).map(|e| e.remediation.to_string());
        record.fingerprint = Some(fingerprint_for_decision(
            &decision.policy_id,
            &denial.code,
            &resource.kind,
            &resource.namespace,
        ));
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{found, resource};
    use serde_json::json;
    use vapguard_types::ids;

    #[test]
    fn absent_parameter_denies_before_business_rules() {
        let r = resource(
            "Kustomization",
            "ns1",
            json!({"spec": {"targetNamespace": "app"}}),
        );
        let policy = registry::lookup(ids::POLICY_KUSTOMIZATION_REQUIRED_FIELDS).unwrap();

        let decision = evaluate(&r, &ParameterResult::Absent, policy);
        assert_eq!(decision.verdict, Verdict::Deny);
        assert_eq!(decision.reason(), NO_PARAMETER_REASON);
        assert_eq!(
            decision.denial.as_ref().unwrap().code,
            ids::CODE_PARAMETER_ABSENT
        );
    }

    #[test]
    fn invalid_parameter_uses_schema_violation_reason() {
        let r = resource("Service", "ns1", json!({"spec": {"type": "ClusterIP"}}));
        let policy = registry::lookup(ids::POLICY_SERVICE_ALLOWED_TYPES).unwrap();

        let params = ParameterResult::Invalid("spec must be a map".to_string());
        let decision = evaluate(&r, &params, policy);
        assert_eq!(
            decision.reason(),
            "invalid policy parameter: spec must be a map"
        );
        assert_eq!(
            decision.denial.as_ref().unwrap().code,
            ids::CODE_PARAMETER_INVALID
        );
    }

    #[test]
    fn chain_short_circuits_at_first_deny() {
        // Both fields are wrong; only the first declared field is reported.
        let r = resource(
            "Kustomization",
            "ns1",
            json!({"spec": {"targetNamespace": "wrong", "serviceAccountName": "wrong"}}),
        );
        let policy = registry::lookup(ids::POLICY_KUSTOMIZATION_REQUIRED_FIELDS).unwrap();
        let params = found(
            "ns1",
            json!({"targetNamespace": "app", "serviceAccountName": "deployer"}),
        );

        let decision = evaluate(&r, &params, policy);
        assert_eq!(
            decision.reason(),
            "spec.targetNamespace must be set to app. It is: wrong"
        );
    }

    #[test]
    fn all_checks_passing_allows() {
        let r = resource(
            "Kustomization",
            "ns1",
            json!({"spec": {"targetNamespace": "app", "serviceAccountName": "deployer"}}),
        );
        let policy = registry::lookup(ids::POLICY_KUSTOMIZATION_REQUIRED_FIELDS).unwrap();
        let params = found(
            "ns1",
            json!({"targetNamespace": "app", "serviceAccountName": "deployer"}),
        );

        let decision = evaluate(&r, &params, policy);
        assert!(decision.is_allowed());
        assert_eq!(decision.reason(), "");
    }

    #[test]
    fn review_rejects_unknown_policy_id() {
        struct NoParams;
        impl ParameterLookup for NoParams {
            fn resolve(&self, _policy_id: &str, _namespace: &str) -> ParameterResult {
                ParameterResult::Absent
            }
        }

        let r = resource("Pod", "ns1", json!({"spec": {}}));
        let err = review(&r, "nonexistent.policy", &NoParams).unwrap_err();
        assert!(matches!(err, DispatchError::UnknownPolicy { .. }));
    }

    #[test]
    fn review_skips_resolution_for_parameterless_policies() {
        struct Panics;
        impl ParameterLookup for Panics {
            fn resolve(&self, _policy_id: &str, _namespace: &str) -> ParameterResult {
                panic!("parameterless policy must not resolve");
            }
        }

        let r = resource(
            "RoleBinding",
            "ns1",
            json!({"subjects": [{"kind": "ServiceAccount", "name": "my-sa"}]}),
        );
        let decision = review(&r, ids::POLICY_ROLEBINDING_NO_DEFAULT_SA, &Panics).unwrap();
        assert!(decision.is_allowed());
    }

    #[test]
    fn record_for_deny_has_fingerprint_and_help() {
        let r = resource("RoleBinding", "ns1", json!({"subjects": [{"kind": "ServiceAccount", "name": "default"}]}));
        let policy = registry::lookup(ids::POLICY_ROLEBINDING_NO_DEFAULT_SA).unwrap();
        let decision = evaluate(&r, &ParameterResult::Absent, policy);

        let record = decision_record(&r, &decision);
        assert_eq!(record.verdict, Verdict::Deny);
        assert_eq!(record.code.as_deref(), Some(ids::CODE_FORBIDDEN_SUBJECT));
        assert!(record.fingerprint.is_some());
        assert!(record.help.is_some());
    }

    #[test]
    fn record_for_allow_is_bare() {
        let r = resource("RoleBinding", "ns1", json!({}));
        let policy = registry::lookup(ids::POLICY_ROLEBINDING_NO_DEFAULT_SA).unwrap();
        let decision = evaluate(&r, &ParameterResult::Absent, policy);

        let record = decision_record(&r, &decision);
        assert_eq!(record.verdict, Verdict::Allow);
        assert!(record.code.is_none());
        assert!(record.reason.is_none());
        assert!(record.fingerprint.is_none());
    }
}
