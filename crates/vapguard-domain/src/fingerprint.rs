use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a deny decision.
///
/// Identity fields:
/// - policy_id
/// - code
/// - resource kind
/// - resource namespace
pub fn fingerprint_for_decision(
    policy_id: &str,
    code: &str,
    kind: &str,
    namespace: &str,
) -> String {
    let canonical = [policy_id, code, kind, namespace].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
