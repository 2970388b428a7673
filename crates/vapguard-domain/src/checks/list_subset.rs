use crate::checks::utils;
use crate::model::{ParameterModel, ResourceModel};
use serde_json::json;
use vapguard_types::{ids, Denial, FieldPath};

/// Every candidate entry must subset-match at least one pattern entry:
/// existential match per entry, universal requirement across entries.
///
/// An absent candidate list passes vacuously (a companion presence rule, not
/// this one, requires non-emptiness). The first entry with no matching
/// pattern, in declaration order, determines the deny reason.
pub fn run(
    resource: &ResourceModel,
    param: &ParameterModel,
    path: &str,
    patterns_path: &str,
) -> Option<Denial> {
    let candidates = resource.fields.list(&FieldPath::new(path))?;

    let patterns = param
        .spec
        .list(&FieldPath::new(patterns_path))
        .unwrap_or(&[]);

    for (index, candidate) in candidates.iter().enumerate() {
        let matched = candidate.as_object().is_some_and(|candidate_map| {
            patterns.iter().any(|pattern| {
                pattern
                    .as_object()
                    .is_some_and(|pattern_map| utils::subset_matches(pattern_map, candidate_map))
            })
        });

        if !matched {
            return Some(
                Denial::new(
                    ids::CODE_UNMATCHED_REFERENCE,
                    format!(
                        "{path}[{index}] must match an entry on the spec.{patterns_path} \
                         list in the policy parameter"
                    ),
                )
                .with_data(json!({"index": index, "entry": candidate})),
            );
        }
    }

    None
}
