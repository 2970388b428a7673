//! Parameter document parsing, validation, and the in-memory store.
//!
//! This crate is intentionally IO-free: it parses and validates parameter
//! documents provided as strings. Fetching them from a cluster is the host's
//! concern.

#![forbid(unsafe_code)]

mod model;
mod store;
mod validate;

pub use model::{ParameterDoc, ParameterMeta};
pub use store::InMemoryParameterStore;
pub use validate::validate_parameter;

/// Parse a parameter manifest (YAML) into a typed document.
pub fn parse_parameter_yaml(input: &str) -> anyhow::Result<ParameterDoc> {
    let doc: ParameterDoc = serde_yaml::from_str(input)?;
    Ok(doc)
}

/// Parse a parameter document (JSON) into a typed document.
pub fn parse_parameter_json(input: &str) -> anyhow::Result<ParameterDoc> {
    let doc: ParameterDoc = serde_json::from_str(input)?;
    Ok(doc)
}
