//! Stable DTOs and IDs used across the vapguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted admission decision record
//! - stable string IDs and codes
//! - canonical dotted field path handling
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod decision;
pub mod explain;
pub mod ids;
pub mod path;
pub mod record;

pub use decision::{Decision, Denial, Verdict};
pub use explain::{lookup_explanation, ExamplePair, Explanation};
pub use path::FieldPath;
pub use record::{DecisionRecord, ToolMeta, SCHEMA_DECISION_V1};
