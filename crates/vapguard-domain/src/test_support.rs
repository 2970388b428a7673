use crate::model::{ParameterModel, ParameterResult, ResourceModel};
use serde_json::Value as JsonValue;

pub fn resource(kind: &str, namespace: &str, fields: JsonValue) -> ResourceModel {
    ResourceModel::new(kind, namespace, fields)
}

pub fn parameter(namespace: &str, spec: JsonValue) -> ParameterModel {
    ParameterModel::new(namespace, spec)
}

pub fn found(namespace: &str, spec: JsonValue) -> ParameterResult {
    ParameterResult::Found(parameter(namespace, spec))
}
