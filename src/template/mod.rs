pub mod arn;
pub mod resource;

pub use arn::Arn;
pub use resource::Resource;

use crate::error::StackError;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::{json, Map};
use std::fmt;

pub const TEMPLATE_FORMAT_VERSION: &str = "2010-09-09";

/// CloudFormation logical identifier of a resource inside one template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LogicalId(String);

impl LogicalId {
    pub fn new(id: impl Into<String>) -> Result<Self, StackError> {
        let id = id.into();
        if id.is_empty() || id.len() > 255 || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(StackError::InvalidLogicalId(id));
        }
        Ok(Self(id))
    }

    /// Build an id from a base name plus an optional environment label,
    /// dropping every character CloudFormation does not accept.
    ///
    /// `compose("devIPv4IPSet", None)` keeps the base; `compose("IPv4IPSet", Some("dev"))`
    /// yields `IPv4IPSetDev`.
    pub fn compose(base: &str, environment: Option<&str>) -> Result<Self, StackError> {
        let mut id: String = base.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
        if let Some(env) = environment {
            let mut first = true;
            for c in env.chars().filter(|c| c.is_ascii_alphanumeric()) {
                if first {
                    id.push(c.to_ascii_uppercase());
                    first = false;
                } else {
                    id.push(c);
                }
            }
        }
        Self::new(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LogicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A property value: a literal or an intrinsic reference to another resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Literal(String),
    Ref(LogicalId),
    GetAtt(LogicalId, String),
}

impl Value {
    pub fn literal(s: impl Into<String>) -> Self {
        Value::Literal(s.into())
    }

    /// `Fn::GetAtt [id, Arn]`
    pub fn arn_of(id: &LogicalId) -> Self {
        Value::GetAtt(id.clone(), "Arn".to_string())
    }

    pub fn ref_to(id: &LogicalId) -> Self {
        Value::Ref(id.clone())
    }

    /// The logical id this value points at, if it is a reference.
    pub fn target(&self) -> Option<&LogicalId> {
        match self {
            Value::Literal(_) => None,
            Value::Ref(id) | Value::GetAtt(id, _) => Some(id),
        }
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Value::Literal(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Literal(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Literal(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Literal(s) => write!(f, "'{}'", s),
            Value::Ref(id) => write!(f, "Ref {}", id),
            Value::GetAtt(id, attr) => write!(f, "GetAtt {}.{}", id, attr),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Literal(s) => serializer.serialize_str(s),
            Value::Ref(id) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Ref", id.as_str())?;
                map.end()
            }
            Value::GetAtt(id, attr) => {
                struct Pair<'a>(&'a str, &'a str);
                impl Serialize for Pair<'_> {
                    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                        let mut seq = serializer.serialize_seq(Some(2))?;
                        seq.serialize_element(self.0)?;
                        seq.serialize_element(self.1)?;
                        seq.end()
                    }
                }
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Fn::GetAtt", &Pair(id.as_str(), attr))?;
                map.end()
            }
        }
    }
}

/// A reference found while walking serialized properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub target: String,
    pub attribute: Option<String>,
}

/// Collect every `Ref` and `Fn::GetAtt` inside a JSON document.
pub fn collect_references(value: &serde_json::Value) -> Vec<Reference> {
    let mut found = Vec::new();
    walk(value, &mut found);
    found
}

fn walk(value: &serde_json::Value, found: &mut Vec<Reference>) {
    match value {
        serde_json::Value::Object(map) => {
            if map.len() == 1 {
                if let Some(serde_json::Value::String(target)) = map.get("Ref") {
                    found.push(Reference {
                        target: target.clone(),
                        attribute: None,
                    });
                    return;
                }
                if let Some(serde_json::Value::Array(pair)) = map.get("Fn::GetAtt") {
                    if let [serde_json::Value::String(target), serde_json::Value::String(attr)] =
                        pair.as_slice()
                    {
                        found.push(Reference {
                            target: target.clone(),
                            attribute: Some(attr.clone()),
                        });
                        return;
                    }
                }
            }
            for v in map.values() {
                walk(v, found);
            }
        }
        serde_json::Value::Array(items) => {
            for v in items {
                walk(v, found);
            }
        }
        _ => {}
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Export {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Output {
    pub description: String,
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<Export>,
}

/// Resources in declaration order plus named outputs.
#[derive(Debug, Clone, Default)]
pub struct Template {
    pub description: String,
    resources: Vec<(LogicalId, Resource)>,
    outputs: Vec<(LogicalId, Output)>,
}

impl Template {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            resources: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Declare a resource. The id is returned for wiring later declarations.
    pub fn add(&mut self, id: LogicalId, resource: impl Into<Resource>) -> Result<LogicalId, StackError> {
        if self.position(&id).is_some() {
            return Err(StackError::DuplicateLogicalId(id.to_string()));
        }
        self.resources.push((id.clone(), resource.into()));
        Ok(id)
    }

    /// Append without the duplicate check; used to build malformed templates in tests.
    #[cfg(test)]
    pub(crate) fn push_unchecked(&mut self, id: LogicalId, resource: impl Into<Resource>) {
        self.resources.push((id, resource.into()));
    }

    pub fn add_output(&mut self, id: LogicalId, output: Output) -> Result<(), StackError> {
        if self.outputs.iter().any(|(existing, _)| *existing == id) {
            return Err(StackError::DuplicateLogicalId(id.to_string()));
        }
        self.outputs.push((id, output));
        Ok(())
    }

    pub fn position(&self, id: &LogicalId) -> Option<usize> {
        self.resources.iter().position(|(existing, _)| existing == id)
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.resources.iter().position(|(existing, _)| existing.as_str() == id)
    }

    pub fn get(&self, id: &LogicalId) -> Option<&Resource> {
        self.get_by_name(id.as_str())
    }

    pub fn get_by_name(&self, id: &str) -> Option<&Resource> {
        self.resources
            .iter()
            .find(|(existing, _)| existing.as_str() == id)
            .map(|(_, r)| r)
    }

    pub fn resources(&self) -> impl Iterator<Item = (&LogicalId, &Resource)> {
        self.resources.iter().map(|(id, r)| (id, r))
    }

    pub fn outputs(&self) -> impl Iterator<Item = (&LogicalId, &Output)> {
        self.outputs.iter().map(|(id, o)| (id, o))
    }

    pub fn output(&self, id: &str) -> Option<&Output> {
        self.outputs
            .iter()
            .find(|(existing, _)| existing.as_str() == id)
            .map(|(_, o)| o)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        let mut resources = Map::new();
        for (id, resource) in &self.resources {
            resources.insert(
                id.to_string(),
                json!({
                    "Type": resource.type_name(),
                    "Properties": resource.properties()?,
                }),
            );
        }

        let mut outputs = Map::new();
        for (id, output) in &self.outputs {
            outputs.insert(id.to_string(), serde_json::to_value(output)?);
        }

        Ok(json!({
            "AWSTemplateFormatVersion": TEMPLATE_FORMAT_VERSION,
            "Description": self.description,
            "Resources": resources,
            "Outputs": outputs,
        }))
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.to_json()?)
    }
}
