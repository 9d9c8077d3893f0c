use super::statement::Statement;
use super::{Empty, Scope, VisibilityConfig};
use crate::template::Tag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RuleAction {
    Allow(Empty),
    Block(BlockAction),
    Count(Empty),
}

impl RuleAction {
    /// Block with a custom status code and response body.
    pub fn block_with(response_code: u16, body_key: impl Into<String>) -> Self {
        RuleAction::Block(BlockAction {
            custom_response: Some(CustomResponse {
                response_code,
                custom_response_body_key: Some(body_key.into()),
            }),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BlockAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_response: Option<CustomResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomResponse {
    pub response_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_response_body_key: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    TextPlain,
    #[default]
    TextHtml,
    ApplicationJson,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomResponseBody {
    pub content: String,
    pub content_type: ContentType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Label {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Rule {
    pub name: String,
    pub priority: u32,
    pub statement: Statement,
    pub visibility_config: VisibilityConfig,
    pub action: RuleAction,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rule_labels: Vec<Label>,
}

impl Rule {
    /// A rule whose metric name is the rule name.
    pub fn new(name: impl Into<String>, priority: u32, statement: Statement, action: RuleAction) -> Self {
        let name = name.into();
        Self {
            visibility_config: VisibilityConfig::enabled(name.clone()),
            name,
            priority,
            statement,
            action,
            rule_labels: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.rule_labels.push(Label { name: label.into() });
        self
    }
}

/// A capacity-bounded collection of rules (`AWS::WAFv2::RuleGroup`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RuleGroup {
    pub capacity: u32,
    pub scope: Scope,
    pub visibility_config: VisibilityConfig,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_response_bodies: BTreeMap<String, CustomResponseBody>,
    pub description: String,
    pub name: String,
    pub rules: Vec<Rule>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl RuleGroup {
    pub fn new(name: impl Into<String>, capacity: u32, scope: Scope, metric_name: impl Into<String>) -> Self {
        Self {
            capacity,
            scope,
            visibility_config: VisibilityConfig::enabled(metric_name),
            custom_response_bodies: BTreeMap::new(),
            description: String::new(),
            name: name.into(),
            rules: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_response_body(
        mut self,
        key: impl Into<String>,
        content: impl Into<String>,
        content_type: ContentType,
    ) -> Self {
        self.custom_response_bodies.insert(
            key.into(),
            CustomResponseBody {
                content: content.into(),
                content_type,
            },
        );
        self
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(Tag::new(key, value));
        self
    }

    /// Sum of the estimated capacity of every rule, saturating at `u32::MAX`.
    pub fn required_capacity(&self) -> u32 {
        self.rules
            .iter()
            .fold(0u32, |total, r| total.saturating_add(r.statement.estimated_capacity()))
    }
}
