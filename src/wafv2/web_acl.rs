use super::statement::Statement;
use super::{Empty, Scope, VisibilityConfig};
use crate::template::{Tag, Value};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DefaultAction {
    Allow(Empty),
    Block(Empty),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OverrideAction {
    /// Keep the rule group's own actions.
    #[serde(rename = "None")]
    Keep(Empty),
    Count(Empty),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WebAclRule {
    pub name: String,
    pub priority: u32,
    pub statement: Statement,
    pub override_action: OverrideAction,
    pub visibility_config: VisibilityConfig,
}

impl WebAclRule {
    pub fn new(
        name: impl Into<String>,
        priority: u32,
        statement: Statement,
        metric_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            priority,
            statement,
            override_action: OverrideAction::Keep(Empty {}),
            visibility_config: VisibilityConfig::enabled(metric_name),
        }
    }
}

/// The firewall policy (`AWS::WAFv2::WebACL`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WebAcl {
    pub default_action: DefaultAction,
    pub scope: Scope,
    pub visibility_config: VisibilityConfig,
    pub description: String,
    pub name: String,
    pub rules: Vec<WebAclRule>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl WebAcl {
    pub fn new(
        name: impl Into<String>,
        default_action: DefaultAction,
        scope: Scope,
        metric_name: impl Into<String>,
    ) -> Self {
        Self {
            default_action,
            scope,
            visibility_config: VisibilityConfig::enabled(metric_name),
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

    pub fn with_rule(mut self, rule: WebAclRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(Tag::new(key, value));
        self
    }
}

/// Binds a web ACL to a load balancer (`AWS::WAFv2::WebACLAssociation`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WebAclAssociation {
    pub resource_arn: Value,
    #[serde(rename = "WebACLArn")]
    pub web_acl_arn: Value,
}

pub fn web_acl_association(resource_arn: impl Into<Value>, web_acl_arn: Value) -> WebAclAssociation {
    WebAclAssociation {
        resource_arn: resource_arn.into(),
        web_acl_arn,
    }
}
