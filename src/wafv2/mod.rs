pub mod ip_set;
pub mod managed;
pub mod regex_set;
pub mod rule_group;
pub mod statement;
pub mod web_acl;

pub use ip_set::{IpAddressVersion, IpSet};
pub use managed::ManagedRuleSet;
pub use regex_set::RegexPatternSet;
pub use rule_group::{
    BlockAction, ContentType, CustomResponse, CustomResponseBody, Label, Rule, RuleAction, RuleGroup,
};
pub use statement::{
    AggregateKeyType, ExcludedRule, FallbackBehavior, FieldToMatch, ForwardedIpConfig, IpSetReferenceStatement,
    ManagedRuleGroupStatement, NotStatement, RateBasedStatement, RegexPatternSetReferenceStatement, RuleGroupReferenceStatement,
    SingleHeader, Statement, StatementList, TextTransformation, TextTransformationType,
};
pub use web_acl::{web_acl_association, DefaultAction, OverrideAction, WebAcl, WebAclAssociation, WebAclRule};

use serde::{Deserialize, Serialize};

/// Hard ceiling on web ACL capacity units.
pub const WEB_ACL_MAX_CAPACITY: u32 = 5000;

/// Capacity included in the base web ACL price; above it AWS bills extra.
pub const WEB_ACL_BASE_CAPACITY: u32 = 1500;

/// Serializes as `{}`, which WAFv2 uses for parameterless choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Empty {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Scope {
    #[default]
    Regional,
    Cloudfront,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VisibilityConfig {
    pub cloud_watch_metrics_enabled: bool,
    pub metric_name: String,
    pub sampled_requests_enabled: bool,
}

impl VisibilityConfig {
    /// Metrics and sampled requests both on.
    pub fn enabled(metric_name: impl Into<String>) -> Self {
        Self {
            cloud_watch_metrics_enabled: true,
            metric_name: metric_name.into(),
            sampled_requests_enabled: true,
        }
    }
}

pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 128
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

pub fn is_valid_metric_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 255
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '#' | ':' | '.' | '-' | '/'))
}
