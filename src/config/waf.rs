use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use super::defaults::*;
use super::types::DefaultVerdict;
use crate::wafv2::{AggregateKeyType, ContentType, FallbackBehavior};

/// Keys accepted in `rule_groups.response_body_overrides`.
pub const RESPONSE_BODY_GROUPS: [&str; 4] = ["bad_url", "block_ip", "bot_request", "rate_limit"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IpSetsConfig {
    #[serde(default)]
    pub ipv4: Vec<String>,
    #[serde(default)]
    pub ipv6: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternsConfig {
    #[serde(default = "default_bot_user_agents")]
    pub bot_user_agents: Vec<String>,
    #[serde(default = "default_url_paths")]
    pub url_paths: Vec<String>,
}

impl Default for PatternsConfig {
    fn default() -> Self {
        Self {
            bot_user_agents: default_bot_user_agents(),
            url_paths: default_url_paths(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleGroupsConfig {
    #[serde(default = "default_bad_url_capacity")]
    pub bad_url_capacity: u32,
    #[serde(default = "default_block_ip_capacity")]
    pub block_ip_capacity: u32,
    #[serde(default = "default_bot_request_capacity")]
    pub bot_request_capacity: u32,
    #[serde(default = "default_rate_limit_capacity")]
    pub rate_limit_capacity: u32,
    /// Requests per five-minute window per client IP.
    #[serde(default = "default_rate_limit")]
    pub rate_limit: u64,
    /// `IP`, or `FORWARDED_IP` when the load balancer sits behind a proxy.
    #[serde(default)]
    pub rate_limit_key: AggregateKeyType,
    #[serde(default = "default_forwarded_ip_header")]
    pub forwarded_ip_header: String,
    #[serde(default)]
    pub forwarded_ip_fallback: FallbackBehavior,
    #[serde(default = "default_response_code")]
    pub response_code: u16,
    #[serde(default = "default_response_body")]
    pub response_body: String,
    #[serde(default)]
    pub content_type: ContentType,
    /// Rule group key (see [`RESPONSE_BODY_GROUPS`]) -> body replacing `response_body`.
    #[serde(default = "default_response_body_overrides")]
    pub response_body_overrides: BTreeMap<String, String>,
}

impl RuleGroupsConfig {
    /// Body served when the `group` rule group blocks a request.
    pub fn response_body_for(&self, group: &str) -> &str {
        self.response_body_overrides
            .get(group)
            .map(String::as_str)
            .unwrap_or(&self.response_body)
    }
}

impl Default for RuleGroupsConfig {
    fn default() -> Self {
        Self {
            bad_url_capacity: default_bad_url_capacity(),
            block_ip_capacity: default_block_ip_capacity(),
            bot_request_capacity: default_bot_request_capacity(),
            rate_limit_capacity: default_rate_limit_capacity(),
            rate_limit: default_rate_limit(),
            rate_limit_key: AggregateKeyType::default(),
            forwarded_ip_header: default_forwarded_ip_header(),
            forwarded_ip_fallback: FallbackBehavior::default(),
            response_code: default_response_code(),
            response_body: default_response_body(),
            content_type: ContentType::default(),
            response_body_overrides: default_response_body_overrides(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebAclConfig {
    /// Defaults to `<environment>-acl`, or `waf-acl` without an environment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "default_web_acl_description")]
    pub description: String,
    #[serde(default)]
    pub default_action: DefaultVerdict,
    /// Managed rule group name -> rules to exclude from it.
    #[serde(default)]
    pub excluded_rules: BTreeMap<String, Vec<String>>,
}

impl Default for WebAclConfig {
    fn default() -> Self {
        Self {
            name: None,
            description: default_web_acl_description(),
            default_action: DefaultVerdict::default(),
            excluded_rules: BTreeMap::new(),
        }
    }
}
