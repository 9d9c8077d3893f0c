//! Default values for configuration options

use std::collections::BTreeMap;

// Stack defaults
pub(super) fn default_region() -> String {
    "us-east-1".to_string()
}

pub(super) fn default_stack_name() -> String {
    "waf-stack".to_string()
}

pub(super) fn default_description() -> String {
    "WAFv2 protection for an existing application load balancer".to_string()
}

// Load balancer lookup defaults
pub(super) fn default_lb_tags() -> BTreeMap<String, String> {
    let mut tags = BTreeMap::new();
    tags.insert("application".to_string(), String::new());
    tags
}

// Pattern defaults (placeholders until real signatures are filled in)
pub(super) fn default_bot_user_agents() -> Vec<String> {
    vec!["^foobar$".to_string()]
}

pub(super) fn default_url_paths() -> Vec<String> {
    vec!["^foobar$".to_string(), "^example$".to_string()]
}

// Rule group defaults
pub(super) fn default_bad_url_capacity() -> u32 {
    100
}

pub(super) fn default_block_ip_capacity() -> u32 {
    25
}

pub(super) fn default_bot_request_capacity() -> u32 {
    75
}

pub(super) fn default_rate_limit_capacity() -> u32 {
    50
}

pub(super) fn default_rate_limit() -> u64 {
    100
}

pub(super) fn default_forwarded_ip_header() -> String {
    "X-Forwarded-For".to_string()
}

pub(super) fn default_response_code() -> u16 {
    403
}

pub(super) fn default_response_body() -> String {
    "<div>error: access denied</div>".to_string()
}

pub(super) fn default_response_body_overrides() -> BTreeMap<String, String> {
    let mut bodies = BTreeMap::new();
    bodies.insert("bad_url".to_string(), "<div>error: access denied by A team</div>".to_string());
    bodies
}

// Web ACL defaults
pub(super) fn default_web_acl_description() -> String {
    "Rate limiting, IP, bot and URL filtering with AWS managed rule sets".to_string()
}

// Monitoring defaults
pub(super) fn default_email() -> String {
    "abc@example.com".to_string()
}

pub(super) fn default_topic_name() -> String {
    "waf-monitoring".to_string()
}

pub(super) fn default_topic_display_name() -> String {
    "WAF Monitoring".to_string()
}

pub(super) fn default_passed_threshold() -> f64 {
    10.0
}

pub(super) fn default_blocked_threshold() -> f64 {
    2.0
}

pub(super) fn default_alarm_period() -> u32 {
    60
}

// Logging defaults
pub(super) fn default_log_level() -> String {
    "info".to_string()
}

pub(super) fn default_log_format() -> String {
    "text".to_string()
}
