use thiserror::Error;

/// Errors raised while assembling or checking a stack declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("invalid logical id '{0}': must be 1-255 ASCII alphanumeric characters")]
    InvalidLogicalId(String),

    #[error("duplicate logical id '{0}'")]
    DuplicateLogicalId(String),

    #[error("invalid ARN '{arn}': {reason}")]
    InvalidArn { arn: String, reason: String },

    #[error("no load balancer matches tags {0}")]
    LoadBalancerNotFound(String),

    #[error("{count} load balancers match tags {tags}; refine the tag filter")]
    AmbiguousLoadBalancer { tags: String, count: usize },

    #[error("'{from}' references undeclared resource '{to}'")]
    DanglingReference { from: String, to: String },

    #[error("'{from}' references '{to}', which is declared after it")]
    ForwardReference { from: String, to: String },

    #[error("'{from}' reads attribute '{attribute}' that {resource_type} '{to}' does not expose")]
    UnknownAttribute {
        from: String,
        to: String,
        resource_type: String,
        attribute: String,
    },

    #[error("cannot serialize properties of '{id}': {reason}")]
    Serialization { id: String, reason: String },

    #[error("dependency cycle through '{0}'")]
    Cycle(String),

    #[error("duplicate priority {priority} in {collection}")]
    DuplicatePriority { collection: String, priority: u32 },

    #[error("rule group '{group}' declares capacity {declared} but its rules need {required}")]
    RuleGroupCapacity {
        group: String,
        declared: u32,
        required: u32,
    },

    #[error("web ACL '{acl}' needs {required} WCU, above the limit of {limit}")]
    WebAclCapacity {
        acl: String,
        required: u64,
        limit: u32,
    },

    #[error("{context}: {kind} statement needs at least two nested statements")]
    TooFewStatements { context: String, kind: &'static str },

    #[error("{context}: rate limit {limit} outside 10..=2000000000")]
    RateLimitOutOfRange { context: String, limit: u64 },

    #[error("{context}: FORWARDED_IP rate limit needs a forwarded IP header name")]
    MissingForwardedIpConfig { context: String },

    #[error("{context}: custom response body '{key}' is not defined by the rule group")]
    UnknownResponseBody { context: String, key: String },

    #[error("{context}: response code {code} outside 200..=599")]
    InvalidResponseCode { context: String, code: u16 },

    #[error("web ACL rule '{rule}' must reference a rule group or a managed rule group")]
    UnsupportedAclStatement { rule: String },

    #[error("association '{association}': {reason}")]
    AssociationMismatch { association: String, reason: String },

    #[error("alarm '{alarm}' has no actions")]
    EmptyAlarmActions { alarm: String },

    #[error("alarm '{alarm}' action {action} is not an SNS topic")]
    InvalidAlarmAction { alarm: String, action: String },

    #[error("IP set '{set}': '{address}' is not an {family} CIDR")]
    InvalidAddress {
        set: String,
        address: String,
        family: &'static str,
    },

    #[error("regex pattern set '{set}': pattern '{pattern}' does not compile: {reason}")]
    InvalidPattern {
        set: String,
        pattern: String,
        reason: String,
    },

    #[error("regex pattern set '{set}' holds {count} patterns, more than {limit}")]
    TooManyPatterns { set: String, count: usize, limit: usize },

    #[error("invalid WAF name '{0}': must match [A-Za-z0-9_-]{{1,128}}")]
    InvalidName(String),
}
