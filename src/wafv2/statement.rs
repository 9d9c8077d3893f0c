use super::Empty;
use crate::template::Value;
use serde::{Deserialize, Serialize};

/// A WAFv2 match statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Statement {
    #[serde(rename = "RegexPatternSetReferenceStatement")]
    RegexPatternSetReference(RegexPatternSetReferenceStatement),
    #[serde(rename = "IPSetReferenceStatement")]
    IpSetReference(IpSetReferenceStatement),
    #[serde(rename = "OrStatement")]
    Or(StatementList),
    #[serde(rename = "AndStatement")]
    And(StatementList),
    #[serde(rename = "NotStatement")]
    Not(NotStatement),
    #[serde(rename = "RateBasedStatement")]
    RateBased(RateBasedStatement),
    #[serde(rename = "RuleGroupReferenceStatement")]
    RuleGroupReference(RuleGroupReferenceStatement),
    #[serde(rename = "ManagedRuleGroupStatement")]
    ManagedRuleGroup(ManagedRuleGroupStatement),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegexPatternSetReferenceStatement {
    pub arn: Value,
    pub field_to_match: FieldToMatch,
    pub text_transformations: Vec<TextTransformation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IpSetReferenceStatement {
    pub arn: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatementList {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NotStatement {
    pub statement: Box<Statement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AggregateKeyType {
    /// Client address as seen by the load balancer.
    #[default]
    Ip,
    /// Address taken from a request header such as `X-Forwarded-For`.
    ForwardedIp,
}

/// What to do with a request whose forwarded-IP header is missing or malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FallbackBehavior {
    Match,
    #[default]
    NoMatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ForwardedIpConfig {
    pub header_name: String,
    pub fallback_behavior: FallbackBehavior,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RateBasedStatement {
    pub aggregate_key_type: AggregateKeyType,
    /// Required by WAFv2 when the key is `FORWARDED_IP`.
    #[serde(rename = "ForwardedIPConfig", skip_serializing_if = "Option::is_none")]
    pub forwarded_ip_config: Option<ForwardedIpConfig>,
    pub limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope_down_statement: Option<Box<Statement>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExcludedRule {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RuleGroupReferenceStatement {
    pub arn: Value,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub excluded_rules: Vec<ExcludedRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManagedRuleGroupStatement {
    pub name: String,
    pub vendor_name: String,
    pub excluded_rules: Vec<ExcludedRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FieldToMatch {
    UriPath(Empty),
    QueryString(Empty),
    Method(Empty),
    AllQueryArguments(Empty),
    SingleHeader(SingleHeader),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SingleHeader {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextTransformationType {
    None,
    Lowercase,
    UrlDecode,
    HtmlEntityDecode,
    CompressWhiteSpace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextTransformation {
    pub priority: u32,
    #[serde(rename = "Type")]
    pub kind: TextTransformationType,
}

impl TextTransformation {
    pub fn none() -> Self {
        Self {
            priority: 0,
            kind: TextTransformationType::None,
        }
    }
}

impl Statement {
    pub fn regex_set(arn: Value, field_to_match: FieldToMatch) -> Self {
        Statement::RegexPatternSetReference(RegexPatternSetReferenceStatement {
            arn,
            field_to_match,
            text_transformations: vec![TextTransformation::none()],
        })
    }

    pub fn ip_set(arn: Value) -> Self {
        Statement::IpSetReference(IpSetReferenceStatement { arn })
    }

    pub fn or(statements: Vec<Statement>) -> Self {
        Statement::Or(StatementList { statements })
    }

    pub fn rate_by_ip(limit: u64) -> Self {
        Statement::RateBased(RateBasedStatement {
            aggregate_key_type: AggregateKeyType::Ip,
            forwarded_ip_config: None,
            limit,
            scope_down_statement: None,
        })
    }

    /// Rate limit keyed on the client address carried in `header_name`.
    pub fn rate_by_forwarded_ip(limit: u64, header_name: impl Into<String>, fallback: FallbackBehavior) -> Self {
        Statement::RateBased(RateBasedStatement {
            aggregate_key_type: AggregateKeyType::ForwardedIp,
            forwarded_ip_config: Some(ForwardedIpConfig {
                header_name: header_name.into(),
                fallback_behavior: fallback,
            }),
            limit,
            scope_down_statement: None,
        })
    }

    pub fn rule_group(arn: Value) -> Self {
        Statement::RuleGroupReference(RuleGroupReferenceStatement {
            arn,
            excluded_rules: Vec::new(),
        })
    }

    pub fn managed(vendor: &str, name: &str, excluded: &[String]) -> Self {
        Statement::ManagedRuleGroup(ManagedRuleGroupStatement {
            name: name.to_string(),
            vendor_name: vendor.to_string(),
            excluded_rules: excluded
                .iter()
                .map(|name| ExcludedRule { name: name.clone() })
                .collect(),
        })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Statement::RegexPatternSetReference(_) => "RegexPatternSetReference",
            Statement::IpSetReference(_) => "IPSetReference",
            Statement::Or(_) => "Or",
            Statement::And(_) => "And",
            Statement::Not(_) => "Not",
            Statement::RateBased(_) => "RateBased",
            Statement::RuleGroupReference(_) => "RuleGroupReference",
            Statement::ManagedRuleGroup(_) => "ManagedRuleGroup",
        }
    }

    /// Capacity units this statement costs inside a rule group.
    ///
    /// References to other rule groups cost nothing here; the web ACL adds the
    /// referenced group's declared capacity instead. Sums saturate at `u32::MAX`.
    pub fn estimated_capacity(&self) -> u32 {
        match self {
            Statement::IpSetReference(_) => 1,
            Statement::RegexPatternSetReference(s) => {
                let transforms = s
                    .text_transformations
                    .iter()
                    .filter(|t| t.kind != TextTransformationType::None)
                    .count();
                let transforms = u32::try_from(transforms).unwrap_or(u32::MAX);
                transforms.saturating_mul(10).saturating_add(25)
            }
            Statement::Or(list) | Statement::And(list) => list
                .statements
                .iter()
                .fold(0u32, |total, s| total.saturating_add(s.estimated_capacity())),
            Statement::Not(not) => not.statement.estimated_capacity(),
            Statement::RateBased(rate) => rate
                .scope_down_statement
                .as_ref()
                .map(|s| s.estimated_capacity())
                .unwrap_or(0)
                .saturating_add(2),
            Statement::RuleGroupReference(_) | Statement::ManagedRuleGroup(_) => 0,
        }
    }

    /// This statement followed by every nested statement, depth first.
    pub fn flatten(&self) -> Vec<&Statement> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    fn collect_into<'a>(&'a self, out: &mut Vec<&'a Statement>) {
        out.push(self);
        match self {
            Statement::Or(list) | Statement::And(list) => {
                for s in &list.statements {
                    s.collect_into(out);
                }
            }
            Statement::Not(not) => not.statement.collect_into(out),
            Statement::RateBased(rate) => {
                if let Some(scope_down) = &rate.scope_down_statement {
                    scope_down.collect_into(out);
                }
            }
            _ => {}
        }
    }
}
