use super::{collect_references, Reference};
use crate::monitoring::{Alarm, Subscription, Topic};
use crate::wafv2::{IpSet, RegexPatternSet, RuleGroup, WebAcl, WebAclAssociation};

/// Every resource type the stack declares.
#[derive(Debug, Clone)]
pub enum Resource {
    IpSet(IpSet),
    RegexPatternSet(RegexPatternSet),
    RuleGroup(RuleGroup),
    WebAcl(WebAcl),
    WebAclAssociation(WebAclAssociation),
    Topic(Topic),
    Subscription(Subscription),
    Alarm(Alarm),
}

impl Resource {
    pub fn type_name(&self) -> &'static str {
        match self {
            Resource::IpSet(_) => "AWS::WAFv2::IPSet",
            Resource::RegexPatternSet(_) => "AWS::WAFv2::RegexPatternSet",
            Resource::RuleGroup(_) => "AWS::WAFv2::RuleGroup",
            Resource::WebAcl(_) => "AWS::WAFv2::WebACL",
            Resource::WebAclAssociation(_) => "AWS::WAFv2::WebACLAssociation",
            Resource::Topic(_) => "AWS::SNS::Topic",
            Resource::Subscription(_) => "AWS::SNS::Subscription",
            Resource::Alarm(_) => "AWS::CloudWatch::Alarm",
        }
    }

    /// Attributes readable through `Fn::GetAtt`.
    pub fn attributes(&self) -> &'static [&'static str] {
        match self {
            Resource::IpSet(_) | Resource::RegexPatternSet(_) => &["Arn", "Id"],
            Resource::RuleGroup(_) => &["Arn", "Id", "LabelNamespace", "AvailableLabels", "ConsumedLabels"],
            Resource::WebAcl(_) => &["Arn", "Capacity", "Id", "LabelNamespace"],
            Resource::WebAclAssociation(_) => &[],
            Resource::Topic(_) => &["TopicArn", "TopicName"],
            Resource::Subscription(_) => &["Arn"],
            Resource::Alarm(_) => &["Arn"],
        }
    }

    /// WAF-side name of the resource, where it has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Resource::IpSet(r) => Some(&r.name),
            Resource::RegexPatternSet(r) => Some(&r.name),
            Resource::RuleGroup(r) => Some(&r.name),
            Resource::WebAcl(r) => Some(&r.name),
            Resource::Topic(r) => Some(&r.topic_name),
            Resource::Alarm(r) => Some(&r.alarm_name),
            Resource::WebAclAssociation(_) | Resource::Subscription(_) => None,
        }
    }

    pub fn properties(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            Resource::IpSet(r) => serde_json::to_value(r),
            Resource::RegexPatternSet(r) => serde_json::to_value(r),
            Resource::RuleGroup(r) => serde_json::to_value(r),
            Resource::WebAcl(r) => serde_json::to_value(r),
            Resource::WebAclAssociation(r) => serde_json::to_value(r),
            Resource::Topic(r) => serde_json::to_value(r),
            Resource::Subscription(r) => serde_json::to_value(r),
            Resource::Alarm(r) => serde_json::to_value(r),
        }
    }

    pub fn references(&self) -> serde_json::Result<Vec<Reference>> {
        Ok(collect_references(&self.properties()?))
    }
}

macro_rules! impl_from_resource {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Resource {
                fn from(r: $variant) -> Self {
                    Resource::$variant(r)
                }
            }
        )*
    };
}

impl_from_resource!(
    IpSet,
    RegexPatternSet,
    RuleGroup,
    WebAcl,
    WebAclAssociation,
    Topic,
    Subscription,
    Alarm,
);
