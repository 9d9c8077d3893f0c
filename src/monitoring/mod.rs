pub mod alarm;

pub use alarm::{Alarm, ComparisonOperator, Dimension, Statistic, TreatMissingData, WAF_NAMESPACE};

use crate::template::Value;
use serde::{Deserialize, Serialize};

/// Notification channel (`AWS::SNS::Topic`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Topic {
    pub display_name: String,
    pub topic_name: String,
}

impl Topic {
    pub fn new(display_name: impl Into<String>, topic_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            topic_name: topic_name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionProtocol {
    #[default]
    Email,
    #[serde(rename = "email-json")]
    EmailJson,
    Sms,
    Https,
}

/// Subscriber of a topic (`AWS::SNS::Subscription`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Subscription {
    pub topic_arn: Value,
    pub endpoint: String,
    pub protocol: SubscriptionProtocol,
}

impl Subscription {
    pub fn email(topic_arn: Value, address: impl Into<String>) -> Self {
        Self {
            topic_arn,
            endpoint: address.into(),
            protocol: SubscriptionProtocol::Email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::LogicalId;
    use serde_json::json;

    #[test]
    fn test_email_subscription_shape() {
        let topic = LogicalId::new("TopicDev").unwrap();
        let sub = Subscription::email(Value::ref_to(&topic), "abc@example.com");
        assert_eq!(
            serde_json::to_value(&sub).unwrap(),
            json!({"TopicArn": {"Ref": "TopicDev"}, "Endpoint": "abc@example.com", "Protocol": "email"})
        );
    }

    #[test]
    fn test_protocol_names() {
        assert_eq!(serde_json::to_value(SubscriptionProtocol::EmailJson).unwrap(), "email-json");
        assert_eq!(serde_json::to_value(SubscriptionProtocol::Https).unwrap(), "https");
    }
}
