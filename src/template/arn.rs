use crate::error::StackError;
use std::fmt;
use std::str::FromStr;

/// A parsed Amazon Resource Name.
///
/// `arn:<partition>:<service>:<region>:<account>:<resource>`. Region and
/// account may be empty (global services); the other parts may not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arn {
    pub partition: String,
    pub service: String,
    pub region: String,
    pub account: String,
    pub resource: String,
}

impl Arn {
    pub fn parse(s: &str) -> Result<Self, StackError> {
        let invalid = |reason: &str| StackError::InvalidArn {
            arn: s.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = s.splitn(6, ':').collect();
        if parts.len() != 6 {
            return Err(invalid("expected six ':'-separated parts"));
        }
        if parts[0] != "arn" {
            return Err(invalid("must start with 'arn:'"));
        }
        if parts[1].is_empty() {
            return Err(invalid("partition is empty"));
        }
        if parts[2].is_empty() {
            return Err(invalid("service is empty"));
        }
        if parts[5].is_empty() {
            return Err(invalid("resource is empty"));
        }

        Ok(Self {
            partition: parts[1].to_string(),
            service: parts[2].to_string(),
            region: parts[3].to_string(),
            account: parts[4].to_string(),
            resource: parts[5].to_string(),
        })
    }

    /// Parse and require the ARN of an application load balancer.
    pub fn parse_application_load_balancer(s: &str) -> Result<Self, StackError> {
        let arn = Self::parse(s)?;
        if arn.service != "elasticloadbalancing" || !arn.resource.starts_with("loadbalancer/app/") {
            return Err(StackError::InvalidArn {
                arn: s.to_string(),
                reason: "not an application load balancer ARN".to_string(),
            });
        }
        Ok(arn)
    }

    /// Parse and require the ARN of an SNS topic.
    pub fn parse_sns_topic(s: &str) -> Result<Self, StackError> {
        let arn = Self::parse(s)?;
        if arn.service != "sns" || arn.resource.contains(':') {
            return Err(StackError::InvalidArn {
                arn: s.to_string(),
                reason: "not an SNS topic ARN".to_string(),
            });
        }
        Ok(arn)
    }
}

impl FromStr for Arn {
    type Err = StackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Arn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arn:{}:{}:{}:{}:{}",
            self.partition, self.service, self.region, self.account, self.resource
        )
    }
}
