use crate::template::Value;
use serde::{Deserialize, Serialize};

pub const WAF_NAMESPACE: &str = "AWS/WAFV2";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOperator {
    GreaterThanOrEqualToThreshold,
    GreaterThanThreshold,
    LessThanThreshold,
    LessThanOrEqualToThreshold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statistic {
    Sum,
    Average,
    Maximum,
    Minimum,
    SampleCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TreatMissingData {
    Missing,
    Breaching,
    NotBreaching,
    Ignore,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dimension {
    pub name: String,
    pub value: String,
}

impl Dimension {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Threshold monitor on a metric (`AWS::CloudWatch::Alarm`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Alarm {
    pub comparison_operator: ComparisonOperator,
    pub evaluation_periods: u32,
    pub actions_enabled: bool,
    pub alarm_actions: Vec<Value>,
    pub alarm_description: String,
    pub alarm_name: String,
    pub datapoints_to_alarm: u32,
    pub dimensions: Vec<Dimension>,
    pub metric_name: String,
    pub namespace: String,
    pub period: u32,
    pub statistic: Statistic,
    pub threshold: f64,
    pub treat_missing_data: TreatMissingData,
}

impl Alarm {
    /// A one-period `Sum >= threshold` alarm on a WAFv2 metric.
    pub fn waf_sum(
        alarm_name: impl Into<String>,
        metric_name: impl Into<String>,
        threshold: f64,
        period: u32,
    ) -> Self {
        Self {
            comparison_operator: ComparisonOperator::GreaterThanOrEqualToThreshold,
            evaluation_periods: 1,
            actions_enabled: true,
            alarm_actions: Vec::new(),
            alarm_description: String::new(),
            alarm_name: alarm_name.into(),
            datapoints_to_alarm: 1,
            dimensions: Vec::new(),
            metric_name: metric_name.into(),
            namespace: WAF_NAMESPACE.to_string(),
            period,
            statistic: Statistic::Sum,
            threshold,
            treat_missing_data: TreatMissingData::Missing,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.alarm_description = description.into();
        self
    }

    pub fn with_dimension(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.dimensions.push(Dimension::new(name, value));
        self
    }

    pub fn with_action(mut self, action: Value) -> Self {
        self.alarm_actions.push(action);
        self
    }
}
