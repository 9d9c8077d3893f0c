use serde::{Deserialize, Serialize};
use super::defaults::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    /// Subscriber address for alarm notifications.
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_topic_name")]
    pub topic_name: String,
    #[serde(default = "default_topic_display_name")]
    pub topic_display_name: String,
    #[serde(default = "default_passed_threshold")]
    pub passed_requests_threshold: f64,
    #[serde(default = "default_blocked_threshold")]
    pub blocked_requests_threshold: f64,
    /// Alarm period in seconds.
    #[serde(default = "default_alarm_period")]
    pub period: u32,
    /// Pre-existing topic; checked and logged, never declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existing_topic_arn: Option<String>,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            email: default_email(),
            topic_name: default_topic_name(),
            topic_display_name: default_topic_display_name(),
            passed_requests_threshold: default_passed_threshold(),
            blocked_requests_threshold: default_blocked_threshold(),
            period: default_alarm_period(),
            existing_topic_arn: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputsConfig {
    /// Export every output as `<stack_name>-<output id>`.
    #[serde(default)]
    pub export: bool,
}
