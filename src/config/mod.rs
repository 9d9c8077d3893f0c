mod defaults;
pub mod load_balancer;
pub mod logging;
pub mod monitoring;
pub mod parser;
pub mod types;
pub mod validator;
pub mod waf;

pub use load_balancer::LoadBalancerConfig;
pub use logging::LoggingConfig;
pub use monitoring::{MonitoringConfig, OutputsConfig};
pub use types::DefaultVerdict;
pub use waf::{IpSetsConfig, PatternsConfig, RuleGroupsConfig, WebAclConfig};

use crate::wafv2::Scope;
use anyhow::Result;
use defaults::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Label appended to every name (`dev` gives `url-path-dev`). Unset for production.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_stack_name")]
    pub stack_name: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default)]
    pub scope: Scope,
    #[serde(default)]
    pub load_balancer: LoadBalancerConfig,
    #[serde(default)]
    pub ip_sets: IpSetsConfig,
    #[serde(default)]
    pub patterns: PatternsConfig,
    #[serde(default)]
    pub rule_groups: RuleGroupsConfig,
    #[serde(default)]
    pub web_acl: WebAclConfig,
    #[serde(default)]
    pub monitoring: MonitoringConfig,
    #[serde(default)]
    pub outputs: OutputsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: None,
            region: default_region(),
            stack_name: default_stack_name(),
            description: default_description(),
            scope: Scope::default(),
            load_balancer: LoadBalancerConfig::default(),
            ip_sets: IpSetsConfig::default(),
            patterns: PatternsConfig::default(),
            rule_groups: RuleGroupsConfig::default(),
            web_acl: WebAclConfig::default(),
            monitoring: MonitoringConfig::default(),
            outputs: OutputsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        parser::parse_config(path)
    }

    pub fn validate(&self) -> Result<Vec<String>> {
        validator::validate_config(self)
    }

    pub fn for_environment(environment: Option<&str>) -> Self {
        Self::default().with_environment(environment)
    }

    pub fn with_environment(mut self, environment: Option<&str>) -> Self {
        self.environment = environment.map(str::to_string);
        self
    }

    /// The environment label, if one is set and non-blank.
    pub fn environment(&self) -> Option<&str> {
        self.environment
            .as_deref()
            .map(str::trim)
            .filter(|env| !env.is_empty())
    }

    /// `base-<env>`, or `base` without an environment.
    pub fn suffixed(&self, base: &str) -> String {
        match self.environment() {
            Some(env) => format!("{}-{}", base, env),
            None => base.to_string(),
        }
    }

    /// `Base <Env>` for human-readable names such as alarm titles.
    pub fn titled(&self, base: &str) -> String {
        match self.environment() {
            Some(env) => {
                let mut chars = env.chars();
                let title: String = match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                };
                format!("{} {}", base, title)
            }
            None => base.to_string(),
        }
    }

    /// ` on <env>` for descriptions.
    pub fn on_environment(&self) -> String {
        match self.environment() {
            Some(env) => format!(" on {}", env),
            None => String::new(),
        }
    }

    pub fn web_acl_name(&self) -> String {
        match (&self.web_acl.name, self.environment()) {
            (Some(name), _) => name.clone(),
            (None, Some(env)) => format!("{}-acl", env),
            (None, None) => "waf-acl".to_string(),
        }
    }
}
