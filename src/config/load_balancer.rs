use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use super::defaults::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadBalancerConfig {
    /// Inventory JSON the lookup resolves against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<PathBuf>,
    /// Pins the load balancer and skips the lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// Tag filter the target load balancer must match.
    #[serde(default = "default_lb_tags")]
    pub tags: BTreeMap<String, String>,
}

impl Default for LoadBalancerConfig {
    fn default() -> Self {
        Self {
            tags: default_lb_tags(),
            inventory: None,
            arn: None,
        }
    }
}
