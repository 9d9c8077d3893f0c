//! Lookup of the existing load balancer the web ACL is attached to.
//!
//! The stack never creates the load balancer. It resolves one by tag filter
//! from a directory: an inventory document exported from the account, or a
//! single ARN pinned in configuration.

use crate::error::StackError;
use crate::template::Arn;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancer {
    pub arn: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl LoadBalancer {
    pub fn new(arn: impl Into<String>) -> Self {
        Self {
            arn: arn.into(),
            name: None,
            tags: BTreeMap::new(),
        }
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Every requested tag is present with an equal value.
    pub fn matches(&self, tags: &BTreeMap<String, String>) -> bool {
        tags.iter().all(|(k, v)| self.tags.get(k) == Some(v))
    }
}

pub trait LoadBalancerDirectory {
    /// Resolve exactly one application load balancer carrying `tags`.
    fn find_by_tags(&self, tags: &BTreeMap<String, String>) -> Result<LoadBalancer, StackError>;
}

/// Known load balancers, usually read from an inventory JSON document:
///
/// ```json
/// {"load_balancers": [{"arn": "arn:aws:elasticloadbalancing:...", "tags": {"application": "shop"}}]}
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub load_balancers: Vec<LoadBalancer>,
}

impl Inventory {
    pub fn new(load_balancers: Vec<LoadBalancer>) -> Self {
        Self { load_balancers }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read load balancer inventory: {}", path.display()))?;

        let inventory: Inventory = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse load balancer inventory: {}", path.display()))?;

        debug!(
            "Loaded {} load balancers from {}",
            inventory.load_balancers.len(),
            path.display()
        );
        Ok(inventory)
    }
}

impl LoadBalancerDirectory for Inventory {
    fn find_by_tags(&self, tags: &BTreeMap<String, String>) -> Result<LoadBalancer, StackError> {
        let matched: Vec<&LoadBalancer> = self
            .load_balancers
            .iter()
            .filter(|lb| lb.matches(tags))
            .collect();

        match matched.as_slice() {
            [] => Err(StackError::LoadBalancerNotFound(format_tags(tags))),
            [lb] => {
                Arn::parse_application_load_balancer(&lb.arn)?;
                Ok((*lb).clone())
            }
            many => Err(StackError::AmbiguousLoadBalancer {
                tags: format_tags(tags),
                count: many.len(),
            }),
        }
    }
}

/// A load balancer fixed by ARN; the tag filter is ignored.
#[derive(Debug, Clone)]
pub struct PinnedLoadBalancer(pub LoadBalancer);

impl LoadBalancerDirectory for PinnedLoadBalancer {
    fn find_by_tags(&self, _tags: &BTreeMap<String, String>) -> Result<LoadBalancer, StackError> {
        Arn::parse_application_load_balancer(&self.0.arn)?;
        Ok(self.0.clone())
    }
}

pub fn format_tags(tags: &BTreeMap<String, String>) -> String {
    let pairs: Vec<String> = tags.iter().map(|(k, v)| format!("{}={:?}", k, v)).collect();
    format!("{{{}}}", pairs.join(", "))
}
