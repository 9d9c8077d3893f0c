pub mod config;
pub mod graph;
pub mod synth;
pub mod validate;

pub use config::ConfigArgs;
pub use graph::GraphArgs;
pub use synth::SynthArgs;
pub use validate::ValidateArgs;

use crate::assembler::{Stack, StackAssembler};
use crate::config::validator::has_errors;
use crate::logging;
use crate::lookup::{Inventory, LoadBalancer, LoadBalancerDirectory, PinnedLoadBalancer};
use crate::Config;
use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Options shared by every command that assembles a stack.
#[derive(Args, Debug, Clone)]
pub struct StackArgs {
    /// Configuration file
    #[arg(short, long)]
    pub config: PathBuf,

    /// Load balancer inventory JSON, overriding `load_balancer.inventory`
    #[arg(short, long)]
    pub inventory: Option<PathBuf>,

    /// Environment label, overriding `environment`
    #[arg(short, long)]
    pub environment: Option<String>,
}

impl StackArgs {
    /// Read the configuration, apply overrides, refuse a configuration with
    /// errors and start logging. Findings go to stderr so stdout stays a template.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::from_file(&self.config)?;
        if let Some(ref env) = self.environment {
            config.environment = Some(env.clone());
        }
        if let Some(ref inventory) = self.inventory {
            config.load_balancer.inventory = Some(inventory.clone());
        }

        let warnings = config.validate()?;
        for warning in &warnings {
            eprintln!("{}", warning);
        }
        if has_errors(&warnings) {
            bail!("Configuration has errors: {}", self.config.display());
        }

        logging::init_logging(&config.logging.level, &config.logging.format)?;
        info!("Loaded configuration from {}", self.config.display());
        Ok(config)
    }

    /// Where the load balancer comes from: a pinned ARN, the `--inventory`
    /// file, or the inventory named in the configuration, in that order.
    pub fn directory(&self, config: &Config) -> Result<Box<dyn LoadBalancerDirectory>> {
        if let Some(ref arn) = config.load_balancer.arn {
            info!("Using pinned load balancer {}", arn);
            return Ok(Box::new(PinnedLoadBalancer(LoadBalancer::new(arn.clone()))));
        }

        match self.inventory.as_ref().or(config.load_balancer.inventory.as_ref()) {
            Some(path) => Ok(Box::new(Inventory::from_file(path)?)),
            None => bail!(
                "No load balancer source: pass --inventory or set load_balancer.inventory or load_balancer.arn"
            ),
        }
    }

    pub fn assemble(&self) -> Result<Stack> {
        let config = self.load_config()?;
        let directory = self.directory(&config)?;
        let stack = StackAssembler::new(&config, directory.as_ref())
            .assemble()
            .context("Failed to assemble stack")?;
        Ok(stack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_arn_wins() {
        let args = StackArgs {
            config: PathBuf::from("stack.toml"),
            inventory: Some(PathBuf::from("/nonexistent/inventory.json")),
            environment: None,
        };
        let mut config = Config::default();
        config.load_balancer.arn = Some(
            "arn:aws:elasticloadbalancing:us-east-1:123456789012:loadbalancer/app/shop/50dc6c495c0c9188".to_string(),
        );
        let directory = args.directory(&config).unwrap();
        let lb = directory.find_by_tags(&config.load_balancer.tags).unwrap();
        assert!(lb.arn.ends_with("app/shop/50dc6c495c0c9188"));
    }

    #[test]
    fn test_config_errors_refused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stack.toml");
        std::fs::write(&path, "scope = \"CLOUDFRONT\"\n[logging]\nlevel = \"error\"\n").unwrap();
        let args = StackArgs {
            config: path,
            inventory: None,
            environment: None,
        };
        let err = args.load_config().unwrap_err();
        assert!(err.to_string().contains("Configuration has errors"));
    }

    #[test]
    fn test_missing_source_rejected() {
        let args = StackArgs {
            config: PathBuf::from("stack.toml"),
            inventory: None,
            environment: None,
        };
        let err = args.directory(&Config::default()).err().unwrap();
        assert!(err.to_string().contains("No load balancer source"));
    }
}
