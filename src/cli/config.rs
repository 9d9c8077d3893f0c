use clap::{Args, Subcommand};
use anyhow::{bail, Result};
use crate::config::parser::save_config;
use crate::config::validator::has_errors;
use crate::Config;
use std::path::PathBuf;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Parse a configuration and report problems
    Check {
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Write a configuration holding every default
    Init {
        #[arg(short, long, default_value = "waf-stack.toml")]
        output: PathBuf,

        #[arg(short, long)]
        environment: Option<String>,

        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommand::Check { config } => {
            println!("Checking configuration: {}", config.display());

            let cfg = Config::from_file(&config)?;
            let warnings = cfg.validate()?;

            if warnings.is_empty() {
                println!("[OK] Configuration is valid!");
                return Ok(());
            }

            println!("Configuration loaded with warnings:\n");
            for warning in &warnings {
                println!("{}", warning);
            }

            if has_errors(&warnings) {
                bail!("Configuration has errors");
            }
            Ok(())
        }

        ConfigCommand::Init { output, environment, force } => {
            if output.exists() && !force {
                bail!("{} already exists; pass --force to replace it", output.display());
            }

            let cfg = Config::for_environment(environment.as_deref());
            save_config(&cfg, &output)?;

            println!("[OK] Default configuration written to {}", output.display());
            println!("Set load_balancer.tags and monitoring.email before running synth.");
            Ok(())
        }
    }
}
