use super::StackArgs;
use crate::validate::validate_stack;
use anyhow::{bail, Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct SynthArgs {
    #[command(flatten)]
    pub stack: StackArgs,

    /// Write the template here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: SynthArgs) -> Result<()> {
    let stack = args.stack.assemble()?;

    let report = validate_stack(&stack);
    if !report.is_valid() {
        for violation in &report.violations {
            eprintln!("[X] {}", violation);
        }
        bail!(
            "Stack {} has {} violations; template not written",
            stack.name,
            report.violations.len()
        );
    }
    // Stack warnings already reach stderr through the log.
    let content = stack
        .template
        .to_json_pretty()
        .context("Failed to serialize template")?;

    match args.output {
        Some(path) => {
            fs::write(&path, format!("{}\n", content))
                .with_context(|| format!("Failed to write template: {}", path.display()))?;
            info!("Wrote {} resources to {}", stack.template.len(), path.display());
            println!("[OK] Template for {} written to {}", stack.name, path.display());
        }
        None => println!("{}", content),
    }

    Ok(())
}
