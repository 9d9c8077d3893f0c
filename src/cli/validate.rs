use super::StackArgs;
use crate::validate::validate_stack;
use anyhow::{bail, Result};
use clap::Args;

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub stack: StackArgs,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let stack = args.stack.assemble()?;
    println!("Validating stack: {}", stack.name);

    let report = validate_stack(&stack);

    for violation in &report.violations {
        println!("[X] {}", violation);
    }
    for warning in &report.warnings {
        println!("[!] {}", warning);
    }

    if !report.is_valid() {
        bail!("{} violations found", report.violations.len());
    }

    println!(
        "[OK] {} resources, {} outputs, protecting {}",
        stack.template.len(),
        stack.template.outputs().count(),
        stack.load_balancer.arn
    );
    Ok(())
}
