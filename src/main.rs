use clap::{Parser, Subcommand};
use waf_stack::cli;
use anyhow::Result;

#[derive(Parser)]
#[command(name = "waf-stack")]
#[command(version = waf_stack::VERSION)]
#[command(about = "Declares a WAFv2 stack protecting an existing load balancer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble, validate and emit the CloudFormation template
    Synth(cli::synth::SynthArgs),

    /// Run structural checks on the assembled stack
    Validate(cli::validate::ValidateArgs),

    /// Print the dependency layers of the assembled stack
    Graph(cli::graph::GraphArgs),

    /// Configuration management
    Config(cli::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Synth(args) => cli::synth::run(args),
        Commands::Validate(args) => cli::validate::run(args),
        Commands::Graph(args) => cli::graph::run(args),
        Commands::Config(args) => cli::config::run(args),
    }
}
