use super::StackArgs;
use crate::graph::ResourceGraph;
use anyhow::{Context, Result};
use clap::Args;
use std::collections::HashMap;

#[derive(Args)]
pub struct GraphArgs {
    #[command(flatten)]
    pub stack: StackArgs,
}

pub fn run(args: GraphArgs) -> Result<()> {
    let stack = args.stack.assemble()?;
    let graph = ResourceGraph::from_template(&stack.template).context("Failed to build dependency graph")?;
    let types: HashMap<&str, &str> = graph.nodes().collect();

    println!("=== Dependency graph: {} ===", stack.name);
    println!();
    println!("Resources: {}  Edges: {}", graph.len(), graph.edge_count());

    for (depth, layer) in graph.dependency_layers()?.iter().enumerate() {
        println!();
        println!("Layer {}:", depth);
        for id in layer {
            let dependencies = graph.dependencies_of(id).unwrap_or_default();
            if dependencies.is_empty() {
                println!("  {} ({})", id, types.get(id).copied().unwrap_or("?"));
            } else {
                println!(
                    "  {} ({}) <- {}",
                    id,
                    types.get(id).copied().unwrap_or("?"),
                    dependencies.join(", ")
                );
            }
        }
    }

    println!();
    println!("Terminal nodes:");
    for id in graph.terminal_nodes() {
        println!("  {}", id);
    }

    Ok(())
}
