use stepwise_core::{ConversationGraph, DialogNode};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct GraphInput {
    /// Only report dangling option targets
    pub check: bool,
    /// Restrict output to one node
    pub node: Option<String>,
}

/// Strategy for inspecting the built-in conversation graph.
#[derive(Debug, Clone, Copy)]
pub struct GraphStrategy;

impl super::CommandStrategy for GraphStrategy {
    type Input = GraphInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let graph = ConversationGraph::builtin();

        if input.check {
            let dangling = graph.dangling_references();
            if dangling.is_empty() {
                println!("All {} nodes resolve.", graph.len());
                return Ok(());
            }
            for (node, target) in &dangling {
                warn!("Option of {node} points to missing node {target}");
                println!("{node} -> {target} (missing)");
            }
            anyhow::bail!("{} dangling option targets", dangling.len());
        }

        if let Some(id) = input.node {
            let node = graph
                .get_node(&id)
                .ok_or_else(|| anyhow::anyhow!("Unknown node: {id}"))?;
            print_node(node);
            return Ok(());
        }

        for node in graph.nodes() {
            print_node(node);
        }
        Ok(())
    }
}

fn print_node(node: &DialogNode) {
    println!("[{}] {}", node.id, node.text);
    if !node.tags.is_empty() {
        println!("  tags: {}", node.tags.join(", "));
    }
    for option in &node.options {
        println!("  -> {:<22} {}", option.id, option.text);
    }
    println!();
}
