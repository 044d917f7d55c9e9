use anyhow::Result;
use colored::*;
use krane_core::manager::BuildManager;

pub fn execute(manager: &BuildManager) -> Result<()> {
    println!("{}", "Project Dependency Graph:".bold().underline());

    let result = manager.dependency_graph();
    let graph = &result.graph;

    if !result.cycles.is_empty() {
        let cycles_description = result
            .cycles
            .iter()
            .map(|cycle| {
                let mut path = cycle.clone();
                if let Some(first) = path.first().cloned() {
                    path.push(first);
                }
                path.join(" -> ")
            })
            .collect::<Vec<_>>()
            .join("; ");

        println!(
            "{} {}",
            "Warning:".yellow().bold(),
            format!("Circular dependencies detected: {}", cycles_description).yellow()
        );
    }

    for (node_index, node_weight) in graph.node_indices().zip(graph.node_weights()) {
        // The root project carries no dependencies of its own
        if node_weight == ":" {
            continue;
        }

        println!("{}", node_weight.blue().bold());

        let mut deps = Vec::new();
        for edge in graph.edge_indices() {
            if let Some((from, to)) = graph.edge_endpoints(edge) {
                if from == node_index {
                    deps.push(format!("{} ({})", graph[to], graph[edge]));
                }
            }
        }

        if !deps.is_empty() {
            println!("  {} {}", "depends on:".dimmed(), deps.join(", "));
        } else {
            println!("  {}", "no dependencies".dimmed());
        }
        println!();
    }

    Ok(())
}
