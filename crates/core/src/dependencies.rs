//! Dependency declarations and graph construction.
//!
//! Extensions and build scripts declare dependencies into a [`DependencyTable`],
//! an append-only ledger of (consumer, target, configuration) triples. The
//! table records every declaration as-is; collapsing duplicates and detecting
//! cycles happens when the graph is built from it after the configuration
//! pass.

use std::collections::HashMap;

use krane_extension_protocol::{Configuration, ProjectPath};
use petgraph::algo::kosaraju_scc;
use petgraph::prelude::*;

use crate::project::ProjectTree;
use crate::types::{KraneError, KraneResult};

/// A single dependency declaration recorded during configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyDeclaration {
    pub consumer: ProjectPath,
    pub target: ProjectPath,
    pub configuration: Configuration,
}

/// Append-only ledger of dependency declarations.
///
/// The table never deduplicates: declaring the same edge twice records two
/// entries. Tests and tooling can therefore observe exactly how many times a
/// declaration was made.
#[derive(Debug, Default)]
pub struct DependencyTable {
    declarations: Vec<DependencyDeclaration>,
}

impl DependencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a dependency from `consumer` on `target` under `configuration`.
    pub fn declare(
        &mut self,
        consumer: ProjectPath,
        configuration: Configuration,
        target: ProjectPath,
    ) {
        self.declarations.push(DependencyDeclaration {
            consumer,
            target,
            configuration,
        });
    }

    /// All declarations in the order they were recorded.
    #[must_use]
    pub fn declarations(&self) -> &[DependencyDeclaration] {
        &self.declarations
    }

    /// Number of declarations matching the given triple exactly.
    #[must_use]
    pub fn count_matching(
        &self,
        consumer: &ProjectPath,
        target: &ProjectPath,
        configuration: Configuration,
    ) -> usize {
        self.declarations
            .iter()
            .filter(|d| {
                &d.consumer == consumer
                    && &d.target == target
                    && d.configuration == configuration
            })
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }
}

/// The dependency graph built from a table after configuration.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    pub graph: DiGraph<String, Configuration>,
    pub cycles: Vec<Vec<String>>,
}

/// Build the dependency graph from the recorded declarations.
///
/// Every registered project becomes a node; every declaration becomes an
/// edge labelled with its configuration. Cycles are detected via strongly
/// connected components and reported on the result rather than treated as
/// errors, so callers decide how to surface them.
///
/// # Errors
///
/// Returns an error if a declaration targets a project that is not
/// registered in the tree.
pub fn build_dependency_graph(
    tree: &ProjectTree,
    table: &DependencyTable,
) -> KraneResult<DependencyGraph> {
    let mut graph = DiGraph::<String, Configuration>::new();
    let mut node_indices = HashMap::new();

    // Add all projects as nodes
    for node in tree.nodes() {
        let node_index = graph.add_node(node.path.as_str().to_string());
        node_indices.insert(node.path.clone(), node_index);
    }

    // Add edges for declarations
    for declaration in table.declarations() {
        let Some(&from_node) = node_indices.get(&declaration.consumer) else {
            return Err(KraneError::Project(format!(
                "Dependency on '{}' is declared by '{}' which was not found",
                declaration.target, declaration.consumer
            )));
        };
        let Some(&to_node) = node_indices.get(&declaration.target) else {
            return Err(KraneError::Project(format!(
                "Project '{}' declares a dependency on '{}' which was not found",
                declaration.consumer, declaration.target
            )));
        };
        // Edge direction: consumer -> target (target is configured first)
        graph.add_edge(from_node, to_node, declaration.configuration);
    }

    // Detect cycles using strongly connected components
    let mut cycles: Vec<Vec<String>> = kosaraju_scc(&graph)
        .into_iter()
        .filter_map(|component| {
            if component.len() > 1 {
                let mut cycle = component
                    .iter()
                    .map(|node| graph[*node].clone())
                    .collect::<Vec<_>>();
                cycle.sort();
                Some(cycle)
            } else {
                let node = component[0];
                if graph.contains_edge(node, node) {
                    Some(vec![graph[node].clone()])
                } else {
                    None
                }
            }
        })
        .collect();

    cycles.sort();

    Ok(DependencyGraph { graph, cycles })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(p: &str) -> ProjectPath {
        ProjectPath::new(p).unwrap()
    }

    fn tree_with(paths: &[&str]) -> ProjectTree {
        let mut tree = ProjectTree::new();
        for p in paths {
            tree.register(path(p)).unwrap();
        }
        tree
    }

    #[test]
    fn table_records_every_declaration() {
        let mut table = DependencyTable::new();
        table.declare(path(":app"), Configuration::Implementation, path(":api"));
        table.declare(path(":app"), Configuration::Implementation, path(":api"));

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.count_matching(&path(":app"), &path(":api"), Configuration::Implementation),
            2
        );
        assert_eq!(
            table.count_matching(&path(":app"), &path(":api"), Configuration::Api),
            0
        );
    }

    #[test]
    fn graph_contains_declared_edges() {
        let tree = tree_with(&[":app", ":api"]);
        let mut table = DependencyTable::new();
        table.declare(path(":app"), Configuration::Implementation, path(":api"));

        let result = build_dependency_graph(&tree, &table).unwrap();
        assert_eq!(result.graph.edge_count(), 1);
        assert!(result.cycles.is_empty());

        let (from, to) = result
            .graph
            .edge_indices()
            .map(|e| result.graph.edge_endpoints(e).unwrap())
            .next()
            .unwrap();
        assert_eq!(result.graph[from], ":app");
        assert_eq!(result.graph[to], ":api");
    }

    #[test]
    fn unknown_target_is_an_error() {
        let tree = tree_with(&[":app"]);
        let mut table = DependencyTable::new();
        table.declare(path(":app"), Configuration::Implementation, path(":api"));

        let err = build_dependency_graph(&tree, &table).unwrap_err();
        assert!(err.to_string().contains("':api'"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn unknown_consumer_is_an_error() {
        let tree = tree_with(&[":api"]);
        let mut table = DependencyTable::new();
        table.declare(path(":app"), Configuration::Implementation, path(":api"));

        let err = build_dependency_graph(&tree, &table).unwrap_err();
        assert!(err.to_string().contains("':app'"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn cycles_are_detected_and_reported() {
        let tree = tree_with(&[":a", ":b"]);
        let mut table = DependencyTable::new();
        table.declare(path(":a"), Configuration::Implementation, path(":b"));
        table.declare(path(":b"), Configuration::Implementation, path(":a"));

        let result = build_dependency_graph(&tree, &table).unwrap();
        assert_eq!(result.cycles.len(), 1);
        assert_eq!(result.cycles[0], vec![":a".to_string(), ":b".to_string()]);
    }

    #[test]
    fn self_dependency_is_a_cycle() {
        let tree = tree_with(&[":a"]);
        let mut table = DependencyTable::new();
        table.declare(path(":a"), Configuration::Implementation, path(":a"));

        let result = build_dependency_graph(&tree, &table).unwrap();
        assert_eq!(result.cycles, vec![vec![":a".to_string()]]);
    }
}
