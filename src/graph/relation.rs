//! Adjacency-list graph of precedence constraints.

use crate::statement::{Edge, Statement};
use std::collections::{BTreeMap, BTreeSet};
use tracing::trace;

/// Directed graph mapping each node to the set of nodes it must precede.
///
/// Ordered collections keep iteration stable, which the resolver relies on
/// for reproducible output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationGraph {
    adjacency: BTreeMap<String, BTreeSet<String>>,
}

impl RelationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `from` must precede `to`, creating either node if needed.
    ///
    /// Inserting an existing edge is a no-op. Self-loops are kept so the
    /// resolver can report them as cycles.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.adjacency.entry(to.to_string()).or_default();
        let inserted = self
            .adjacency
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string());
        trace!(from, to, inserted, "add edge");
    }

    pub fn add_statement(&mut self, statement: &Statement) {
        let Edge { from, to } = statement.edge();
        self.add_edge(&from, &to);
    }

    /// All nodes seen so far, in ascending name order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Direct successors of `node`; empty for unknown nodes.
    pub fn successors<'a>(&'a self, node: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|succ| succ.iter().map(String::as_str))
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum()
    }

    /// Every edge, ordered by `(from, to)`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(from, succ)| succ.iter().map(move |to| Edge::new(from, to)))
    }

    /// Number of incoming edges per node. Nodes with no predecessors map to 0.
    pub fn in_degrees(&self) -> BTreeMap<&str, usize> {
        let mut in_degree: BTreeMap<&str, usize> =
            self.adjacency.keys().map(|n| (n.as_str(), 0)).collect();
        for succ in self.adjacency.values() {
            for to in succ {
                *in_degree.entry(to.as_str()).or_insert(0) += 1;
            }
        }
        in_degree
    }
}

impl<'a> FromIterator<&'a Statement> for RelationGraph {
    fn from_iter<T: IntoIterator<Item = &'a Statement>>(iter: T) -> Self {
        let mut graph = RelationGraph::new();
        for statement in iter {
            graph.add_statement(statement);
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::parse_statement;

    #[test]
    fn test_add_edge_creates_nodes() {
        let mut graph = RelationGraph::new();
        graph.add_edge("A", "B");

        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(graph.successors("A").collect::<Vec<_>>(), vec!["B"]);
        assert_eq!(graph.successors("B").count(), 0);
        assert_eq!(graph.successors("missing").count(), 0);
    }

    #[test]
    fn test_add_edge_idempotent() {
        let mut once = RelationGraph::new();
        once.add_edge("A", "B");

        let mut twice = RelationGraph::new();
        twice.add_edge("A", "B");
        twice.add_edge("A", "B");

        assert_eq!(once, twice);
        assert_eq!(twice.successors("A").count(), 1);
        assert_eq!(twice.edge_count(), 1);
    }

    #[test]
    fn test_directed() {
        let mut graph = RelationGraph::new();
        graph.add_edge("A", "B");
        assert_eq!(graph.successors("B").count(), 0);
    }

    #[test]
    fn test_self_loop_is_kept() {
        let mut graph = RelationGraph::new();
        graph.add_edge("A", "A");
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.successors("A").collect::<Vec<_>>(), vec!["A"]);
    }

    #[test]
    fn test_statements_normalize_direction() {
        let statements = vec![
            parse_statement("Francos comes before Anglos").unwrap(),
            parse_statement("Canadio comes after Barbadonia").unwrap(),
            parse_statement("Canadio comes after Barbadonia").unwrap(),
        ];
        let graph: RelationGraph = statements.iter().collect();

        assert_eq!(
            graph.edges().collect::<Vec<_>>(),
            vec![
                Edge::new("Barbadonia", "Canadio"),
                Edge::new("Francos", "Anglos"),
            ]
        );
    }

    #[test]
    fn test_in_degrees() {
        let mut graph = RelationGraph::new();
        graph.add_edge("A", "C");
        graph.add_edge("B", "C");
        graph.add_edge("C", "D");

        let in_degree = graph.in_degrees();
        assert_eq!(in_degree["A"], 0);
        assert_eq!(in_degree["B"], 0);
        assert_eq!(in_degree["C"], 2);
        assert_eq!(in_degree["D"], 1);
    }
}
