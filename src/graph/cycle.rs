//! Cycle detection in the relation graph.

use super::RelationGraph;
use crate::error::{Error, Result};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// On the current DFS path.
    InProgress,
    /// Fully explored, known not to lead back into the path.
    Done,
}

/// Find one cycle in the graph, if any.
///
/// Iterative three-color DFS. Start nodes and successors are visited in
/// ascending name order, so the same graph always reports the same cycle.
/// The returned path lists each member once, in edge order: for
/// `[a, b, c]` the graph has `a -> b -> c -> a`.
pub fn find_cycle(graph: &RelationGraph) -> Option<Vec<String>> {
    find_cycle_among(graph, graph.nodes())
}

/// Same as [`find_cycle`] but only starts traversals from `starts`.
pub(crate) fn find_cycle_among<'g>(
    graph: &'g RelationGraph,
    starts: impl IntoIterator<Item = &'g str>,
) -> Option<Vec<String>> {
    let mut color: HashMap<&str, Color> = HashMap::new();

    for start in starts {
        if color.contains_key(start) {
            continue;
        }

        // Each frame is a node on the current path plus its unvisited successors.
        let mut path: Vec<&str> = vec![start];
        let mut stack = vec![graph.successors(start)];
        color.insert(start, Color::InProgress);

        while let Some(successors) = stack.last_mut() {
            match successors.next() {
                Some(next) => match color.get(next).copied() {
                    None => {
                        color.insert(next, Color::InProgress);
                        path.push(next);
                        stack.push(graph.successors(next));
                    }
                    Some(Color::InProgress) => {
                        let entry = path.iter().position(|&n| n == next)?;
                        return Some(path[entry..].iter().map(|n| n.to_string()).collect());
                    }
                    Some(Color::Done) => {}
                },
                None => {
                    stack.pop();
                    if let Some(done) = path.pop() {
                        color.insert(done, Color::Done);
                    }
                }
            }
        }
    }

    None
}

/// Fail with [`Error::Cycle`] if the graph contains any cycle.
pub fn check_acyclic(graph: &RelationGraph) -> Result<()> {
    match find_cycle(graph) {
        Some(members) => Err(Error::Cycle { members }),
        None => Ok(()),
    }
}
