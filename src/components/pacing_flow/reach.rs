use std::collections::{HashSet, VecDeque};

use super::graph::FlowGraph;
use super::types::EdgeKey;

/// Nodes and edges forward-reachable from a selected node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReachSet {
	pub nodes: HashSet<String>,
	pub edges: HashSet<EdgeKey>,
}

impl ReachSet {
	pub fn contains_node(&self, id: &str) -> bool {
		self.nodes.contains(id)
	}

	pub fn contains_edge(&self, from: &str, to: &str) -> bool {
		self.edges.contains(&EdgeKey::new(from, to))
	}
}

/// Breadth-first walk along outgoing edges from `start`.
///
/// The start node is always part of the result. A node is expanded at most
/// once, so cycles terminate. Unknown start ids yield a set holding only
/// the id itself.
pub fn reachable_from(graph: &FlowGraph, start: &str) -> ReachSet {
	let mut reach = ReachSet::default();
	let mut queue = VecDeque::from([start.to_string()]);

	while let Some(id) = queue.pop_front() {
		if !reach.nodes.insert(id.clone()) {
			continue;
		}
		for edge in graph.outgoing_edges(&id) {
			reach.edges.insert(edge.key());
			if !reach.nodes.contains(&edge.to) {
				queue.push_back(edge.to.clone());
			}
		}
	}
	reach
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::pacing_flow::types::{EdgeSpec, GridPos, NodeSpec, Role};
	use pretty_assertions::assert_eq;

	fn graph(ids: &[&'static str], edges: &[EdgeSpec]) -> FlowGraph {
		let nodes: Vec<NodeSpec> = ids
			.iter()
			.map(|&id| NodeSpec {
				id,
				title: id,
				subtitle: "",
				role: Role::Data,
				pos: GridPos::new(0.0, 0.0),
				notes: &[],
			})
			.collect();
		FlowGraph::from_specs(&nodes, edges).unwrap()
	}

	fn ids(reach: &ReachSet) -> Vec<&str> {
		let mut out: Vec<&str> = reach.nodes.iter().map(String::as_str).collect();
		out.sort_unstable();
		out
	}

	#[test]
	fn includes_start_node() {
		let g = graph(&["a", "b"], &[EdgeSpec::plain("b", "a")]);
		assert_eq!(ids(&reachable_from(&g, "a")), vec!["a"]);
		assert!(reachable_from(&g, "a").edges.is_empty());
	}

	#[test]
	fn follows_outgoing_edges_only() {
		let g = graph(
			&["a", "b", "c", "d"],
			&[
				EdgeSpec::plain("a", "b"),
				EdgeSpec::plain("b", "c"),
				EdgeSpec::plain("d", "b"),
			],
		);
		let reach = reachable_from(&g, "b");
		assert_eq!(ids(&reach), vec!["b", "c"]);
		assert!(reach.contains_edge("b", "c"));
		assert!(!reach.contains_edge("a", "b"));
		assert!(!reach.contains_edge("d", "b"));
	}

	#[test]
	fn terminates_on_cycles() {
		let g = graph(
			&["a", "b", "c"],
			&[
				EdgeSpec::plain("a", "b"),
				EdgeSpec::plain("b", "c"),
				EdgeSpec::plain("c", "a"),
				EdgeSpec::plain("c", "c"),
			],
		);
		let reach = reachable_from(&g, "b");
		assert_eq!(ids(&reach), vec!["a", "b", "c"]);
		assert_eq!(reach.edges.len(), 4);
	}

	#[test]
	fn diamond_visits_join_once() {
		let g = graph(
			&["a", "b", "c", "d"],
			&[
				EdgeSpec::plain("a", "b"),
				EdgeSpec::plain("a", "c"),
				EdgeSpec::plain("b", "d"),
				EdgeSpec::plain("c", "d"),
				EdgeSpec::plain("c", "d"),
			],
		);
		let reach = reachable_from(&g, "a");
		assert_eq!(reach.nodes.len(), 4);
		// the duplicated c->d collapses into one key
		assert_eq!(reach.edges.len(), 4);
	}

	#[test]
	fn repeated_calls_agree() {
		let g = graph(&["a", "b"], &[EdgeSpec::plain("a", "b")]);
		assert_eq!(reachable_from(&g, "a"), reachable_from(&g, "a"));
	}
}
