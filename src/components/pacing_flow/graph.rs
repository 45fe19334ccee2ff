use std::collections::HashMap;

use log::info;

use super::error::{FlowError, FlowResult};
use super::types::{EdgeSpec, FlowEdge, FlowNode, NodeSpec};

/// The workflow graph: nodes, edges and an outgoing-edge index built once at
/// construction and read-only afterwards.
#[derive(Clone, Debug)]
pub struct FlowGraph {
	nodes: Vec<FlowNode>,
	edges: Vec<FlowEdge>,
	id_to_idx: HashMap<String, usize>,
	// node index -> edge indices, in edge declaration order
	outgoing: Vec<Vec<usize>>,
}

impl FlowGraph {
	/// Builds the graph, refusing duplicate node ids and edges whose
	/// endpoints are not declared nodes.
	pub fn new(nodes: Vec<FlowNode>, edges: Vec<FlowEdge>) -> FlowResult<Self> {
		if nodes.is_empty() {
			return Err(FlowError::EmptyGraph);
		}

		let mut id_to_idx = HashMap::with_capacity(nodes.len());
		for (i, node) in nodes.iter().enumerate() {
			if id_to_idx.insert(node.id.clone(), i).is_some() {
				return Err(FlowError::DuplicateNode {
					id: node.id.clone(),
				});
			}
		}

		let mut outgoing = vec![Vec::new(); nodes.len()];
		for (e, edge) in edges.iter().enumerate() {
			let Some(&src) = id_to_idx.get(&edge.from) else {
				return Err(FlowError::unknown_endpoint(&edge.from, &edge.to, &edge.from));
			};
			if !id_to_idx.contains_key(&edge.to) {
				return Err(FlowError::unknown_endpoint(&edge.from, &edge.to, &edge.to));
			}
			outgoing[src].push(e);
		}

		info!(
			"Flow graph built: {} nodes, {} edges",
			nodes.len(),
			edges.len()
		);

		Ok(Self {
			nodes,
			edges,
			id_to_idx,
			outgoing,
		})
	}

	/// Builds the graph from static configuration tables.
	pub fn from_specs(nodes: &[NodeSpec], edges: &[EdgeSpec]) -> FlowResult<Self> {
		Self::new(
			nodes.iter().map(FlowNode::from).collect(),
			edges.iter().map(FlowEdge::from).collect(),
		)
	}

	pub fn node_by_id(&self, id: &str) -> FlowResult<&FlowNode> {
		self.id_to_idx
			.get(id)
			.map(|&i| &self.nodes[i])
			.ok_or_else(|| FlowError::node_not_found(id))
	}

	pub fn contains(&self, id: &str) -> bool {
		self.id_to_idx.contains_key(id)
	}

	/// Edges leaving `id` in declaration order. Empty for sinks and for
	/// identifiers the graph does not know.
	pub fn outgoing_edges<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a FlowEdge> + 'a {
		let indices: &[usize] = self
			.id_to_idx
			.get(id)
			.map(|&i| self.outgoing[i].as_slice())
			.unwrap_or(&[]);
		indices.iter().map(move |&e| &self.edges[e])
	}

	pub fn nodes(&self) -> &[FlowNode] {
		&self.nodes
	}

	pub fn edges(&self) -> &[FlowEdge] {
		&self.edges
	}

	/// The node selected when nothing has been chosen yet.
	pub fn first_node(&self) -> &FlowNode {
		// construction rejects empty graphs
		&self.nodes[0]
	}
}
