//! Self-diagnostics shown on the `/flowchart` page.

use std::collections::HashSet;

use super::filter::FocusPath;
use super::graph::FlowGraph;
use super::layout::grid_to_px;
use super::types::Outcome;

/// Steps the escalation path cannot do without.
pub const CRITICAL_NODES: &[&str] = &[
	"computeVariance",
	"flagDaily",
	"flagImmediate",
	"missingAny",
	"investigateCaves",
	"investigateIMBA",
	"addComments",
	"supervisor",
	"resolve",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Check {
	pub name: &'static str,
	pub pass: bool,
}

pub fn run_checks(graph: &FlowGraph) -> Vec<Check> {
	let has_outcome = |o: Outcome| graph.edges().iter().any(|e| e.outcome == Some(o));
	let focus_values: HashSet<&str> = FocusPath::ALL.iter().map(|f| f.value()).collect();

	vec![
		Check {
			name: "Edge label >5% present",
			pass: has_outcome(Outcome::Minor),
		},
		Check {
			name: "Edge label >25% present",
			pass: has_outcome(Outcome::Major),
		},
		Check {
			name: "All critical nodes exist",
			pass: CRITICAL_NODES.iter().all(|id| graph.contains(id)),
		},
		Check {
			name: "Focus options contain all values",
			pass: ["all", "minor", "major", "mismatch"]
				.iter()
				.all(|v| focus_values.contains(v)),
		},
		Check {
			name: "Node positions computed",
			pass: graph.nodes().iter().all(|n| {
				let p = grid_to_px(n.pos);
				p.x.is_finite() && p.y.is_finite()
			}),
		},
		Check {
			name: "Edges reference valid nodes",
			pass: graph
				.edges()
				.iter()
				.all(|e| graph.contains(&e.from) && graph.contains(&e.to)),
		},
	]
}
