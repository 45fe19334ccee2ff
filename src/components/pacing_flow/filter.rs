//! Role dimming and focus-path edge visibility.
//!
//! Both filters are pure functions of the graph and the current filter
//! values. Dimming is a rendering hint; a dimmed node stays selectable and
//! traversable. Focus-path filtering excludes edges from the frame.

use std::fmt;
use std::str::FromStr;

use super::error::FlowError;
use super::graph::FlowGraph;
use super::types::{FlowEdge, FlowNode, Outcome, Role};

/// Role filter: either everything or a single role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoleFilter {
	#[default]
	All,
	Only(Role),
}

impl RoleFilter {
	pub fn value(self) -> &'static str {
		match self {
			RoleFilter::All => "All",
			RoleFilter::Only(role) => role.as_str(),
		}
	}

	/// Menu entries, "All" first.
	pub fn options() -> impl Iterator<Item = RoleFilter> {
		std::iter::once(RoleFilter::All).chain(Role::ALL.into_iter().map(RoleFilter::Only))
	}
}

impl FromStr for RoleFilter {
	type Err = FlowError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"All" => Ok(RoleFilter::All),
			other => other.parse().map(RoleFilter::Only),
		}
	}
}

/// Outcome category whose edges stay on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusPath {
	#[default]
	All,
	Minor,
	Major,
	Mismatch,
}

impl FocusPath {
	pub const ALL: [FocusPath; 4] = [
		FocusPath::All,
		FocusPath::Minor,
		FocusPath::Major,
		FocusPath::Mismatch,
	];

	pub fn value(self) -> &'static str {
		match self {
			FocusPath::All => "all",
			FocusPath::Minor => "minor",
			FocusPath::Major => "major",
			FocusPath::Mismatch => "mismatch",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			FocusPath::All => "All",
			FocusPath::Minor => "Minor (>5%)",
			FocusPath::Major => "Major (>25%)",
			FocusPath::Mismatch => "Missing/Mismatch",
		}
	}

	/// Whether an edge carrying `outcome` is shown under this focus.
	pub fn admits(self, outcome: Option<Outcome>) -> bool {
		match self {
			FocusPath::All => true,
			FocusPath::Minor => outcome == Some(Outcome::Minor),
			FocusPath::Major => outcome == Some(Outcome::Major),
			FocusPath::Mismatch => outcome == Some(Outcome::Mismatch),
		}
	}
}

impl fmt::Display for FocusPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

impl FromStr for FocusPath {
	type Err = FlowError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		FocusPath::ALL
			.into_iter()
			.find(|f| f.value() == s)
			.ok_or_else(|| FlowError::UnknownFocus { value: s.into() })
	}
}

pub fn node_dimmed(node: &FlowNode, filter: RoleFilter) -> bool {
	match filter {
		RoleFilter::All => false,
		RoleFilter::Only(role) => node.role != role,
	}
}

pub fn edge_visible(edge: &FlowEdge, focus: FocusPath) -> bool {
	focus.admits(edge.outcome)
}

/// Per-frame filter results, indexed like `FlowGraph::nodes` and
/// `FlowGraph::edges`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterView {
	pub dimmed: Vec<bool>,
	pub visible: Vec<bool>,
}

impl FilterView {
	pub fn compose(graph: &FlowGraph, role: RoleFilter, focus: FocusPath) -> Self {
		Self {
			dimmed: graph.nodes().iter().map(|n| node_dimmed(n, role)).collect(),
			visible: graph.edges().iter().map(|e| edge_visible(e, focus)).collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::pacing_flow::types::{EdgeSpec, GridPos, NodeSpec};
	use pretty_assertions::assert_eq;

	fn spec(id: &'static str, role: Role) -> NodeSpec {
		NodeSpec {
			id,
			title: id,
			subtitle: "",
			role,
			pos: GridPos::new(0.0, 0.0),
			notes: &[],
		}
	}

	fn sample() -> FlowGraph {
		FlowGraph::from_specs(
			&[
				spec("v", Role::Data),
				spec("ok", Role::Campaign),
				spec("daily", Role::Ops),
				spec("now", Role::Supervisor),
				spec("gap", Role::Data),
			],
			&[
				EdgeSpec::branch("v", "ok", Outcome::Within),
				EdgeSpec::branch("v", "daily", Outcome::Minor),
				EdgeSpec::branch("v", "now", Outcome::Major),
				EdgeSpec::branch("v", "gap", Outcome::Mismatch),
				EdgeSpec::plain("daily", "now"),
			],
		)
		.unwrap()
	}

	#[test]
	fn role_filter_dims_exactly_other_roles() {
		let g = sample();
		let view = FilterView::compose(&g, RoleFilter::Only(Role::Data), FocusPath::All);
		assert_eq!(view.dimmed, vec![false, true, true, true, false]);

		let view = FilterView::compose(&g, RoleFilter::All, FocusPath::All);
		assert!(view.dimmed.iter().all(|d| !d));
	}

	#[test]
	fn major_edge_visibility_per_focus() {
		let g = sample();
		let major = &g.edges()[2];
		assert!(edge_visible(major, FocusPath::All));
		assert!(edge_visible(major, FocusPath::Major));
		assert!(!edge_visible(major, FocusPath::Minor));
		assert!(!edge_visible(major, FocusPath::Mismatch));
	}

	#[test]
	fn focus_hides_unlabelled_edges() {
		let g = sample();
		let view = FilterView::compose(&g, RoleFilter::All, FocusPath::Minor);
		assert_eq!(view.visible, vec![false, true, false, false, false]);

		let view = FilterView::compose(&g, RoleFilter::All, FocusPath::All);
		assert!(view.visible.iter().all(|v| *v));
	}

	#[test]
	fn filters_are_independent() {
		let g = sample();
		let a = FilterView::compose(&g, RoleFilter::Only(Role::Ops), FocusPath::Mismatch);
		let b = FilterView::compose(&g, RoleFilter::All, FocusPath::Mismatch);
		let c = FilterView::compose(&g, RoleFilter::Only(Role::Ops), FocusPath::All);
		assert_eq!(a.visible, b.visible);
		assert_eq!(a.dimmed, c.dimmed);
	}

	#[test]
	fn parses_control_values() {
		assert_eq!("All".parse::<RoleFilter>(), Ok(RoleFilter::All));
		assert_eq!("Ops".parse::<RoleFilter>(), Ok(RoleFilter::Only(Role::Ops)));
		assert_eq!("major".parse::<FocusPath>(), Ok(FocusPath::Major));
		assert!("loud".parse::<FocusPath>().is_err());
		assert_eq!(RoleFilter::options().count(), 5);
	}
}
