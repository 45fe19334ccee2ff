use std::sync::Arc;

use log::{debug, warn};

use super::filter::{FilterView, FocusPath, RoleFilter};
use super::graph::FlowGraph;
use super::layout::graph_bounds;
use super::reach::{ReachSet, reachable_from};
use super::types::FlowNode;
use super::viewport::{Point, Viewport, ViewportConfig};

/// Everything the flowchart surface reacts to.
#[derive(Clone, Debug, PartialEq)]
pub enum FlowEvent {
	Select(String),
	SetRoleFilter(RoleFilter),
	SetFocus(FocusPath),
	Mounted,
	Wheel(f64),
	DragStart(Point),
	DragMove(Point),
	DragEnd,
	ZoomIn,
	ZoomOut,
}

/// Selection, filters and viewport for one flowchart, plus the reach set of
/// the active node.
#[derive(Clone, Debug)]
pub struct FlowState {
	graph: Arc<FlowGraph>,
	active: String,
	reach: ReachSet,
	pub role_filter: RoleFilter,
	pub focus: FocusPath,
	pub viewport: Viewport,
}

impl FlowState {
	/// Starts on the first node with no filters. Without an explicit anchor,
	/// zoom pivots on the centre of the cards' bounding box.
	pub fn new(graph: Arc<FlowGraph>, config: ViewportConfig) -> Self {
		let active = graph.first_node().id.clone();
		let reach = reachable_from(&graph, &active);
		let anchor = config
			.anchor
			.unwrap_or_else(|| graph_bounds(&graph).center());
		Self {
			viewport: Viewport::new(ViewportConfig {
				anchor: Some(anchor),
				..config
			}),
			graph,
			active,
			reach,
			role_filter: RoleFilter::default(),
			focus: FocusPath::default(),
		}
	}

	pub fn graph(&self) -> &FlowGraph {
		&self.graph
	}

	pub fn active_id(&self) -> &str {
		&self.active
	}

	pub fn active_node(&self) -> &FlowNode {
		// active is only ever set to an id the graph resolved
		self.graph
			.node_by_id(&self.active)
			.unwrap_or_else(|_| self.graph.first_node())
	}

	pub fn reach(&self) -> &ReachSet {
		&self.reach
	}

	/// Role dimming and focus visibility for the current filter values.
	pub fn filter_view(&self) -> FilterView {
		FilterView::compose(&self.graph, self.role_filter, self.focus)
	}

	pub fn apply(&mut self, event: FlowEvent) {
		match event {
			FlowEvent::Select(id) => self.select(id),
			FlowEvent::SetRoleFilter(filter) => self.role_filter = filter,
			FlowEvent::SetFocus(focus) => self.focus = focus,
			FlowEvent::Mounted => self.viewport.mount(),
			FlowEvent::Wheel(delta_y) => self.viewport.on_wheel(delta_y),
			FlowEvent::DragStart(p) => self.viewport.on_drag_start(p),
			FlowEvent::DragMove(p) => self.viewport.on_drag_move(p),
			FlowEvent::DragEnd => self.viewport.on_drag_end(),
			FlowEvent::ZoomIn => self.viewport.zoom_in(),
			FlowEvent::ZoomOut => self.viewport.zoom_out(),
		}
	}

	fn select(&mut self, id: String) {
		if !self.graph.contains(&id) {
			warn!("Ignoring selection of unknown node '{}'", id);
			return;
		}
		if id == self.active {
			return;
		}
		self.reach = reachable_from(&self.graph, &id);
		debug!(
			"Selected '{}': {} nodes, {} edges downstream",
			id,
			self.reach.nodes.len(),
			self.reach.edges.len()
		);
		self.active = id;
	}
}
