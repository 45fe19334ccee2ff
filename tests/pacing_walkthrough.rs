use std::sync::Arc;

use budget_pacing_flow::components::pacing_flow::{
	EdgeSpec, FlowError, FlowEvent, FlowGraph, FlowState, FocusPath, GridPos, NodeSpec, Point,
	Role, RoleFilter, ViewportConfig, graph_bounds, node_at, node_rect, pacing_graph,
	reachable_from,
};
use pretty_assertions::assert_eq;

fn state() -> FlowState {
	FlowState::new(Arc::new(pacing_graph().unwrap()), ViewportConfig::default())
}

#[test]
fn compute_variance_reaches_every_branch_downstream() {
	let graph = pacing_graph().unwrap();
	let reach = reachable_from(&graph, "computeVariance");

	for id in [
		"computeVariance",
		"ok",
		"flagDaily",
		"flagImmediate",
		"missingAny",
		"investigateCaves",
		"investigateIMBA",
		"addComments",
		"supervisor",
		"resolve",
	] {
		assert!(reach.contains_node(id), "{id} should be reachable");
	}
	for id in ["start", "pullReports", "updateSheet", "midMonth", "newMonth"] {
		assert!(!reach.contains_node(id), "{id} is upstream");
	}
	assert!(reach.contains_edge("computeVariance", "flagImmediate"));
	assert!(!reach.contains_edge("updateSheet", "computeVariance"));
	assert_eq!(reach.edges.len(), 14);
}

#[test]
fn edge_to_missing_node_fails_construction() {
	let nodes = [NodeSpec {
		id: "start",
		title: "Start of Day",
		subtitle: "",
		role: Role::Ops,
		pos: GridPos::new(0.0, 0.0),
		notes: &[],
	}];
	let result = FlowGraph::from_specs(&nodes, &[EdgeSpec::plain("start", "pullReports")]);
	assert!(matches!(
		result,
		Err(FlowError::UnknownEndpoint { ref missing, .. }) if missing == "pullReports"
	));
}

#[test]
fn session_of_clicks_filters_and_gestures() {
	let mut s = state();
	s.apply(FlowEvent::Mounted);

	// click the centre of the computeVariance card on screen
	let card = node_rect(s.graph().node_by_id("computeVariance").unwrap());
	let screen = s.viewport.graph_to_screen(card.center());
	let graph_point = s.viewport.screen_to_graph(screen);
	let hit = node_at(s.graph(), graph_point).map(|n| n.id.clone()).unwrap();
	s.apply(FlowEvent::Select(hit));
	assert_eq!(s.active_id(), "computeVariance");

	s.apply(FlowEvent::SetRoleFilter(RoleFilter::Only(Role::Data)));
	s.apply(FlowEvent::SetFocus(FocusPath::Mismatch));
	let view = s.filter_view();
	let shown: Vec<String> = s
		.graph()
		.edges()
		.iter()
		.zip(&view.visible)
		.filter(|(_, v)| **v)
		.map(|(e, _)| e.key().to_string())
		.collect();
	assert_eq!(shown, vec!["computeVariance->missingAny".to_string()]);
	// dimmed nodes stay selectable
	s.apply(FlowEvent::Select("supervisor".into()));
	assert_eq!(s.active_id(), "supervisor");

	s.apply(FlowEvent::DragStart(Point::new(100.0, 100.0)));
	s.apply(FlowEvent::DragMove(Point::new(140.0, 130.0)));
	s.apply(FlowEvent::DragMove(Point::new(150.0, 90.0)));
	s.apply(FlowEvent::DragEnd);
	assert_eq!(s.viewport.translation(), Point::new(-120.0 + 50.0, -10.0));

	// zooming in pivots on the middle of the drawing, not its corner
	let centre = graph_bounds(s.graph()).center();
	let pinned = s.viewport.graph_to_screen(centre);
	s.apply(FlowEvent::Wheel(-10_000.0));
	assert_eq!(s.viewport.scale(), 2.25);
	let moved = s.viewport.graph_to_screen(centre);
	assert!((moved.x - pinned.x).abs() < 1e-9 && (moved.y - pinned.y).abs() < 1e-9);
	assert_eq!(s.active_id(), "supervisor");
}
