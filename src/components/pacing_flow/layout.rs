//! Grid to pixel mapping for cards and edge routes.

use super::graph::FlowGraph;
use super::types::{FlowNode, GridPos};
use super::viewport::Point;

pub const GRID_COL: f64 = 360.0;
pub const GRID_ROW: f64 = 160.0;
pub const GRID_X_PAD: f64 = 40.0;
pub const GRID_Y_PAD: f64 = 40.0;

pub const NODE_W: f64 = 300.0;
pub const NODE_H: f64 = 96.0;
pub const NODE_R: f64 = 18.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub w: f64,
	pub h: f64,
}

impl Rect {
	pub fn contains(&self, p: Point) -> bool {
		p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
	}

	pub fn center(&self) -> Point {
		Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
	}

	fn union(&self, other: &Rect) -> Rect {
		let (x, y) = (self.x.min(other.x), self.y.min(other.y));
		Rect {
			x,
			y,
			w: (self.x + self.w).max(other.x + other.w) - x,
			h: (self.y + self.h).max(other.y + other.h) - y,
		}
	}
}

pub fn grid_to_px(pos: GridPos) -> Point {
	Point::new(
		GRID_X_PAD + pos.col * GRID_COL,
		GRID_Y_PAD + pos.row * GRID_ROW,
	)
}

pub fn node_rect(node: &FlowNode) -> Rect {
	let origin = grid_to_px(node.pos);
	Rect {
		x: origin.x,
		y: origin.y,
		w: NODE_W,
		h: NODE_H,
	}
}

/// Bounding box of every card. Graphs are never empty, so this always
/// covers at least one card.
pub fn graph_bounds(graph: &FlowGraph) -> Rect {
	let first = node_rect(graph.first_node());
	graph
		.nodes()
		.iter()
		.map(node_rect)
		.fold(first, |acc, r| acc.union(&r))
}

/// Orthogonal route between two cards: out of the source's right edge,
/// across at the horizontal midpoint, into the target's left edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeRoute {
	pub points: [Point; 4],
	pub label_at: Point,
}

pub fn edge_route(from: &FlowNode, to: &FlowNode) -> EdgeRoute {
	let (a, b) = (node_rect(from), node_rect(to));
	let start = Point::new(a.x + a.w, a.y + a.h / 2.0);
	let end = Point::new(b.x, b.y + b.h / 2.0);
	let mid_x = (start.x + end.x) / 2.0;

	EdgeRoute {
		points: [
			start,
			Point::new(mid_x, start.y),
			Point::new(mid_x, end.y),
			end,
		],
		label_at: Point::new(
			mid_x + 4.0,
			start.y.min(end.y) + (start.y - end.y).abs() / 2.0 - 6.0,
		),
	}
}

/// Topmost card under a graph-space point. Cards are drawn in node order,
/// so later nodes win.
pub fn node_at(graph: &FlowGraph, p: Point) -> Option<&FlowNode> {
	graph
		.nodes()
		.iter()
		.rev()
		.find(|node| node_rect(node).contains(p))
}
