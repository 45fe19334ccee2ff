use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::filter::FilterView;
use super::layout::{EdgeRoute, NODE_R, Rect, edge_route, node_rect};
use super::palette::{Palette, role_color};
use super::state::FlowState;
use super::types::FlowNode;

const GRID_STEP: f64 = 40.0;
const ARROW_SIZE: f64 = 8.0;

/// Draws one frame: background grid in screen space, then edges and cards
/// under the viewport transform.
pub fn render(
	state: &FlowState,
	ctx: &CanvasRenderingContext2d,
	palette: &Palette,
	width: f64,
	height: f64,
) {
	ctx.set_fill_style_str(palette.bg);
	ctx.fill_rect(0.0, 0.0, width, height);
	draw_grid(ctx, palette, width, height);

	let filters = state.filter_view();
	let t = state.viewport.transform();
	ctx.save();
	let _ = ctx.translate(t.x, t.y);
	let _ = ctx.scale(t.k, t.k);
	draw_edges(state, &filters, ctx, palette);
	draw_nodes(state, &filters, ctx, palette);
	ctx.restore();
}

fn draw_grid(ctx: &CanvasRenderingContext2d, palette: &Palette, width: f64, height: f64) {
	ctx.set_stroke_style_str(palette.grid);
	ctx.set_line_width(0.5);
	ctx.begin_path();
	let mut x = 0.0;
	while x <= width {
		ctx.move_to(x, 0.0);
		ctx.line_to(x, height);
		x += GRID_STEP;
	}
	let mut y = 0.0;
	while y <= height {
		ctx.move_to(0.0, y);
		ctx.line_to(width, y);
		y += GRID_STEP;
	}
	ctx.stroke();
}

fn draw_edges(
	state: &FlowState,
	filters: &FilterView,
	ctx: &CanvasRenderingContext2d,
	palette: &Palette,
) {
	let graph = state.graph();
	for (edge, _) in graph
		.edges()
		.iter()
		.zip(&filters.visible)
		.filter(|(_, visible)| **visible)
	{
		let (Ok(from), Ok(to)) = (graph.node_by_id(&edge.from), graph.node_by_id(&edge.to))
		else {
			continue;
		};
		let route = edge_route(from, to);
		let highlighted = state.reach().contains_edge(&edge.from, &edge.to);
		let color = if highlighted {
			palette.accent
		} else {
			palette.stroke
		};

		ctx.set_global_alpha(if highlighted { 1.0 } else { 0.5 });
		ctx.set_stroke_style_str(color);
		ctx.set_line_width(if highlighted { 2.0 } else { 1.0 });
		ctx.begin_path();
		let [start, rest @ ..] = route.points;
		ctx.move_to(start.x, start.y);
		for p in rest {
			ctx.line_to(p.x, p.y);
		}
		ctx.stroke();
		draw_arrowhead(ctx, &route, palette.stroke);
		ctx.set_global_alpha(1.0);

		if let Some(label) = edge.label() {
			ctx.set_fill_style_str(if highlighted {
				palette.accent
			} else {
				palette.subtext
			});
			ctx.set_font("12px sans-serif");
			let _ = ctx.fill_text(label, route.label_at.x, route.label_at.y);
		}
	}
}

fn draw_arrowhead(ctx: &CanvasRenderingContext2d, route: &EdgeRoute, color: &str) {
	let [_, _, bend, tip] = route.points;
	// last segment is horizontal; it points left when the target sits behind the source
	let ux = if tip.x < bend.x { -1.0 } else { 1.0 };
	let back_x = tip.x - ux * ARROW_SIZE;
	let half = ARROW_SIZE * 0.5;

	ctx.set_fill_style_str(color);
	ctx.begin_path();
	ctx.move_to(tip.x, tip.y);
	ctx.line_to(back_x, tip.y + half);
	ctx.line_to(back_x, tip.y - half);
	ctx.close_path();
	ctx.fill();
}

fn draw_nodes(
	state: &FlowState,
	filters: &FilterView,
	ctx: &CanvasRenderingContext2d,
	palette: &Palette,
) {
	for (node, dimmed) in state.graph().nodes().iter().zip(&filters.dimmed) {
		let active = node.id == state.active_id();
		let in_path = state.reach().contains_node(&node.id);
		let alpha = if *dimmed {
			0.25
		} else if in_path {
			1.0
		} else {
			0.9
		};
		ctx.set_global_alpha(alpha);
		draw_card(ctx, node, active, active || in_path, palette);
		ctx.set_global_alpha(1.0);
	}
}

fn draw_card(
	ctx: &CanvasRenderingContext2d,
	node: &FlowNode,
	active: bool,
	emphasised: bool,
	palette: &Palette,
) {
	let rect = node_rect(node);
	rounded_rect(ctx, &rect, NODE_R);
	ctx.set_fill_style_str(if active {
		palette.node_active
	} else {
		palette.node
	});
	ctx.fill();
	ctx.set_stroke_style_str(if emphasised {
		palette.accent
	} else {
		palette.stroke
	});
	ctx.set_line_width(if emphasised { 2.0 } else { 1.0 });
	ctx.stroke();

	let role = role_color(node.role);
	ctx.begin_path();
	let _ = ctx.arc(rect.x + 26.0, rect.y + 28.0, 7.0, 0.0, 2.0 * PI);
	ctx.set_stroke_style_str(palette.subtext);
	ctx.set_line_width(1.5);
	ctx.stroke();

	ctx.set_fill_style_str(palette.text);
	ctx.set_font("600 14px sans-serif");
	let _ = ctx.fill_text(&node.title, rect.x + 48.0, rect.y + 30.0);
	ctx.set_fill_style_str(palette.subtext);
	ctx.set_font("12px sans-serif");
	let _ = ctx.fill_text(&node.subtitle, rect.x + 48.0, rect.y + 54.0);

	// role badge: tinted pill, dot, name
	let name = node.role.as_str();
	let text_w = ctx
		.measure_text(name)
		.map(|m| m.width())
		.unwrap_or(name.len() as f64 * 7.0);
	let badge = Rect {
		x: rect.x + 48.0,
		y: rect.y + 66.0,
		w: text_w + 26.0,
		h: 18.0,
	};
	rounded_rect(ctx, &badge, badge.h / 2.0);
	ctx.set_fill_style_str(&format!("{}1A", role));
	ctx.fill();
	ctx.begin_path();
	let _ = ctx.arc(badge.x + 10.0, badge.y + badge.h / 2.0, 4.0, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(role);
	ctx.fill();
	let _ = ctx.fill_text(name, badge.x + 18.0, badge.y + 13.0);
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, rect: &Rect, r: f64) {
	let (x, y, w, h) = (rect.x, rect.y, rect.w, rect.h);
	ctx.begin_path();
	ctx.move_to(x + r, y);
	let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
	let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
	let _ = ctx.arc_to(x, y + h, x, y, r);
	let _ = ctx.arc_to(x, y, x + w, y, r);
	ctx.close_path();
}
