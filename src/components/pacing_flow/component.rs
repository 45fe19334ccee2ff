use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use leptos::prelude::*;
use log::{error, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::checks::run_checks;
use super::filter::{FocusPath, RoleFilter};
use super::graph::FlowGraph;
use super::layout::node_at;
use super::listener::WindowListener;
use super::palette::Variant;
use super::panel::{ChecksCard, DetailsCard, Legend};
use super::render;
use super::state::{FlowEvent, FlowState};
use super::viewport::{Point, ViewportConfig};

struct Surface {
	ctx: CanvasRenderingContext2d,
	width: f64,
	height: f64,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn parent_width(canvas: &HtmlCanvasElement) -> f64 {
	canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(800.0)
}

#[component]
pub fn PacingFlowchart(
	graph: Arc<FlowGraph>,
	#[prop(default = Variant::Dark)] variant: Variant,
	#[prop(default = false)] show_checks: bool,
	#[prop(default = 720.0)] height: f64,
) -> impl IntoView {
	let palette = variant.palette();
	let checks = run_checks(&graph);
	let state = RwSignal::new(FlowState::new(graph, ViewportConfig::default()));

	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let surface: Rc<RefCell<Option<Surface>>> = Rc::new(RefCell::new(None));
	let surface_init = surface.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(ctx) = context_2d(&canvas) else {
			error!("Canvas 2d context unavailable; flowchart not drawn");
			return;
		};

		let w = parent_width(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(height as u32);
		*surface_init.borrow_mut() = Some(Surface {
			ctx,
			width: w,
			height,
		});

		let (surface_resize, canvas_resize) = (surface_init.clone(), canvas.clone());
		let on_resize = Closure::<dyn FnMut()>::new(move || {
			let nw = parent_width(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			if let Some(ref mut surf) = *surface_resize.borrow_mut() {
				surf.width = nw;
				state.with_untracked(|s| {
					render::render(s, &surf.ctx, palette, surf.width, surf.height)
				});
			}
		});
		// Removed before the closure drops, when the effect reruns or the
		// component unmounts.
		match WindowListener::attach(window, "resize", on_resize) {
			Ok(listener) => {
				let listener = SendWrapper::new(listener);
				on_cleanup(move || drop(listener.take().detach()));
			}
			Err(e) => warn!("Failed to watch window resizes: {:?}", e),
		}

		state.update(|s| s.apply(FlowEvent::Mounted));
	});

	// Redraw whenever selection, filters or viewport change.
	let surface_draw = surface.clone();
	Effect::new(move |_| {
		state.with(|s| {
			if let Some(ref surf) = *surface_draw.borrow() {
				render::render(s, &surf.ctx, palette, surf.width, surf.height);
			}
		});
	});

	let pointer = move |ev: &MouseEvent| -> Option<Point> {
		let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
		let rect = canvas.get_bounding_client_rect();
		Some(Point::new(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		))
	};
	let dragging = Memo::new(move |_| state.with(|s| s.viewport.is_dragging()));
	let cursor = move || if dragging.get() { "grabbing" } else { "grab" };

	let on_mousedown = move |ev: MouseEvent| {
		if let Some(p) = pointer(&ev) {
			state.update(|s| s.apply(FlowEvent::DragStart(p)));
		}
	};

	let on_mousemove = move |ev: MouseEvent| {
		if !dragging.get_untracked() {
			return;
		}
		if let Some(p) = pointer(&ev) {
			state.update(|s| s.apply(FlowEvent::DragMove(p)));
		}
	};

	let on_drag_end = move |_: MouseEvent| {
		if dragging.get_untracked() {
			state.update(|s| s.apply(FlowEvent::DragEnd));
		}
	};

	let on_click = move |ev: MouseEvent| {
		let Some(p) = pointer(&ev) else {
			return;
		};
		let hit = state.with_untracked(|s| {
			node_at(s.graph(), s.viewport.screen_to_graph(p)).map(|n| n.id.clone())
		});
		if let Some(id) = hit {
			state.update(|s| s.apply(FlowEvent::Select(id)));
		}
	};

	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		state.update(|s| s.apply(FlowEvent::Wheel(ev.delta_y())));
	};

	let on_role_change =
		move |ev: leptos::ev::Event| match event_target_value(&ev).parse::<RoleFilter>() {
			Ok(filter) => state.update(|s| s.apply(FlowEvent::SetRoleFilter(filter))),
			Err(e) => warn!("{}", e),
		};

	let on_focus_change =
		move |ev: leptos::ev::Event| match event_target_value(&ev).parse::<FocusPath>() {
			Ok(focus) => state.update(|s| s.apply(FlowEvent::SetFocus(focus))),
			Err(e) => warn!("{}", e),
		};

	view! {
		<div class=variant.class() style=format!("height: {}px", height + 48.0)>
			<div class="flow-header">
				<div class="flow-heading">
					<span class="flow-dot" style=format!("background: {}", palette.accent) />
					<span class="flow-name">"TFM.ai · Budget Pacing Flow"</span>
					<span class="flow-hint" style=format!("color: {}", palette.subtext)>
						"Click any node to see details. Drag to pan. Scroll to zoom."
					</span>
				</div>
				<div class="flow-controls">
					<select
						class="flow-control"
						aria-label="Role filter"
						prop:value=move || state.with(|s| s.role_filter.value())
						on:change=on_role_change
					>
						{RoleFilter::options()
							.map(|f| view! { <option value=f.value()>{f.value()}</option> })
							.collect_view()}
					</select>
					<select
						class="flow-control"
						aria-label="Focus path"
						prop:value=move || state.with(|s| s.focus.value())
						on:change=on_focus_change
					>
						{FocusPath::ALL
							.into_iter()
							.map(|f| view! { <option value=f.value()>{f.label()}</option> })
							.collect_view()}
					</select>
					<button
						class="flow-control"
						aria-label="Zoom in"
						on:click=move |_| state.update(|s| s.apply(FlowEvent::ZoomIn))
					>
						"+"
					</button>
					<button
						class="flow-control"
						aria-label="Zoom out"
						on:click=move |_| state.update(|s| s.apply(FlowEvent::ZoomOut))
					>
						"−"
					</button>
				</div>
			</div>
			<div class="flow-body">
				<div class="flow-canvas">
					<canvas
						node_ref=canvas_ref
						on:mousedown=on_mousedown
						on:mousemove=on_mousemove
						on:mouseup=on_drag_end
						on:mouseleave=on_drag_end
						on:click=on_click
						on:wheel=on_wheel
						style:display="block"
						style:cursor=cursor
					/>
				</div>
				<aside class="flow-panel">
					<div class="panel-heading">"Details"</div>
					<DetailsCard state=state />
					<Legend />
					{show_checks.then(|| view! { <ChecksCard checks=checks /> })}
				</aside>
			</div>
		</div>
	}
}
