//! Pan and zoom of the drawing surface.
//!
//! The viewport only affects presentation; graph, selection and filter state
//! never read it. Zoom scales about an anchor in graph space, so the anchor
//! keeps its screen position while the scale changes.

/// A point in screen (canvas) pixels or graph space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Tunables for the viewport controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
	pub min_scale: f64,
	pub max_scale: f64,
	/// Exponent applied per unit of wheel delta.
	pub wheel_sensitivity: f64,
	/// Multiplier used by the zoom buttons.
	pub button_factor: f64,
	/// Translation applied once when the surface mounts.
	pub initial_offset: Point,
	/// Graph-space point zoom is centred on. `None` lets the owner pick the
	/// centre of the drawing.
	pub anchor: Option<Point>,
}

impl Default for ViewportConfig {
	fn default() -> Self {
		Self {
			min_scale: 0.5,
			max_scale: 2.25,
			wheel_sensitivity: 0.001,
			button_factor: 1.05,
			initial_offset: Point::new(-120.0, 0.0),
			anchor: None,
		}
	}
}

/// Affine transform applied to the graph layer: translate, then scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct PanState {
	active: bool,
	last: Point,
}

/// Pan offset and clamped scale. Only the gesture methods move them.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
	translate: Point,
	k: f64,
	anchor: Point,
	pan: PanState,
	config: ViewportConfig,
	mounted: bool,
}

impl Viewport {
	pub fn new(config: ViewportConfig) -> Self {
		Self {
			translate: Point::default(),
			k: 1.0,
			anchor: config.anchor.unwrap_or_default(),
			pan: PanState::default(),
			config,
			mounted: false,
		}
	}

	pub fn scale(&self) -> f64 {
		self.k
	}

	/// Accumulated pan offset.
	pub fn translation(&self) -> Point {
		self.translate
	}

	pub fn anchor(&self) -> Point {
		self.anchor
	}

	/// Transform to draw with: the pan offset, corrected so scaling pivots on
	/// the anchor rather than the graph origin.
	pub fn transform(&self) -> ViewTransform {
		ViewTransform {
			x: self.translate.x + self.anchor.x * (1.0 - self.k),
			y: self.translate.y + self.anchor.y * (1.0 - self.k),
			k: self.k,
		}
	}

	/// Moves to the configured starting offset the first time the surface
	/// mounts. Later calls do nothing.
	pub fn mount(&mut self) {
		if self.mounted {
			return;
		}
		self.mounted = true;
		self.translate = self.config.initial_offset;
	}

	fn set_scale(&mut self, k: f64) {
		self.k = k.clamp(self.config.min_scale, self.config.max_scale);
	}

	/// Multiplicative zoom: positive `delta_y` (scrolling down) zooms out.
	pub fn on_wheel(&mut self, delta_y: f64) {
		self.set_scale(self.k * (-delta_y * self.config.wheel_sensitivity).exp());
	}

	pub fn zoom_in(&mut self) {
		self.set_scale(self.k * self.config.button_factor);
	}

	pub fn zoom_out(&mut self) {
		self.set_scale(self.k / self.config.button_factor);
	}

	pub fn on_drag_start(&mut self, pos: Point) {
		self.pan.active = true;
		self.pan.last = pos;
	}

	/// Adds the movement since the previous pointer sample to the
	/// translation. Ignored unless a drag is in progress.
	pub fn on_drag_move(&mut self, pos: Point) {
		if !self.pan.active {
			return;
		}
		self.translate.x += pos.x - self.pan.last.x;
		self.translate.y += pos.y - self.pan.last.y;
		self.pan.last = pos;
	}

	pub fn on_drag_end(&mut self) {
		self.pan.active = false;
	}

	pub fn is_dragging(&self) -> bool {
		self.pan.active
	}

	pub fn graph_to_screen(&self, p: Point) -> Point {
		let t = self.transform();
		Point::new(t.x + p.x * t.k, t.y + p.y * t.k)
	}

	pub fn screen_to_graph(&self, p: Point) -> Point {
		let t = self.transform();
		Point::new((p.x - t.x) / t.k, (p.y - t.y) / t.k)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn viewport() -> Viewport {
		Viewport::new(ViewportConfig::default())
	}

	fn anchored(x: f64, y: f64) -> Viewport {
		Viewport::new(ViewportConfig {
			anchor: Some(Point::new(x, y)),
			..ViewportConfig::default()
		})
	}

	fn assert_near(a: Point, b: Point) {
		assert!(
			(a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
			"{:?} != {:?}",
			a,
			b
		);
	}

	#[test]
	fn wheel_clamps_to_max() {
		let mut v = viewport();
		assert_eq!(v.scale(), 1.0);
		v.on_wheel(-5000.0);
		assert_eq!(v.scale(), 2.25);
	}

	#[test]
	fn wheel_clamps_to_min() {
		let mut v = viewport();
		for _ in 0..10 {
			v.on_wheel(300.0);
		}
		assert_eq!(v.scale(), 0.5);
	}

	#[test]
	fn wheel_is_multiplicative() {
		let mut v = viewport();
		v.on_wheel(-100.0);
		let once = v.scale();
		v.on_wheel(-100.0);
		assert!((v.scale() - once * once).abs() < 1e-12);
		assert!(once > 1.0);
	}

	#[test]
	fn buttons_step_and_clamp() {
		let mut v = viewport();
		v.zoom_in();
		assert!((v.scale() - 1.05).abs() < 1e-12);
		for _ in 0..100 {
			v.zoom_out();
		}
		assert_eq!(v.scale(), 0.5);
	}

	#[test]
	fn drag_accumulates_incremental_deltas() {
		let mut v = viewport();
		v.on_drag_start(Point::new(100.0, 100.0));
		v.on_drag_move(Point::new(140.0, 130.0));
		v.on_drag_move(Point::new(150.0, 90.0));
		v.on_drag_end();
		assert_eq!(v.translation(), Point::new(50.0, -10.0));
	}

	#[test]
	fn move_without_drag_is_ignored() {
		let mut v = viewport();
		v.on_drag_move(Point::new(30.0, 30.0));
		v.on_drag_start(Point::new(0.0, 0.0));
		v.on_drag_end();
		v.on_drag_move(Point::new(80.0, 80.0));
		assert_eq!(v.translation(), Point::default());
		assert!(!v.is_dragging());
	}

	#[test]
	fn mount_offsets_once() {
		let mut v = viewport();
		v.mount();
		assert_eq!(v.translation(), Point::new(-120.0, 0.0));
		v.on_drag_start(Point::new(0.0, 0.0));
		v.on_drag_move(Point::new(20.0, 5.0));
		v.mount();
		assert_eq!(v.translation(), Point::new(-100.0, 5.0));
	}

	#[test]
	fn zoom_keeps_anchor_in_place() {
		let mut v = anchored(1450.0, 216.0);
		v.mount();
		let centre = v.anchor();
		let before = v.graph_to_screen(centre);
		assert_eq!(before, Point::new(1330.0, 216.0));

		for _ in 0..20 {
			v.on_wheel(300.0);
		}
		assert_eq!(v.scale(), 0.5);
		assert_near(v.graph_to_screen(centre), before);

		v.zoom_in();
		assert_near(v.graph_to_screen(centre), before);
		v.zoom_out();
		v.zoom_out();
		assert_near(v.graph_to_screen(centre), before);

		// points away from the anchor do move
		let corner = v.graph_to_screen(Point::new(0.0, 0.0));
		v.zoom_in();
		assert!(v.graph_to_screen(Point::new(0.0, 0.0)) != corner);
	}

	#[test]
	fn anchor_has_no_effect_at_unit_scale() {
		let mut v = anchored(300.0, 80.0);
		v.mount();
		assert_eq!(
			v.transform(),
			ViewTransform {
				x: -120.0,
				y: 0.0,
				k: 1.0
			}
		);
	}

	#[test]
	fn screen_to_graph_inverts_transform() {
		let mut v = anchored(500.0, 200.0);
		v.mount();
		v.on_wheel(-400.0);
		v.on_drag_start(Point::new(0.0, 0.0));
		v.on_drag_move(Point::new(35.0, -12.0));
		for p in [Point::new(0.0, 0.0), Point::new(812.5, -40.0), Point::new(500.0, 200.0)] {
			assert_near(v.screen_to_graph(v.graph_to_screen(p)), p);
		}
	}
}
