use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// A callback registered on the window. The callback is owned here so it
/// outlives the registration; call [`WindowListener::detach`] to remove it.
pub struct WindowListener {
	window: Window,
	event: &'static str,
	callback: Closure<dyn FnMut()>,
}

impl WindowListener {
	pub fn attach(
		window: Window,
		event: &'static str,
		callback: Closure<dyn FnMut()>,
	) -> Result<Self, JsValue> {
		window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
		Ok(Self {
			window,
			event,
			callback,
		})
	}

	/// Unregisters the callback and hands it back. The window no longer
	/// holds a reference to it, so dropping the result is safe.
	pub fn detach(self) -> Closure<dyn FnMut()> {
		if let Err(e) = self
			.window
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
		{
			warn!("Failed to remove '{}' listener: {:?}", self.event, e);
		}
		self.callback
	}
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
	use std::cell::Cell;
	use std::rc::Rc;

	use super::*;
	use wasm_bindgen_test::*;

	wasm_bindgen_test_configure!(run_in_browser);

	fn fire(window: &Window) {
		let event = web_sys::Event::new("resize").unwrap();
		window.dispatch_event(&event).unwrap();
	}

	#[wasm_bindgen_test]
	fn detached_listener_stops_firing() {
		let window = web_sys::window().unwrap();
		let count = Rc::new(Cell::new(0));
		let seen = count.clone();
		let callback = Closure::<dyn FnMut()>::new(move || seen.set(seen.get() + 1));

		let listener = WindowListener::attach(window.clone(), "resize", callback).unwrap();
		fire(&window);
		assert_eq!(count.get(), 1);

		let _callback = listener.detach();
		fire(&window);
		assert_eq!(count.get(), 1);
	}
}
