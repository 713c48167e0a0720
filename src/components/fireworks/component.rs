//! Leptos component wrapping the fireworks canvas.
//!
//! The component creates an HTML canvas element and wires a pointer handler
//! that launches a shell at the pressed point. An animation loop runs via
//! `requestAnimationFrame`, drawing and then advancing the simulation each frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, PointerEvent, Window};

use super::config::SimulationConfig;
use super::render::{CanvasSurface, Surface};
use super::state::FireworksState;

/// Bundles the simulation with the surface it draws on.
struct FireworksContext {
	state: FireworksState,
	surface: CanvasSurface,
}

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Renders interactive fireworks on a canvas element.
///
/// Pointer presses (mouse or touch) launch a shell toward the pressed point.
/// The canvas sizes itself to its parent container by default; set
/// `fullscreen = true` to fill the viewport and follow window resizes.
#[component]
pub fn FireworksCanvas(
	#[prop(into)] config: Signal<SimulationConfig>,
	#[prop(default = false)] fullscreen: bool,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FireworksContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window).unwrap_or((800.0, 600.0))
		} else {
			canvas
				.parent_element()
				.map(|p| (p.client_width() as f64, p.client_height() as f64))
				.unwrap_or((800.0, 600.0))
		};

		let Some(surface) = CanvasSurface::new(canvas.clone()) else {
			warn!("fireworks: canvas has no 2d context");
			return;
		};
		surface.resize(w, h);

		let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
		*context_init.borrow_mut() = Some(FireworksContext {
			state: FireworksState::new(config.get_untracked(), w, h, seed),
			surface,
		});
		info!("fireworks: canvas ready at {}x{}", w, h);

		if fullscreen {
			let context_resize = context_init.clone();
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(window_size) else {
					return;
				};
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.surface.resize(nw, nh);
					c.state.resize(c.surface.width(), c.surface.height());
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.state.tick(&mut c.surface);
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_pd = context.clone();
	let on_pointerdown = move |ev: PointerEvent| {
		ev.prevent_default();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_pd.borrow_mut() {
			c.state.launch(x, y);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="fireworks-canvas"
			on:pointerdown=on_pointerdown
			style="display: block; cursor: crosshair; touch-action: none;"
		/>
	}
}
