//! Drawing boundary and per-frame driver.
//!
//! The simulation only ever needs four things from a drawing target: its
//! size, a way to wipe it, filled rectangles and filled circles. [`Surface`]
//! captures exactly that so the same frame logic drives the browser canvas
//! and the recording surface used in tests.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::display::Display;
use super::theme::Hsla;

/// A 2D target the simulation draws onto.
pub trait Surface {
	/// Current width in pixels.
	fn width(&self) -> f64;
	/// Current height in pixels.
	fn height(&self) -> f64;
	/// Wipes the whole surface.
	fn clear(&mut self);
	/// Fills an axis-aligned rectangle with its top-left corner at `(x, y)`.
	fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &Hsla);
	/// Fills a disk centred on `(x, y)`.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &Hsla);
}

/// [`Surface`] backed by an HTML canvas 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Wraps `canvas`, or `None` if it cannot provide a 2D context.
	pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
		let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;
		Some(Self { canvas, ctx })
	}

	/// Sets the pixel dimensions of the backing canvas.
	pub fn resize(&self, width: f64, height: f64) {
		self.canvas.set_width(width as u32);
		self.canvas.set_height(height as u32);
	}
}

impl Surface for CanvasSurface {
	fn width(&self) -> f64 {
		self.canvas.width() as f64
	}

	fn height(&self) -> f64 {
		self.canvas.height() as f64
	}

	fn clear(&mut self) {
		self.ctx.clear_rect(0.0, 0.0, self.width(), self.height());
	}

	fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &Hsla) {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill_rect(x, y, w, h);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &Hsla) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill();
		self.ctx.close_path();
	}
}

/// Runs one animation tick: clear, draw the current state, then advance it.
///
/// Drawing before updating means each frame shows the state committed at the
/// end of the previous tick.
pub fn frame<S: Surface + ?Sized>(
	display: &mut Display,
	surface: &mut S,
	background: Option<&Hsla>,
) {
	draw_background(surface, background);
	display.draw_all(surface);
	display.update_all();
}

fn draw_background<S: Surface + ?Sized>(surface: &mut S, background: Option<&Hsla>) {
	surface.clear();
	if let Some(color) = background {
		let (w, h) = (surface.width(), surface.height());
		surface.fill_rect(0.0, 0.0, w, h, color);
	}
}

#[cfg(test)]
pub(crate) mod testing {
	use super::*;

	/// A recorded drawing call.
	#[derive(Clone, Debug, PartialEq)]
	pub enum Op {
		Clear,
		Rect { x: f64, y: f64, w: f64, h: f64, color: Hsla },
		Circle { x: f64, y: f64, radius: f64, color: Hsla },
	}

	/// Surface that records every call instead of drawing.
	#[derive(Debug, Default)]
	pub struct RecordingSurface {
		pub width: f64,
		pub height: f64,
		pub ops: Vec<Op>,
	}

	impl RecordingSurface {
		pub fn new(width: f64, height: f64) -> Self {
			Self {
				width,
				height,
				ops: Vec::new(),
			}
		}
	}

	impl Surface for RecordingSurface {
		fn width(&self) -> f64 {
			self.width
		}

		fn height(&self) -> f64 {
			self.height
		}

		fn clear(&mut self) {
			self.ops.push(Op::Clear);
		}

		fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &Hsla) {
			self.ops.push(Op::Rect {
				x,
				y,
				w,
				h,
				color: *color,
			});
		}

		fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &Hsla) {
			self.ops.push(Op::Circle {
				x,
				y,
				radius,
				color: *color,
			});
		}
	}
}

#[cfg(test)]
mod tests {
	use super::testing::{Op, RecordingSurface};
	use super::*;
	use crate::components::fireworks::firework::{Charge, Firework};

	fn shell(start_y: f64) -> Firework {
		Firework::new(
			100.0,
			50.0,
			start_y,
			Charge {
				particle_count: 3,
				speed: 5.0,
				radius: 4.0,
				color: Hsla::hsl(200.0, 100.0, 65.0),
			},
		)
	}

	#[test]
	fn frame_draws_before_updating() {
		let mut display = Display::default();
		display.add_firework(shell(500.0));
		let mut surface = RecordingSurface::new(800.0, 500.0);

		frame(&mut display, &mut surface, None);

		assert_eq!(
			surface.ops,
			vec![
				Op::Clear,
				Op::Rect {
					x: 100.0,
					y: 500.0,
					w: 4.0,
					h: 4.0,
					color: Hsla::hsl(200.0, 100.0, 65.0),
				},
			]
		);
		assert!(display.fireworks().all(|fw| fw.y < 500.0));
	}

	#[test]
	fn background_is_painted_after_clear() {
		let mut display = Display::default();
		let mut surface = RecordingSurface::new(320.0, 240.0);
		let bg = Hsla::new(230.0, 30.0, 8.0, 0.2);

		frame(&mut display, &mut surface, Some(&bg));

		assert_eq!(
			surface.ops,
			vec![
				Op::Clear,
				Op::Rect {
					x: 0.0,
					y: 0.0,
					w: 320.0,
					h: 240.0,
					color: bg,
				},
			]
		);
	}

	#[test]
	fn shells_are_drawn_under_sparks() {
		let mut display = Display::default();
		display.add_firework(shell(50.5));
		display.update_all();
		display.add_firework(shell(500.0));

		let mut surface = RecordingSurface::new(800.0, 500.0);
		display.draw_all(&mut surface);

		assert!(matches!(surface.ops[0], Op::Rect { .. }));
		assert_eq!(surface.ops.len(), 4);
		assert!(
			surface.ops[1..]
				.iter()
				.all(|op| matches!(op, Op::Circle { radius, .. } if *radius == 4.0))
		);
	}
}
