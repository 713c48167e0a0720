//! Sparks released by a bursting shell.

use super::config::SimulationConfig;
use super::firework::Firework;
use super::render::Surface;
use super::theme::Hsla;

/// A single spark.
///
/// Moves along a fixed unit direction at a speed that decays geometrically,
/// drifts down by a constant amount each tick, and fades out once it has
/// slowed below the fade threshold.
#[derive(Clone, Debug)]
pub struct Particle {
	pub dx: f64,
	pub dy: f64,
	pub x: f64,
	pub y: f64,
	pub alpha: f64,
	pub speed: f64,
	pub radius: f64,
	pub color: Hsla,
}

impl Particle {
	/// Spark at the shell's current position, copying its speed, radius and color.
	pub fn new(firework: &Firework, dx: f64, dy: f64) -> Self {
		Self {
			dx,
			dy,
			x: firework.x,
			y: firework.y,
			alpha: 1.0,
			speed: firework.speed(),
			radius: firework.radius(),
			color: firework.color(),
		}
	}

	pub fn advance(&mut self, config: &SimulationConfig) {
		self.speed *= config.friction;
		self.x += self.dx * self.speed;
		self.y += self.dy * self.speed + config.gravity;

		if self.speed < config.fade_threshold {
			self.alpha -= config.fade_step;
			self.color.set_alpha(self.alpha);
		}
	}

	/// Fully faded; alpha may have stepped slightly below zero.
	pub fn is_spent(&self) -> bool {
		self.alpha <= 0.0
	}

	pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
		surface.fill_circle(self.x, self.y, self.radius, &self.color);
	}
}
