//! Simulation context shared by the input handlers and the animation loop.

use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::config::SimulationConfig;
use super::display::{Display, EntityId};
use super::firework::Firework;
use super::math::ticks_to_decay;
use super::render::{self, Surface};
use super::theme::Hsla;

/// Everything one canvas needs to run the show: the registry, the random
/// source for new shells, the parsed background and the current surface size.
///
/// Created once when the component mounts and handed to every callback, so a
/// test can build its own isolated instance.
pub struct FireworksState {
	pub display: Display,
	pub width: f64,
	pub height: f64,
	background: Option<Hsla>,
	rng: StdRng,
}

impl FireworksState {
	pub fn new(config: SimulationConfig, width: f64, height: f64, seed: u64) -> Self {
		let background = config.background_color().unwrap_or_else(|e| {
			warn!("fireworks: ignoring background: {}", e);
			None
		});
		Self {
			display: Display::new(config),
			width,
			height,
			background,
			rng: StdRng::seed_from_u64(seed),
		}
	}

	/// Launches a shell from the bottom edge at `x`, bursting at height `y`.
	/// `x` is clamped to the surface width.
	pub fn launch(&mut self, x: f64, y: f64) -> EntityId {
		let x = x.clamp(0.0, self.width.max(0.0));
		let config = self.display.config();
		let firework = Firework::launch(x, y, self.height, config, &mut self.rng);
		debug!(
			"fireworks: launch at x={:.0} toward y={:.0}, {} sparks, burst in ~{} ticks",
			x,
			y,
			firework.particle_count(),
			ticks_to_decay(
				(self.height - y).abs(),
				1.0 - config.rise_blend,
				config.explode_distance
			)
		);
		self.display.add_firework(firework)
	}

	/// Runs one animation frame against `surface`.
	pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
		render::frame(&mut self.display, surface, self.background.as_ref());
	}

	/// Records a new surface size; only shells launched afterwards see it.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
