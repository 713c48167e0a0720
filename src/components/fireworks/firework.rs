//! Rising shells that burst into sparks.

use log::debug;
use rand::Rng;

use super::config::SimulationConfig;
use super::math::{burst_direction, lerp};
use super::particle::Particle;
use super::render::Surface;
use super::theme::Hsla;

/// Per-shell attributes picked once at launch and handed down to every spark.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Charge {
	/// Number of sparks released by the burst.
	pub particle_count: usize,
	/// Initial spark speed.
	pub speed: f64,
	/// Spark radius.
	pub radius: f64,
	/// Shell and spark color, fully opaque.
	pub color: Hsla,
}

impl Charge {
	/// Draws a charge from the configured ranges.
	pub fn random<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> Self {
		let hue = config.hue.sample(rng);
		Self {
			particle_count: config.particle_count.sample(rng),
			speed: config.speed.sample(rng),
			radius: config.radius.sample(rng),
			color: Hsla::hsl(f64::from(hue), config.saturation, config.lightness),
		}
	}
}

/// A shell climbing from the bottom edge toward the point that launched it.
///
/// `x` never changes. `y` eases toward `target_y` and once it gets within
/// [`SimulationConfig::explode_distance`] the shell bursts exactly once.
#[derive(Clone, Debug)]
pub struct Firework {
	pub x: f64,
	pub y: f64,
	pub target_y: f64,
	charge: Charge,
	exploded: bool,
}

impl Firework {
	pub fn new(x: f64, target_y: f64, start_y: f64, charge: Charge) -> Self {
		Self {
			x,
			y: start_y,
			target_y,
			charge,
			exploded: false,
		}
	}

	/// Shell with a randomly drawn charge.
	pub fn launch<R: Rng + ?Sized>(
		x: f64,
		target_y: f64,
		start_y: f64,
		config: &SimulationConfig,
		rng: &mut R,
	) -> Self {
		Self::new(x, target_y, start_y, Charge::random(config, rng))
	}

	pub fn charge(&self) -> &Charge {
		&self.charge
	}

	pub fn particle_count(&self) -> usize {
		self.charge.particle_count
	}

	pub fn speed(&self) -> f64 {
		self.charge.speed
	}

	pub fn radius(&self) -> f64 {
		self.charge.radius
	}

	pub fn color(&self) -> Hsla {
		self.charge.color
	}

	pub fn is_exploded(&self) -> bool {
		self.exploded
	}

	/// Advances one tick, bursting into `sparks` on arrival.
	pub fn advance<E: Extend<Particle>>(&mut self, config: &SimulationConfig, sparks: &mut E) {
		self.y = lerp(self.y, self.target_y, config.rise_blend);
		if !self.exploded && (self.y - self.target_y).abs() < config.explode_distance {
			self.detonate(sparks);
		}
	}

	/// Releases one spark per evenly spaced direction and marks the shell spent.
	///
	/// Callers check [`Self::is_exploded`] first; a second call would release a
	/// second burst.
	pub fn detonate<E: Extend<Particle>>(&mut self, sparks: &mut E) {
		let count = self.charge.particle_count;
		sparks.extend((0..count).map(|i| {
			let (dx, dy) = burst_direction(i, count);
			Particle::new(self, dx, dy)
		}));
		self.exploded = true;
		debug!(
			"fireworks: burst at ({:.1}, {:.1}) into {} sparks",
			self.x, self.y, count
		);
	}

	/// Draws the shell as a small filled square.
	pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, size: f64) {
		surface.fill_rect(self.x, self.y, size, size, &self.charge.color);
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::fireworks::math::ticks_to_decay;

	fn charge(particle_count: usize) -> Charge {
		Charge {
			particle_count,
			speed: 6.0,
			radius: 5.0,
			color: Hsla::hsl(120.0, 100.0, 65.0),
		}
	}

	#[test]
	fn random_charge_uses_config_ranges() {
		let config = SimulationConfig::default();
		let mut rng = StdRng::seed_from_u64(42);
		for _ in 0..500 {
			let c = Charge::random(&config, &mut rng);
			assert!((8..16).contains(&c.particle_count));
			assert!((4.0..8.0).contains(&c.speed));
			assert!((4.0..6.0).contains(&c.radius));
			assert!((0.0..360.0).contains(&c.color.h));
			assert_eq!(c.color.h.fract(), 0.0);
			assert_eq!((c.color.s, c.color.l, c.color.a), (100.0, 65.0, 1.0));
		}
	}

	#[test]
	fn climbs_monotonically_and_bursts_once() {
		let config = SimulationConfig::default();
		let mut fw = Firework::new(100.0, 50.0, 500.0, charge(12));
		let mut sparks = Vec::new();
		let mut ticks = 0;
		while !fw.is_exploded() {
			let before = fw.y;
			fw.advance(&config, &mut sparks);
			assert!(fw.y < before);
			assert!(fw.y >= fw.target_y);
			ticks += 1;
			assert!(ticks < 1000);
		}
		assert_eq!(sparks.len(), 12);
		assert_eq!(ticks, ticks_to_decay(450.0, 0.93, 1.0));

		// Further ticks keep easing but never burst again.
		for _ in 0..10 {
			fw.advance(&config, &mut sparks);
		}
		assert_eq!(sparks.len(), 12);
	}

	#[test]
	fn bursts_when_target_is_below_start() {
		let config = SimulationConfig::default();
		let mut fw = Firework::new(0.0, 300.0, 200.0, charge(8));
		let mut sparks = Vec::new();
		for _ in 0..200 {
			fw.advance(&config, &mut sparks);
		}
		assert!(fw.is_exploded());
		assert_eq!(sparks.len(), 8);
	}

	#[test]
	fn sparks_inherit_shell_state() {
		let mut fw = Firework::new(100.0, 50.0, 50.5, charge(4));
		let mut sparks = Vec::new();
		fw.detonate(&mut sparks);
		for p in &sparks {
			assert_eq!((p.x, p.y), (100.0, 50.5));
			assert_eq!(p.speed, 6.0);
			assert_eq!(p.radius, 5.0);
			assert_eq!(p.color, fw.color());
			assert_eq!(p.alpha, 1.0);
		}
	}

	proptest! {
		#[test]
		fn burst_directions_are_evenly_spaced_unit_vectors(count in 1usize..64) {
			let mut fw = Firework::new(0.0, 0.0, 0.0, charge(count));
			let mut sparks = Vec::new();
			fw.detonate(&mut sparks);
			prop_assert_eq!(sparks.len(), count);
			prop_assert!(fw.is_exploded());
			for (i, p) in sparks.iter().enumerate() {
				let angle = std::f64::consts::TAU * i as f64 / count as f64;
				prop_assert!((p.dx - angle.cos()).abs() < 1e-12);
				prop_assert!((p.dy - angle.sin()).abs() < 1e-12);
				prop_assert!((p.dx.hypot(p.dy) - 1.0).abs() < 1e-12);
			}
		}

		#[test]
		fn burst_tick_matches_closed_form(start in 60.0f64..2000.0, target in 0.0f64..50.0) {
			let config = SimulationConfig::default();
			let mut fw = Firework::new(0.0, target, start, charge(8));
			let mut sparks = Vec::new();
			let mut ticks = 0u32;
			while !fw.is_exploded() {
				fw.advance(&config, &mut sparks);
				ticks += 1;
			}
			let expected = ticks_to_decay(start - target, 1.0 - config.rise_blend, 1.0);
			prop_assert!(ticks.abs_diff(expected) <= 1);
		}
	}
}
