//! Simulation tuning.
//!
//! The defaults reproduce the classic look: 8 to 15 sparks per shell, sparks
//! slowing by 5% a tick and fading out once they crawl below one pixel per
//! tick. A page can override any field by embedding JSON in a
//! `<script id="fireworks-config">` element; missing fields keep their default.

use rand::Rng;
use rand::distr::uniform::SampleUniform;
use serde::Deserialize;
use thiserror::Error;

use super::theme::{ColorError, Hsla};

/// Errors produced when loading or validating a [`SimulationConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The config text was not valid JSON for this schema.
	#[error("invalid config JSON: {0}")]
	Json(#[from] serde_json::Error),

	/// A `min..max` range that would never produce a value.
	#[error("invalid range for `{field}`: min must be below max")]
	EmptyRange {
		/// Name of the offending field.
		field: &'static str,
	},

	/// A scalar outside the interval the simulation is defined on.
	#[error("`{field}` out of bounds: {value}")]
	OutOfBounds {
		/// Name of the offending field.
		field: &'static str,
		/// The rejected value.
		value: f64,
	},

	/// The background color could not be parsed.
	#[error("invalid background color: {0}")]
	Background(#[from] ColorError),
}

/// Half-open range `[min, max)` that per-shell attributes are drawn from.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct Span<T> {
	pub min: T,
	pub max: T,
}

impl<T> Span<T> {
	pub const fn new(min: T, max: T) -> Self {
		Self { min, max }
	}
}

impl<T: SampleUniform + PartialOrd + Copy> Span<T> {
	pub fn is_empty(&self) -> bool {
		!(self.min < self.max)
	}

	/// Draws a value from the range. An empty range yields `min`.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
		if self.is_empty() {
			self.min
		} else {
			rng.random_range(self.min..self.max)
		}
	}
}

/// Tunable constants for launching, bursting and fading.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
	/// Sparks per shell.
	pub particle_count: Span<usize>,
	/// Initial spark speed in pixels per tick, shared by every spark of a shell.
	pub speed: Span<f64>,
	/// Spark radius in pixels, shared by every spark of a shell.
	pub radius: Span<f64>,
	/// Whole-degree hue of a shell.
	pub hue: Span<u16>,
	/// Saturation in percent.
	pub saturation: f64,
	/// Lightness in percent.
	pub lightness: f64,
	/// Fraction of the remaining climb covered each tick.
	pub rise_blend: f64,
	/// A shell bursts once it is closer than this to its target.
	pub explode_distance: f64,
	/// Side of the square drawn for a rising shell.
	pub emitter_size: f64,
	/// Per-tick speed multiplier for sparks.
	pub friction: f64,
	/// Constant downward drift added to sparks each tick.
	pub gravity: f64,
	/// Sparks start fading once their speed drops below this.
	pub fade_threshold: f64,
	/// Opacity lost per tick while fading.
	pub fade_step: f64,
	/// Optional `hsla(...)` fill painted after each clear.
	pub background: Option<String>,
}

impl Default for SimulationConfig {
	fn default() -> Self {
		Self {
			particle_count: Span::new(8, 16),
			speed: Span::new(4.0, 8.0),
			radius: Span::new(4.0, 6.0),
			hue: Span::new(0, 360),
			saturation: 100.0,
			lightness: 65.0,
			rise_blend: 0.07,
			explode_distance: 1.0,
			emitter_size: 4.0,
			friction: 0.95,
			gravity: 0.5,
			fade_threshold: 1.0,
			fade_step: 0.01,
			background: None,
		}
	}
}

impl SimulationConfig {
	/// Parses and validates a JSON config.
	pub fn from_json(text: &str) -> Result<Self, ConfigError> {
		let config: Self = serde_json::from_str(text)?;
		config.validate()?;
		Ok(config)
	}

	/// Checks every range and scalar the simulation depends on.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.particle_count.is_empty() {
			return Err(ConfigError::EmptyRange {
				field: "particle_count",
			});
		}
		if self.particle_count.min == 0 {
			return Err(ConfigError::OutOfBounds {
				field: "particle_count",
				value: 0.0,
			});
		}
		if self.speed.is_empty() {
			return Err(ConfigError::EmptyRange { field: "speed" });
		}
		if self.radius.is_empty() {
			return Err(ConfigError::EmptyRange { field: "radius" });
		}
		if self.hue.is_empty() {
			return Err(ConfigError::EmptyRange { field: "hue" });
		}
		if self.speed.min <= 0.0 {
			return Err(ConfigError::OutOfBounds {
				field: "speed",
				value: self.speed.min,
			});
		}
		if self.radius.min < 0.0 {
			return Err(ConfigError::OutOfBounds {
				field: "radius",
				value: self.radius.min,
			});
		}

		let unit_checks = [
			("rise_blend", self.rise_blend, self.rise_blend > 0.0 && self.rise_blend <= 1.0),
			("friction", self.friction, self.friction > 0.0 && self.friction < 1.0),
			("fade_threshold", self.fade_threshold, self.fade_threshold > 0.0),
			("fade_step", self.fade_step, self.fade_step > 0.0),
			("explode_distance", self.explode_distance, self.explode_distance > 0.0),
		];
		for (field, value, ok) in unit_checks {
			if !ok {
				return Err(ConfigError::OutOfBounds { field, value });
			}
		}

		self.background_color()?;
		Ok(())
	}

	/// Parsed background fill, if one is configured.
	pub fn background_color(&self) -> Result<Option<Hsla>, ColorError> {
		self.background.as_deref().map(str::parse::<Hsla>).transpose()
	}
}
