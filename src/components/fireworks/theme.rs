//! Color representation for fireworks.
//!
//! Colors are kept as structured HSLA values for their whole life and only
//! turned into CSS text when they reach the canvas.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced when reading an HSLA color from text.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ColorError {
	/// The text is not wrapped in `hsla(` ... `)`.
	#[error("expected `hsla(h, s%, l%, a)`, found {0:?}")]
	NotHsla(String),

	/// The wrapper held something other than hue, saturation, lightness and alpha.
	#[error("expected 4 color components, found {0}")]
	ComponentCount(usize),

	/// A component was not a number.
	#[error("invalid color component {index}: {value:?}")]
	InvalidComponent {
		/// Zero-based component position (0 = hue, 3 = alpha).
		index: usize,
		/// The offending text, trimmed.
		value: String,
	},
}

/// HSLA color: hue in degrees, saturation and lightness in percent, alpha in `[0, 1]`.
///
/// Alpha is not clamped; a fading particle may carry a slightly negative
/// alpha for its last tick, which the canvas treats as fully transparent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
	pub h: f64,
	pub s: f64,
	pub l: f64,
	pub a: f64,
}

impl Hsla {
	/// Fully opaque color.
	pub const fn hsl(h: f64, s: f64, l: f64) -> Self {
		Self { h, s, l, a: 1.0 }
	}

	pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
		Self { h, s, l, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Replace the alpha channel in place, leaving hue, saturation and lightness alone.
	pub fn set_alpha(&mut self, a: f64) {
		self.a = a;
	}

	pub fn to_css(self) -> String {
		format!("hsla({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
	}
}

impl fmt::Display for Hsla {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_css())
	}
}

impl FromStr for Hsla {
	type Err = ColorError;

	/// Parses the CSS functional notation `hsla(h, s%, l%, a)`.
	/// Percent signs on saturation and lightness are optional.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let inner = s
			.trim()
			.strip_prefix("hsla(")
			.and_then(|rest| rest.strip_suffix(')'))
			.ok_or_else(|| ColorError::NotHsla(s.to_string()))?;

		let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
		if parts.len() != 4 {
			return Err(ColorError::ComponentCount(parts.len()));
		}

		let mut values = [0.0; 4];
		for (index, (slot, part)) in values.iter_mut().zip(&parts).enumerate() {
			*slot = part
				.trim_end_matches('%')
				.parse()
				.map_err(|_| ColorError::InvalidComponent {
					index,
					value: part.to_string(),
				})?;
		}

		let [h, s, l, a] = values;
		Ok(Self { h, s, l, a })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_round_trips_through_parse() {
		let color = Hsla::new(212.0, 100.0, 65.0, 0.25);
		assert_eq!(color.to_css(), "hsla(212, 100%, 65%, 0.25)");
		assert_eq!(color.to_css().parse::<Hsla>(), Ok(color));
	}

	#[test]
	fn set_alpha_keeps_other_channels() {
		let mut color = Hsla::hsl(40.0, 100.0, 65.0);
		color.set_alpha(0.42);
		assert_eq!(color, Hsla::new(40.0, 100.0, 65.0, 0.42));
		assert_eq!(color.with_alpha(-0.01).h, 40.0);
	}

	#[test]
	fn rejects_non_hsla_text() {
		assert_eq!(
			"rgba(1, 2, 3, 1)".parse::<Hsla>(),
			Err(ColorError::NotHsla("rgba(1, 2, 3, 1)".into()))
		);
		assert!(matches!(
			"hsla(10, 100%, 65%".parse::<Hsla>(),
			Err(ColorError::NotHsla(_))
		));
	}

	#[test]
	fn rejects_wrong_component_count() {
		assert_eq!(
			"hsla(10, 100%, 65%)".parse::<Hsla>(),
			Err(ColorError::ComponentCount(3))
		);
		assert_eq!(
			"hsla(10, 100%, 65%, 1, 0)".parse::<Hsla>(),
			Err(ColorError::ComponentCount(5))
		);
	}

	#[test]
	fn rejects_bad_number() {
		assert_eq!(
			"hsla(10, lots%, 65%, 1)".parse::<Hsla>(),
			Err(ColorError::InvalidComponent {
				index: 1,
				value: "lots%".into(),
			})
		);
	}

	#[test]
	fn error_display() {
		let err = ColorError::ComponentCount(3);
		assert_eq!(err.to_string(), "expected 4 color components, found 3");
	}
}
