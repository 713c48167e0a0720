//! Numeric helpers shared by fireworks and particles.

use std::f64::consts::TAU;

/// Moves `start` a fraction `t` of the way toward `end`.
///
/// Applied once per tick with a fixed `t`, this gives an exponential ease-out:
/// the remaining distance shrinks by a factor of `1 - t` every tick and the
/// result never passes `end` for `t` in `(0, 1]`.
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
	start + (end - start) * t
}

/// Unit direction of slot `index` out of `count` slots spread evenly around a circle.
pub fn burst_direction(index: usize, count: usize) -> (f64, f64) {
	let angle = TAU * index as f64 / count as f64;
	(angle.cos(), angle.sin())
}

/// Number of ticks until `value * ratio^t` first drops below `threshold`.
///
/// Closed form for the geometric decays used by the simulation: the gap
/// between a rising firework and its target (ratio `1 - blend`) and a
/// particle's speed (ratio `friction`). Returns `u32::MAX` when `ratio` does
/// not shrink the value.
pub fn ticks_to_decay(value: f64, ratio: f64, threshold: f64) -> u32 {
	if value < threshold {
		return 0;
	}
	if !(ratio > 0.0 && ratio < 1.0) {
		return u32::MAX;
	}
	let t = (threshold / value).ln() / ratio.ln();
	t.floor() as u32 + 1
}
