//! Registry of live shells and sparks.
//!
//! Each tick the driver calls [`Display::draw_all`] and then
//! [`Display::update_all`]. Update runs two passes:
//!
//! 1. Every shell advances once. Shells that burst are removed in this same
//!    pass, so a shell is never drawn after it explodes. Sparks from the burst
//!    are staged rather than inserted.
//! 2. Every spark that was live when the tick started advances once and is
//!    removed if fully faded.
//!
//! Staged sparks join the registry after pass 2, so their first advance is on
//! the following tick and they are drawn at the burst point first.

use log::trace;

use super::config::SimulationConfig;
use super::firework::Firework;
use super::particle::Particle;
use super::render::Surface;

/// Identity of a registered shell or spark. Never reused by one [`Display`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

/// Owns every live [`Firework`] and [`Particle`].
#[derive(Debug)]
pub struct Display {
	config: SimulationConfig,
	fireworks: Vec<(EntityId, Firework)>,
	particles: Vec<(EntityId, Particle)>,
	next_id: u64,
}

impl Display {
	pub fn new(config: SimulationConfig) -> Self {
		Self {
			config,
			fireworks: Vec::new(),
			particles: Vec::new(),
			next_id: 0,
		}
	}

	pub fn config(&self) -> &SimulationConfig {
		&self.config
	}

	fn next_id(&mut self) -> EntityId {
		let id = EntityId(self.next_id);
		self.next_id += 1;
		id
	}

	pub fn add_firework(&mut self, firework: Firework) -> EntityId {
		let id = self.next_id();
		self.fireworks.push((id, firework));
		id
	}

	pub fn add_particle(&mut self, particle: Particle) -> EntityId {
		let id = self.next_id();
		self.particles.push((id, particle));
		id
	}

	/// Removes a shell. Unknown ids are ignored and yield `None`.
	pub fn remove_firework(&mut self, id: EntityId) -> Option<Firework> {
		let pos = self.fireworks.iter().position(|(fid, _)| *fid == id)?;
		Some(self.fireworks.swap_remove(pos).1)
	}

	/// Removes a spark. Unknown ids are ignored and yield `None`.
	pub fn remove_particle(&mut self, id: EntityId) -> Option<Particle> {
		let pos = self.particles.iter().position(|(pid, _)| *pid == id)?;
		Some(self.particles.swap_remove(pos).1)
	}

	pub fn firework(&self, id: EntityId) -> Option<&Firework> {
		self.fireworks
			.iter()
			.find_map(|(fid, fw)| (*fid == id).then_some(fw))
	}

	pub fn particle(&self, id: EntityId) -> Option<&Particle> {
		self.particles
			.iter()
			.find_map(|(pid, p)| (*pid == id).then_some(p))
	}

	pub fn fireworks(&self) -> impl Iterator<Item = &Firework> {
		self.fireworks.iter().map(|(_, fw)| fw)
	}

	pub fn particles(&self) -> impl Iterator<Item = &Particle> {
		self.particles.iter().map(|(_, p)| p)
	}

	pub fn firework_count(&self) -> usize {
		self.fireworks.len()
	}

	pub fn particle_count(&self) -> usize {
		self.particles.len()
	}

	/// Nothing left to animate.
	pub fn is_idle(&self) -> bool {
		self.fireworks.is_empty() && self.particles.is_empty()
	}

	/// Advances every live entity by one tick and retires the finished ones.
	pub fn update_all(&mut self) {
		let config = &self.config;
		let mut spawned: Vec<Particle> = Vec::new();

		self.fireworks.retain_mut(|(_, fw)| {
			fw.advance(config, &mut spawned);
			!fw.is_exploded()
		});

		self.particles.retain_mut(|(_, p)| {
			p.advance(config);
			!p.is_spent()
		});

		if !spawned.is_empty() {
			trace!("fireworks: staging {} new sparks", spawned.len());
		}
		for particle in spawned {
			self.add_particle(particle);
		}
	}

	/// Draws all shells, then all sparks on top.
	pub fn draw_all<S: Surface + ?Sized>(&self, surface: &mut S) {
		for (_, fw) in &self.fireworks {
			fw.render(surface, self.config.emitter_size);
		}
		for (_, p) in &self.particles {
			p.render(surface);
		}
	}
}

impl Default for Display {
	fn default() -> Self {
		Self::new(SimulationConfig::default())
	}
}
