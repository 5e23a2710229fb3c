//! A particle system bound to the surface it draws on.

use rand::Rng;

use super::particles::ParticleSystem;
use super::render::draw_particle;
use super::surface::DrawSurface;
use super::theme::ParticleStyle;

/// Owns a fixed set of particles and the surface they are drawn into.
///
/// Each [`tick`](Self::tick) clears the whole surface, then advances and
/// redraws every particle in order. Scheduling of ticks is left to the caller.
pub struct ParticleField<S> {
	system: ParticleSystem,
	surface: S,
	style: ParticleStyle,
}

impl<S: DrawSurface> ParticleField<S> {
	/// Seed `count` random particles inside a `width` x `height` surface.
	pub fn new<R: Rng + ?Sized>(
		surface: S,
		width: f64,
		height: f64,
		count: usize,
		style: ParticleStyle,
		rng: &mut R,
	) -> Self {
		let system = ParticleSystem::new(rng, count, width, height, &style.palette);
		Self::from_system(surface, system, style)
	}

	/// Wrap an existing particle system.
	pub fn from_system(surface: S, system: ParticleSystem, style: ParticleStyle) -> Self {
		Self {
			system,
			surface,
			style,
		}
	}

	/// The simulated particles and their bounds.
	pub fn system(&self) -> &ParticleSystem {
		&self.system
	}

	/// The surface ticks draw into.
	pub fn surface(&self) -> &S {
		&self.surface
	}

	/// Run one simulate-and-render cycle.
	pub fn tick(&mut self) {
		let (w, h) = (self.system.width(), self.system.height());
		self.surface.clear_rect(w, h);

		for p in self.system.particles_mut() {
			p.advance(w, h);
			draw_particle(&self.surface, p, &self.style);
		}
	}

	/// Change the bounds used by future reflection checks and clears.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.system.resize(width, height);
	}
}
