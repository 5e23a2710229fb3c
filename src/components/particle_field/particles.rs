//! Reflecting particles with pulsing opacity.

use std::f64::consts::TAU;

use rand::Rng;

use super::theme::{Color, Palette};

/// A single floating particle.
///
/// Only position, velocity sign and pulse phase change after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Circle radius in pixels, in `[1, 4)`.
	pub size: f64,
	/// Peak opacity, in `[0.2, 0.7)`.
	pub base_opacity: f64,
	pub pulse_phase: f64,
	pub pulse_speed: f64,
	pub color: Color,
}

impl Particle {
	/// Randomize a particle somewhere inside a `width` x `height` surface.
	pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, palette: &Palette) -> Self {
		Self {
			x: rng.r#gen::<f64>() * width,
			y: rng.r#gen::<f64>() * height,
			vx: (rng.r#gen::<f64>() - 0.5) * 0.5,
			vy: (rng.r#gen::<f64>() - 0.5) * 0.5,
			size: 1.0 + rng.r#gen::<f64>() * 3.0,
			base_opacity: 0.2 + rng.r#gen::<f64>() * 0.5,
			pulse_phase: rng.r#gen::<f64>() * TAU,
			pulse_speed: 0.01 + rng.r#gen::<f64>() * 0.02,
			color: palette.choose(rng),
		}
	}

	/// Advance one tick and reflect off the `[0, width] x [0, height]` bounds.
	///
	/// Position is never clamped; a particle may overshoot by one step before
	/// its flipped velocity carries it back.
	pub fn advance(&mut self, width: f64, height: f64) {
		self.x += self.vx;
		self.y += self.vy;
		self.pulse_phase += self.pulse_speed;

		if self.x < 0.0 || self.x > width {
			self.vx = -self.vx;
		}
		if self.y < 0.0 || self.y > height {
			self.vy = -self.vy;
		}
	}

	/// Current pulsing opacity, always in `(0, base_opacity]`.
	pub fn opacity(&self) -> f64 {
		self.base_opacity * (0.7 + 0.3 * self.pulse_phase.sin())
	}
}

/// Fixed-size particle collection bound to cached surface dimensions.
#[derive(Clone, Debug)]
pub struct ParticleSystem {
	particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleSystem {
	/// Seed `count` random particles inside a `width` x `height` surface.
	pub fn new<R: Rng + ?Sized>(
		rng: &mut R,
		count: usize,
		width: f64,
		height: f64,
		palette: &Palette,
	) -> Self {
		let particles = (0..count)
			.map(|_| Particle::random(&mut *rng, width, height, palette))
			.collect();
		Self::from_particles(particles, width, height)
	}

	/// Build a system from explicit particles.
	pub fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
		Self {
			particles,
			width,
			height,
		}
	}

	/// Particles in draw order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub(super) fn particles_mut(&mut self) -> &mut [Particle] {
		&mut self.particles
	}

	/// Width used for reflection checks.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Height used for reflection checks.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Update the bounds used by future reflection checks.
	/// Existing particles keep their position and velocity.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	fn still(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			size: 2.0,
			base_opacity: 0.5,
			pulse_phase: 0.0,
			pulse_speed: 0.0,
			color: Color::rgb(168, 85, 247),
		}
	}

	#[test]
	fn random_particles_respect_ranges() {
		let mut rng = SmallRng::seed_from_u64(42);
		let palette = Palette::violet();
		let system = ParticleSystem::new(&mut rng, 500, 800.0, 600.0, &palette);

		assert_eq!(system.particles().len(), 500);
		for p in system.particles() {
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!((-0.25..0.25).contains(&p.vx));
			assert!((-0.25..0.25).contains(&p.vy));
			assert!((1.0..4.0).contains(&p.size));
			assert!((0.2..0.7).contains(&p.base_opacity));
			assert!((0.0..TAU).contains(&p.pulse_phase));
			assert!((0.01..0.03).contains(&p.pulse_speed));
			assert!(palette.colors().contains(&p.color));
		}
	}

	#[test]
	fn same_seed_same_particles() {
		let palette = Palette::violet();
		let a = ParticleSystem::new(&mut SmallRng::seed_from_u64(3), 20, 100.0, 100.0, &palette);
		let b = ParticleSystem::new(&mut SmallRng::seed_from_u64(3), 20, 100.0, 100.0, &palette);
		assert_eq!(a.particles(), b.particles());
	}

	#[test]
	fn reflects_at_right_edge_without_clamping() {
		let mut p = still(99.8, 50.0);
		p.vx = 0.5;

		p.advance(100.0, 100.0);
		assert!((p.x - 100.3).abs() < 1e-9);
		assert_eq!(p.vx, -0.5);

		p.advance(100.0, 100.0);
		assert!((p.x - 99.8).abs() < 1e-9);
		assert_eq!(p.vx, -0.5);
	}

	#[test]
	fn reflects_at_top_edge() {
		let mut p = still(50.0, 0.1);
		p.vy = -0.25;

		p.advance(100.0, 100.0);
		assert!(p.y < 0.0);
		assert_eq!(p.vy, 0.25);

		p.advance(100.0, 100.0);
		assert!(p.y > 0.0);
	}

	#[test]
	fn axes_reflect_independently() {
		let mut p = still(99.9, 50.0);
		p.vx = 0.2;
		p.vy = 0.2;
		p.advance(100.0, 100.0);
		assert_eq!(p.vx, -0.2);
		assert_eq!(p.vy, 0.2);
	}

	#[test]
	fn opacity_at_zero_phase() {
		let p = still(0.0, 0.0);
		assert_eq!(p.opacity(), 0.5 * 0.7);
	}

	#[test]
	fn resize_keeps_particles_in_place() {
		let mut rng = SmallRng::seed_from_u64(1);
		let mut system = ParticleSystem::new(&mut rng, 25, 400.0, 400.0, &Palette::violet());
		let before = system.particles().to_vec();

		system.resize(50.0, 30.0);

		assert_eq!(system.particles(), before.as_slice());
		assert_eq!((system.width(), system.height()), (50.0, 30.0));
	}
}
