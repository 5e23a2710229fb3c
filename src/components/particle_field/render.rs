//! Canvas rendering for the particle field.
//!
//! Each particle is a filled circle with a soft glow in its own base color.
//! The glow is switched off again after every particle so that anything else
//! drawn on the same context is unaffected.

use super::particles::Particle;
use super::surface::DrawSurface;
use super::theme::ParticleStyle;

/// Draw a single particle at its current position and pulsing opacity.
pub fn draw_particle<S: DrawSurface + ?Sized>(surface: &S, particle: &Particle, style: &ParticleStyle) {
	let opacity = particle.opacity();

	surface.set_glow_radius(particle.size * style.blur_per_size);
	surface.set_glow_color(&particle.color.to_css_alpha(opacity * style.glow_opacity));

	surface.set_fill_color(&particle.color.to_css_alpha(opacity));
	surface.fill_circle(particle.x, particle.y, particle.size);

	surface.set_glow_radius(0.0);
}
