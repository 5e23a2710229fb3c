//! Decorative particle field for canvas backgrounds.
//!
//! A fixed number of softly glowing particles drift across a canvas:
//! - Straight-line motion with reflection off the canvas edges
//! - Sine-pulsed opacity per particle
//! - Full clear and redraw once per display refresh
//!
//! The simulation ([`ParticleSystem`]) and the draw loop ([`ParticleField`])
//! only depend on the [`DrawSurface`] trait and an injected random source, so
//! they run without a browser. [`ParticleFieldHandle`] wires them to a real
//! canvas.
//!
//! # Example
//!
//! ```ignore
//! use portfolio_particles::{FieldConfig, ParticleCanvas, create_particle_field};
//!
//! // Imperative: look up an existing canvas by id.
//! if let Some(handle) = create_particle_field("particles", None) {
//!     handle.detach();
//! }
//!
//! // Declarative: mount a footer strip.
//! view! { <ParticleCanvas id="footer-particles" config=FieldConfig::footer() /> }
//! ```

mod component;
mod error;
mod field;
mod handle;
mod particles;
mod render;
mod surface;
pub mod theme;
mod types;

pub use component::ParticleCanvas;
pub use error::SurfaceError;
pub use field::ParticleField;
pub use handle::{ParticleFieldHandle, create_particle_field, create_particle_field_with};
pub use particles::{Particle, ParticleSystem};
pub use surface::DrawSurface;
pub use theme::{Color, Palette, ParticleStyle};
pub use types::{FOOTER_COUNT, FULL_PAGE_COUNT, FieldConfig, PageConfig, Sizing};
