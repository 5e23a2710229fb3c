//! Immediate-mode 2D drawing primitives the particle field renders through.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

/// The small subset of a 2D canvas context the particle renderer needs.
///
/// Methods take `&self` to match `CanvasRenderingContext2d`, whose calls
/// mutate state on the JS side.
pub trait DrawSurface {
	/// Clear the rectangle from the origin to `(width, height)`.
	fn clear_rect(&self, width: f64, height: f64);
	/// Set the fill color as a CSS color string.
	fn set_fill_color(&self, css: &str);
	/// Set the glow (shadow) blur radius. `0.0` disables the glow.
	fn set_glow_radius(&self, radius: f64);
	/// Set the glow (shadow) color as a CSS color string.
	fn set_glow_color(&self, css: &str);
	/// Fill a circle with the current fill color and glow.
	fn fill_circle(&self, x: f64, y: f64, radius: f64);
}

impl DrawSurface for CanvasRenderingContext2d {
	fn clear_rect(&self, width: f64, height: f64) {
		CanvasRenderingContext2d::clear_rect(self, 0.0, 0.0, width, height);
	}

	fn set_fill_color(&self, css: &str) {
		self.set_fill_style_str(css);
	}

	fn set_glow_radius(&self, radius: f64) {
		self.set_shadow_blur(radius);
	}

	fn set_glow_color(&self, css: &str) {
		self.set_shadow_color(css);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, TAU);
		self.fill();
	}
}

#[cfg(test)]
pub(super) mod recording {
	use std::cell::RefCell;

	use super::DrawSurface;

	/// One recorded drawing call.
	#[derive(Clone, Debug, PartialEq)]
	pub enum Call {
		Clear(f64, f64),
		Fill(String),
		GlowRadius(f64),
		GlowColor(String),
		Circle(f64, f64, f64),
	}

	/// Surface that records every call for inspection.
	#[derive(Default)]
	pub struct RecordingSurface {
		pub calls: RefCell<Vec<Call>>,
	}

	impl RecordingSurface {
		pub fn take(&self) -> Vec<Call> {
			self.calls.take()
		}
	}

	impl DrawSurface for RecordingSurface {
		fn clear_rect(&self, width: f64, height: f64) {
			self.calls.borrow_mut().push(Call::Clear(width, height));
		}

		fn set_fill_color(&self, css: &str) {
			self.calls.borrow_mut().push(Call::Fill(css.to_string()));
		}

		fn set_glow_radius(&self, radius: f64) {
			self.calls.borrow_mut().push(Call::GlowRadius(radius));
		}

		fn set_glow_color(&self, css: &str) {
			self.calls.borrow_mut().push(Call::GlowColor(css.to_string()));
		}

		fn fill_circle(&self, x: f64, y: f64, radius: f64) {
			self.calls.borrow_mut().push(Call::Circle(x, y, radius));
		}
	}
}
