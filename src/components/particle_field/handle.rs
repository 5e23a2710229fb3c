//! Browser runner for particle fields.
//!
//! Binds a [`ParticleField`] to an HTML canvas, re-measures it on window
//! `resize`, and drives it with `requestAnimationFrame`. Closures registered
//! with the browser only hold weak references, so dropping the handle is
//! enough to stop the loop and release both listeners.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, Window};

use super::error::SurfaceError;
use super::field::ParticleField;
use super::particles::Particle;
use super::types::{FieldConfig, Sizing};

/// Shared state between the handle and the browser callbacks.
struct Runner {
	field: RefCell<ParticleField<CanvasRenderingContext2d>>,
	canvas: HtmlCanvasElement,
	sizing: Sizing,
	/// Pending `requestAnimationFrame` id while the loop is running.
	frame: Cell<Option<i32>>,
	animate: RefCell<Option<Closure<dyn FnMut()>>>,
	resize_cb: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Runner {
	fn step(&self) {
		self.frame.set(None);
		if !self.canvas.is_connected() {
			debug!("particle-field: #{} left the document, stopping", self.canvas.id());
			return;
		}
		self.field.borrow_mut().tick();
		self.schedule();
	}

	fn schedule(&self) {
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(ref cb) = *self.animate.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				self.frame.set(Some(id));
			}
		}
	}

	fn cancel(&self) {
		if let Some(id) = self.frame.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
	}

	fn refit(&self) {
		match fit_canvas(&self.canvas, self.sizing) {
			Ok((w, h)) => {
				self.field.borrow_mut().resize(w, h);
				debug!("particle-field: #{} resized to {}x{}", self.canvas.id(), w, h);
			}
			Err(e) => debug!("particle-field: #{} resize skipped: {}", self.canvas.id(), e),
		}
	}
}

impl Drop for Runner {
	fn drop(&mut self) {
		self.cancel();
		if let (Some(window), Some(cb)) = (web_sys::window(), self.resize_cb.borrow().as_ref()) {
			let _ = window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
	}
}

/// A running (or stopped) particle field attached to a canvas element.
///
/// Dropping the handle stops the animation. Use [`detach`](Self::detach) to
/// keep it running for the lifetime of the page instead.
pub struct ParticleFieldHandle {
	runner: Rc<Runner>,
}

impl ParticleFieldHandle {
	/// Attach a field to `canvas` and start animating it.
	///
	/// Returns `None` when the canvas has no parent or no 2D context.
	pub fn attach(canvas: HtmlCanvasElement, config: &FieldConfig) -> Option<Self> {
		match Self::try_attach(canvas, config) {
			Ok(handle) => Some(handle),
			Err(e) => {
				debug!("particle-field: not started: {}", e);
				None
			}
		}
	}

	fn try_attach(canvas: HtmlCanvasElement, config: &FieldConfig) -> Result<Self, SurfaceError> {
		let ctx = context_2d(&canvas)?;
		let (w, h) = fit_canvas(&canvas, config.sizing)?;

		let mut rng = SmallRng::seed_from_u64(browser_seed());
		let field = ParticleField::new(ctx, w, h, config.count, config.style.clone(), &mut rng);

		let runner = Rc::new(Runner {
			field: RefCell::new(field),
			canvas,
			sizing: config.sizing,
			frame: Cell::new(None),
			animate: RefCell::new(None),
			resize_cb: RefCell::new(None),
		});
		listen_resize(&runner)?;

		info!(
			"particle-field: {} particles on #{} ({}x{})",
			config.count,
			runner.canvas.id(),
			w,
			h
		);

		let handle = Self { runner };
		handle.start();
		Ok(handle)
	}

	/// Begin scheduling ticks. No-op if already running.
	pub fn start(&self) {
		let runner = &self.runner;
		if runner.frame.get().is_some() {
			return;
		}
		if runner.animate.borrow().is_none() {
			let weak: Weak<Runner> = Rc::downgrade(runner);
			*runner.animate.borrow_mut() = Some(Closure::new(move || {
				if let Some(runner) = weak.upgrade() {
					runner.step();
				}
			}));
		}
		runner.schedule();
	}

	/// Cancel the pending frame. The field keeps its state and can be restarted.
	pub fn stop(&self) {
		self.runner.cancel();
	}

	/// Whether a frame is currently scheduled.
	pub fn is_running(&self) -> bool {
		self.runner.frame.get().is_some()
	}

	/// Run a single tick immediately, outside the frame schedule.
	pub fn tick(&self) {
		self.runner.field.borrow_mut().tick();
	}

	/// Current bounds used for reflection.
	pub fn size(&self) -> (f64, f64) {
		let field = self.runner.field.borrow();
		(field.system().width(), field.system().height())
	}

	/// Snapshot of the particles in draw order.
	pub fn particles(&self) -> Vec<Particle> {
		self.runner.field.borrow().system().particles().to_vec()
	}

	/// Hand the field to the page: it keeps animating until unload.
	pub fn detach(self) {
		std::mem::forget(self);
	}
}

/// Look up a canvas by id and start a full-page field on it.
///
/// `count` defaults to 50. Returns `None`, without panicking or logging above
/// `debug`, when the surface cannot be used.
pub fn create_particle_field(surface_id: &str, count: Option<usize>) -> Option<ParticleFieldHandle> {
	let config = match count {
		Some(count) => FieldConfig::full_page().with_count(count),
		None => FieldConfig::full_page(),
	};
	create_particle_field_with(surface_id, &config)
}

/// Look up a canvas by id and start a field with explicit configuration.
pub fn create_particle_field_with(
	surface_id: &str,
	config: &FieldConfig,
) -> Option<ParticleFieldHandle> {
	match find_canvas(surface_id) {
		Ok(canvas) => ParticleFieldHandle::attach(canvas, config),
		Err(e) => {
			debug!("particle-field: not started: {}", e);
			None
		}
	}
}

fn window() -> Result<Window, SurfaceError> {
	web_sys::window().ok_or(SurfaceError::NoWindow)
}

fn find_canvas(id: &str) -> Result<HtmlCanvasElement, SurfaceError> {
	let document = window()?.document().ok_or(SurfaceError::NoDocument)?;
	let element = document
		.get_element_by_id(id)
		.ok_or_else(|| SurfaceError::NotFound(id.to_string()))?;
	element
		.dyn_into()
		.map_err(|_| SurfaceError::NotCanvas(id.to_string()))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SurfaceError> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
		.ok_or(SurfaceError::NoContext)
}

/// Size the canvas backing store for `sizing` and return its pixel bounds.
fn fit_canvas(canvas: &HtmlCanvasElement, sizing: Sizing) -> Result<(f64, f64), SurfaceError> {
	let parent = canvas.parent_element().ok_or(SurfaceError::NoParent)?;

	let (w, h) = match sizing {
		Sizing::Viewport => {
			let win = window()?;
			(
				win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
				win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
			)
		}
		Sizing::Parent => match parent.dyn_ref::<HtmlElement>() {
			Some(el) => (el.offset_width() as f64, el.offset_height() as f64),
			None => (parent.client_width() as f64, parent.client_height() as f64),
		},
	};

	let (w, h) = (w.max(0.0) as u32, h.max(0.0) as u32);
	canvas.set_width(w);
	canvas.set_height(h);
	Ok((w as f64, h as f64))
}

fn listen_resize(runner: &Rc<Runner>) -> Result<(), SurfaceError> {
	let weak = Rc::downgrade(runner);
	let cb = Closure::<dyn FnMut()>::new(move || {
		if let Some(runner) = weak.upgrade() {
			runner.refit();
		}
	});
	let _ = window()?.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
	*runner.resize_cb.borrow_mut() = Some(cb);
	Ok(())
}

fn browser_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}
