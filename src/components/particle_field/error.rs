//! Errors raised while binding a particle field to a canvas.

use thiserror::Error;

/// The drawing surface could not be obtained.
///
/// Never surfaced to the page: the public constructors log it and return
/// `None`, since the animation is purely decorative.
#[derive(Debug, Error)]
pub enum SurfaceError {
	/// No global `window` (not running in a browser).
	#[error("no window available")]
	NoWindow,

	/// The window has no document.
	#[error("no document available")]
	NoDocument,

	/// No element with the requested id.
	#[error("element #{0} not found")]
	NotFound(String),

	/// The element exists but is not a `<canvas>`.
	#[error("element #{0} is not a canvas")]
	NotCanvas(String),

	/// The canvas has no parent container to size against.
	#[error("canvas has no parent element")]
	NoParent,

	/// The canvas refused to hand out a 2D context.
	#[error("2d context unavailable")]
	NoContext,
}
