//! Leptos component wrapping a particle field canvas.
//!
//! The canvas is attached once it is mounted. The handle lives inside the
//! mounting effect, so disposing the component drops it and stops the loop.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use super::handle::ParticleFieldHandle;
use super::types::FieldConfig;

/// Renders a decorative particle canvas.
///
/// Size follows `config.sizing`: the viewport for full-page backgrounds, or
/// the parent element for strips such as a footer. If the canvas cannot be
/// used nothing is drawn.
#[component]
pub fn ParticleCanvas(
	#[prop(into)] id: String,
	#[prop(default = FieldConfig::full_page())] config: FieldConfig,
	#[prop(optional, into)] style: String,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let handle: Rc<RefCell<Option<ParticleFieldHandle>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if handle.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		*handle.borrow_mut() = ParticleFieldHandle::attach(canvas, &config);
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id=id
			style=style
			aria-hidden="true"
		/>
	}
}
