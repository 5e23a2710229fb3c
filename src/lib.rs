//! portfolio-particles: decorative particle backgrounds for a portfolio page.
//!
//! This crate provides a WASM canvas animation of drifting, pulsing particles
//! that bounce off the canvas edges, plus a small Leptos page that mounts a
//! full-page field and a footer-scoped field.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{
	Color, DrawSurface, FieldConfig, PageConfig, Palette, Particle, ParticleCanvas, ParticleField,
	ParticleFieldHandle, ParticleStyle, ParticleSystem, Sizing, SurfaceError,
	create_particle_field, create_particle_field_with,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-particles: logging initialized");
}

/// Load page settings from a script element with id="particle-config".
/// Expected format: JSON matching [`PageConfig`]; every field is optional.
fn load_page_config() -> Option<PageConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<PageConfig>(&json_text) {
		Ok(config) => {
			info!(
				"portfolio-particles: loaded config ({} hero, {} footer particles)",
				config.hero_count, config.footer_count
			);
			Some(config)
		}
		Err(e) => {
			warn!("portfolio-particles: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Mounts a full-page particle background and a footer strip.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_page_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="page">
			<ParticleCanvas
				id="particles"
				config=config.hero()
				style="position: fixed; inset: 0; pointer-events: none; z-index: 0;"
			/>
			<main class="content" />
			<footer class="footer" style="position: relative; min-height: 12rem;">
				<ParticleCanvas
					id="footer-particles"
					config=config.footer()
					style="position: absolute; inset: 0; pointer-events: none;"
				/>
			</footer>
		</div>
	}
}
