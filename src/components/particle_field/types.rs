//! Configuration structures for particle fields.

use serde::Deserialize;

use super::theme::ParticleStyle;

/// Default particle count for a full-page background.
pub const FULL_PAGE_COUNT: usize = 50;
/// Default particle count for a small decorative strip such as a footer.
pub const FOOTER_COUNT: usize = 30;

/// How a canvas derives its pixel size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sizing {
	/// Fill the browser viewport.
	#[default]
	Viewport,
	/// Match the parent element's layout box.
	Parent,
}

/// Everything needed to attach a particle field to a canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
	/// Number of particles, fixed for the field's lifetime.
	pub count: usize,
	pub sizing: Sizing,
	/// Palette and glow settings.
	pub style: ParticleStyle,
}

impl FieldConfig {
	/// Viewport-sized background with 50 particles.
	pub fn full_page() -> Self {
		Self {
			count: FULL_PAGE_COUNT,
			sizing: Sizing::Viewport,
			style: ParticleStyle::default(),
		}
	}

	/// Parent-sized strip with 30 particles.
	pub fn footer() -> Self {
		Self {
			count: FOOTER_COUNT,
			sizing: Sizing::Parent,
			style: ParticleStyle::default(),
		}
	}

	/// Same preset with a different particle count.
	pub fn with_count(self, count: usize) -> Self {
		Self { count, ..self }
	}

	/// Same preset with a different visual style.
	pub fn with_style(self, style: ParticleStyle) -> Self {
		Self { style, ..self }
	}
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self::full_page()
	}
}

/// Page-level settings, read from an embedded JSON script element.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
	/// Particles on the full-page background.
	pub hero_count: usize,
	/// Particles in the footer strip.
	pub footer_count: usize,
	/// Style shared by both fields.
	pub style: ParticleStyle,
}

impl PageConfig {
	/// Full-page background settings.
	pub fn hero(&self) -> FieldConfig {
		FieldConfig::full_page()
			.with_count(self.hero_count)
			.with_style(self.style.clone())
	}

	/// Footer strip settings.
	pub fn footer(&self) -> FieldConfig {
		FieldConfig::footer()
			.with_count(self.footer_count)
			.with_style(self.style.clone())
	}
}

impl Default for PageConfig {
	fn default() -> Self {
		Self {
			hero_count: FULL_PAGE_COUNT,
			footer_count: FOOTER_COUNT,
			style: ParticleStyle::default(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::theme::{Color, Palette};

	#[test]
	fn presets() {
		let page = FieldConfig::full_page();
		assert_eq!((page.count, page.sizing), (50, Sizing::Viewport));
		let footer = FieldConfig::footer();
		assert_eq!((footer.count, footer.sizing), (30, Sizing::Parent));
	}

	#[test]
	fn empty_page_config_is_default() {
		let config: PageConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config, PageConfig::default());
	}

	#[test]
	fn page_config_overrides() {
		let config: PageConfig = serde_json::from_str(
			r#"{
				"hero_count": 80,
				"footer_count": 0,
				"style": { "palette": [[10, 20, 30], [40, 50, 60]], "blur_per_size": 2.5 }
			}"#,
		)
		.unwrap();

		let hero = config.hero();
		assert_eq!(hero.count, 80);
		assert_eq!(hero.sizing, Sizing::Viewport);
		assert_eq!(hero.style.blur_per_size, 2.5);
		assert_eq!(
			hero.style.palette,
			Palette::new(vec![Color::rgb(10, 20, 30), Color::rgb(40, 50, 60)]).unwrap()
		);

		let footer = config.footer();
		assert_eq!(footer.count, 0);
		assert_eq!(footer.sizing, Sizing::Parent);
	}

	#[test]
	fn malformed_color_is_rejected() {
		let result = serde_json::from_str::<PageConfig>(r#"{ "style": { "palette": [[1, 2]] } }"#);
		assert!(result.is_err());
	}
}
