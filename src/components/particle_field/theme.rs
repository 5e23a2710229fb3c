//! Visual styling for the particle field.
//!
//! Provides the particle color palette and glow configuration.

use rand::Rng;
use serde::Deserialize;

/// RGB color without alpha. Opacity is applied per draw call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "[u8; 3]")]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// CSS `rgba()` string for this color at the given opacity.
	pub fn to_css_alpha(self, alpha: f64) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
	}
}

impl From<[u8; 3]> for Color {
	fn from([r, g, b]: [u8; 3]) -> Self {
		Self::rgb(r, g, b)
	}
}

/// A non-empty set of base colors particles are drawn from.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
	colors: Vec<Color>,
}

impl Palette {
	/// Returns `None` for an empty color list.
	pub fn new(colors: Vec<Color>) -> Option<Self> {
		if colors.is_empty() {
			None
		} else {
			Some(Self { colors })
		}
	}

	/// Purple and violet tones (default)
	pub fn violet() -> Self {
		Self {
			colors: vec![
				Color::rgb(168, 85, 247), // Purple 500
				Color::rgb(147, 51, 234), // Purple 600
				Color::rgb(139, 92, 246), // Violet 500
				Color::rgb(124, 58, 237), // Violet 600
			],
		}
	}

	pub fn colors(&self) -> &[Color] {
		&self.colors
	}

	/// Pick a color uniformly at random.
	pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
		self.colors[rng.gen_range(0..self.colors.len())]
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self::violet()
	}
}

impl<'de> Deserialize<'de> for Palette {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let colors = Vec::<Color>::deserialize(deserializer)?;
		Ok(Palette::new(colors).unwrap_or_default())
	}
}

/// Complete visual style for a particle field.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleStyle {
	pub palette: Palette,
	/// Glow blur radius per unit of particle size.
	pub blur_per_size: f64,
	/// Glow opacity relative to the particle's current opacity.
	pub glow_opacity: f64,
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self {
			palette: Palette::violet(),
			blur_per_size: 5.0,
			glow_opacity: 0.8,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	#[test]
	fn css_alpha_format() {
		assert_eq!(
			Color::rgb(168, 85, 247).to_css_alpha(0.5),
			"rgba(168, 85, 247, 0.5)"
		);
	}

	#[test]
	fn empty_palette_rejected() {
		assert!(Palette::new(Vec::new()).is_none());
	}

	#[test]
	fn choose_stays_in_palette() {
		let palette = Palette::violet();
		let mut rng = SmallRng::seed_from_u64(7);
		for _ in 0..200 {
			let c = palette.choose(&mut rng);
			assert!(palette.colors().contains(&c));
		}
	}

	#[test]
	fn style_deserializes_with_defaults() {
		let style: ParticleStyle =
			serde_json::from_str(r#"{ "palette": [[1, 2, 3]] }"#).unwrap();
		assert_eq!(style.palette.colors(), &[Color::rgb(1, 2, 3)]);
		assert_eq!(style.blur_per_size, 5.0);
		assert_eq!(style.glow_opacity, 0.8);
	}

	#[test]
	fn empty_palette_in_json_falls_back() {
		let style: ParticleStyle = serde_json::from_str(r#"{ "palette": [] }"#).unwrap();
		assert_eq!(style.palette, Palette::violet());
	}
}
