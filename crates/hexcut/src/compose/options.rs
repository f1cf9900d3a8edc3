//! Render options shared by the board and the piece sheet.
//!
//! Options load from YAML with every field defaulted, so a batch entry only
//! spells out what differs from a plain display render.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::figures::TextureStyle;
use crate::mode::{Palette, RenderMode};
use crate::profile::SizeProfile;
use crate::shape::Color;

/// Which board cells get their name printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelMode {
    None,
    All,
    /// Only the west and east edge cells.
    #[default]
    Sparse,
}

/// Decoration of even-ring cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ornament {
    Rings,
    #[default]
    Rosette,
}

/// Nested ring parameters for [`Ornament::Rings`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingOptions {
    pub count: usize,
    pub min: f64,
    pub max: f64,
}

impl Default for RingOptions {
    fn default() -> Self {
        Self { count: 3, min: 0.35, max: 0.85 }
    }
}

impl RingOptions {
    /// At least one ring, with scales ordered inside (0, 1].
    pub fn is_valid(&self) -> bool {
        self.count >= 1 && self.min > 0.0 && self.min <= self.max && self.max <= 1.0
    }
}

/// Optional color overrides, any SVG color string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOverrides {
    pub board: Option<String>,
    pub support: Option<String>,
    pub light: Option<String>,
    pub dark: Option<String>,
}

/// Everything that selects one output variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub mode: RenderMode,
    pub labels: LabelMode,
    pub decoration: bool,
    pub gradient: bool,
    pub opacity: bool,
    pub texture: TextureStyle,
    pub ornament: Ornament,
    pub rings: RingOptions,
    pub scale_factor: f64,
    pub tiny: bool,
    pub large: bool,
    pub invert_colors: bool,
    pub colors: ColorOverrides,
    pub seed: u64,
    pub mark_count: usize,
    /// Mask radius as a fraction of the cell inradius; 0 disables it.
    pub mask_ratio: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mode: RenderMode::Display,
            labels: LabelMode::Sparse,
            decoration: false,
            gradient: true,
            opacity: true,
            texture: TextureStyle::Uniform,
            ornament: Ornament::Rosette,
            rings: RingOptions::default(),
            scale_factor: 1.0,
            tiny: false,
            large: false,
            invert_colors: false,
            colors: ColorOverrides::default(),
            seed: 0,
            mark_count: 500,
            mask_ratio: 0.0,
        }
    }
}

impl RenderOptions {
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    /// Reject contradictory options before any geometry is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tiny && self.large {
            return Err(ConfigError::ConflictingProfiles);
        }
        if !(self.scale_factor.is_finite() && self.scale_factor > 0.0) {
            return Err(ConfigError::InvalidScale(self.scale_factor));
        }
        if !(0.0..1.0).contains(&self.mask_ratio) {
            return Err(ConfigError::InvalidMask(self.mask_ratio));
        }
        if self.decoration && self.mark_count == 0 {
            return Err(ConfigError::NoMarks);
        }
        if self.decoration && self.ornament == Ornament::Rings && !self.rings.is_valid() {
            let RingOptions { count, min, max } = self.rings;
            return Err(ConfigError::InvalidRings { count, min, max });
        }
        self.palette().map(|_| ())
    }

    pub fn size_profile(&self) -> SizeProfile {
        match (self.tiny, self.large) {
            (true, _) => SizeProfile::Tiny,
            (_, true) => SizeProfile::Large,
            _ => SizeProfile::Standard,
        }
    }

    /// Cube side after the size profile and the scale factor.
    pub fn cube_side_cm(&self) -> f64 {
        self.size_profile().cube_side_cm() * self.scale_factor
    }

    /// Material colors with overrides applied. `invert_colors` swaps the
    /// two piece faces.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        let base = Palette::default();
        let mut palette = Palette {
            board: parse_override("board", &self.colors.board, base.board)?,
            support: parse_override("support", &self.colors.support, base.support)?,
            light: parse_override("light", &self.colors.light, base.light)?,
            dark: parse_override("dark", &self.colors.dark, base.dark)?,
        };
        if self.invert_colors {
            std::mem::swap(&mut palette.light, &mut palette.dark);
        }
        Ok(palette)
    }
}

fn parse_override(
    field: &'static str,
    value: &Option<String>,
    fallback: Color,
) -> Result<Color, ConfigError> {
    match value {
        None => Ok(fallback),
        Some(text) => text.parse().map_err(|_| ConfigError::InvalidColor {
            field,
            value: text.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let options = RenderOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.size_profile(), SizeProfile::Standard);
        assert_eq!(options.cube_side_cm(), 1.6);
        assert_eq!(options.palette().unwrap(), Palette::default());
    }

    #[test]
    fn tiny_and_large_conflict() {
        let options = RenderOptions { tiny: true, large: true, ..Default::default() };
        assert!(matches!(options.validate(), Err(ConfigError::ConflictingProfiles)));
    }

    #[test]
    fn bad_scale_rejected() {
        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let options = RenderOptions { scale_factor: scale, ..Default::default() };
            assert!(matches!(options.validate(), Err(ConfigError::InvalidScale(_))));
        }
    }

    #[test]
    fn bad_mask_rejected() {
        for mask in [-0.1, 1.0, 2.0] {
            let options = RenderOptions { mask_ratio: mask, ..Default::default() };
            assert!(matches!(options.validate(), Err(ConfigError::InvalidMask(_))));
        }
    }

    #[test]
    fn bad_rings_rejected_up_front() {
        let bad = [
            RingOptions { count: 0, min: 0.9, max: 0.2 },
            RingOptions { count: 3, min: 0.0, max: 0.5 },
            RingOptions { count: 3, min: 0.6, max: 0.5 },
            RingOptions { count: 3, min: 0.5, max: 1.5 },
            RingOptions { count: 3, min: f64::NAN, max: 0.5 },
        ];
        for rings in bad {
            let options = RenderOptions {
                decoration: true,
                ornament: Ornament::Rings,
                rings,
                ..Default::default()
            };
            assert!(
                matches!(options.validate(), Err(ConfigError::InvalidRings { .. })),
                "{rings:?} should be rejected"
            );
        }
    }

    #[test]
    fn rings_ignored_without_ring_ornament() {
        let rings = RingOptions { count: 0, min: 0.9, max: 0.2 };
        let rosette = RenderOptions { decoration: true, rings, ..Default::default() };
        assert!(rosette.validate().is_ok());
        let bare = RenderOptions { ornament: Ornament::Rings, rings, ..Default::default() };
        assert!(bare.validate().is_ok());
    }

    #[test]
    fn bad_color_names_its_field() {
        let options = RenderOptions {
            colors: ColorOverrides { dark: Some("nope".into()), ..Default::default() },
            ..Default::default()
        };
        match options.validate() {
            Err(ConfigError::InvalidColor { field, value }) => {
                assert_eq!(field, "dark");
                assert_eq!(value, "nope");
            }
            other => panic!("expected InvalidColor, got {other:?}"),
        }
    }

    #[test]
    fn invert_swaps_faces() {
        let options = RenderOptions {
            invert_colors: true,
            colors: ColorOverrides { light: Some("#eeeeee".into()), ..Default::default() },
            ..Default::default()
        };
        let palette = options.palette().unwrap();
        assert_eq!(palette.light, Color::BLACK);
        assert_eq!(palette.dark, Color::rgb(0xee, 0xee, 0xee));
    }

    #[test]
    fn profiles_and_scale_multiply() {
        let options = RenderOptions { large: true, scale_factor: 0.5, ..Default::default() };
        assert_eq!(options.size_profile(), SizeProfile::Large);
        assert!((options.cube_side_cm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn yaml_fills_missing_fields() {
        let options = RenderOptions::from_yaml(
            "mode: fabrication-negative\nlabels: all\ndecoration: true\ntexture: gradient\n",
        )
        .unwrap();
        assert_eq!(options.mode, RenderMode::FabricationNegative);
        assert_eq!(options.labels, LabelMode::All);
        assert_eq!(options.texture, TextureStyle::Gradient);
        assert!(options.gradient);
        assert_eq!(options.mark_count, 500);
    }

    #[test]
    fn yaml_rejects_unknown_mode() {
        assert!(matches!(
            RenderOptions::from_yaml("mode: hologram\n"),
            Err(ConfigError::Yaml(_))
        ));
    }
}
