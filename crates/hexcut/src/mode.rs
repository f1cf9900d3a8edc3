//! Output modes and resolved material colors.
//!
//! Both sit below the figure generators and the composition driver, which
//! each pick strokes and fills from them.

use serde::{Deserialize, Serialize};

use crate::shape::Color;

/// What the output is for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    /// Screen artwork with material colors.
    #[default]
    Display,
    /// Laser cut paths only.
    FabricationCut,
    /// Laser engrave paths on a white frame.
    FabricationEngrave,
    /// Engraved fields with the artwork left bare.
    FabricationNegative,
}

impl RenderMode {
    pub const ALL: [RenderMode; 4] = [
        RenderMode::Display,
        RenderMode::FabricationCut,
        RenderMode::FabricationEngrave,
        RenderMode::FabricationNegative,
    ];

    pub fn is_fabrication(self) -> bool {
        self != RenderMode::Display
    }

    pub fn name(self) -> &'static str {
        match self {
            RenderMode::Display => "display",
            RenderMode::FabricationCut => "fabrication-cut",
            RenderMode::FabricationEngrave => "fabrication-engrave",
            RenderMode::FabricationNegative => "fabrication-negative",
        }
    }
}

/// Resolved material colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub board: Color,
    pub support: Color,
    /// Face of the white pieces.
    pub light: Color,
    /// Face of the black pieces.
    pub dark: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            board: Color::WOOD,
            support: Color::WOOD,
            light: Color::WHITE,
            dark: Color::BLACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_display_is_for_screens() {
        let fabrication: Vec<_> = RenderMode::ALL.iter().filter(|m| m.is_fabrication()).collect();
        assert_eq!(fabrication.len(), 3);
        assert!(!RenderMode::Display.is_fabrication());
    }

    #[test]
    fn names_match_serde() {
        for mode in RenderMode::ALL {
            let yaml = serde_yaml::to_string(&mode).unwrap();
            assert_eq!(yaml.trim(), mode.name());
        }
    }
}
