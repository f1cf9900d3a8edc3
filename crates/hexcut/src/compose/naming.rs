//! Output file names.
//!
//! Names are built from a base that encodes the drawing switches, then
//! rewritten in a fixed order: fabrication mode, size profile, scale.

use super::options::{LabelMode, Ornament, RenderOptions};
use crate::mode::RenderMode;
use crate::profile::SizeProfile;

const PREFIX: &str = "pijersi_";

pub fn board_name(options: &RenderOptions) -> String {
    let mut name = String::from(match options.labels {
        LabelMode::None => "pijersi_board_without_labels",
        LabelMode::All => "pijersi_board_with_all_labels",
        LabelMode::Sparse => "pijersi_board_with_few_labels",
    });
    if options.decoration {
        name.push_str("_with_decoration");
    }
    if !options.gradient {
        name.push_str("_without_gradient");
    }
    if !options.opacity {
        name.push_str("_without_opacity");
    }
    if options.decoration {
        name.push('_');
        name.push_str(options.texture.name());
        if options.ornament == Ornament::Rings {
            name.push_str("_with_rings");
        }
    }

    let laser = match options.mode {
        RenderMode::Display => None,
        RenderMode::FabricationEngrave => Some("pijersi_laser_"),
        RenderMode::FabricationCut => Some("pijersi_laser_cut_"),
        RenderMode::FabricationNegative => Some("pijersi_laser_negative_"),
    };
    if let Some(laser) = laser {
        name = name.replacen(PREFIX, laser, 1);
    }

    finish(name, options)
}

pub fn pieces_name(options: &RenderOptions) -> String {
    let name = match options.mode {
        RenderMode::Display => "pijersi_cubes",
        RenderMode::FabricationCut => "pijersi_laser_cubes_support",
        RenderMode::FabricationEngrave => "pijersi_laser_cubes_decorations",
        RenderMode::FabricationNegative => "pijersi_laser_cubes_negative",
    };
    finish(name.to_string(), options)
}

fn finish(mut name: String, options: &RenderOptions) -> String {
    match options.size_profile() {
        SizeProfile::Standard => {}
        SizeProfile::Tiny => name = name.replacen(PREFIX, "pijersi_tiny_", 1),
        SizeProfile::Large => name = name.replacen(PREFIX, "pijersi_large_", 1),
    }
    if options.scale_factor != 1.0 {
        name = format!("scale_{}_{name}", options.scale_factor);
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figures::TextureStyle;

    #[test]
    fn board_display_names() {
        let mut options = RenderOptions::default();
        assert_eq!(board_name(&options), "pijersi_board_with_few_labels");

        options.labels = LabelMode::All;
        assert_eq!(board_name(&options), "pijersi_board_with_all_labels");

        options.labels = LabelMode::None;
        options.decoration = true;
        assert_eq!(board_name(&options), "pijersi_board_without_labels_with_decoration_uniform");
    }

    #[test]
    fn board_suffix_order() {
        let options = RenderOptions {
            decoration: true,
            gradient: false,
            opacity: false,
            texture: TextureStyle::Concentrated,
            ..Default::default()
        };
        assert_eq!(
            board_name(&options),
            "pijersi_board_with_few_labels_with_decoration_without_gradient_without_opacity_concentrated"
        );
    }

    #[test]
    fn texture_only_with_decoration() {
        let options = RenderOptions { texture: TextureStyle::Gradient, ..Default::default() };
        assert_eq!(board_name(&options), "pijersi_board_with_few_labels");
    }

    #[test]
    fn fabrication_then_profile_then_scale() {
        let options = RenderOptions {
            mode: RenderMode::FabricationCut,
            tiny: true,
            scale_factor: 0.5,
            ..Default::default()
        };
        assert_eq!(
            board_name(&options),
            "scale_0.5_pijersi_tiny_laser_cut_board_with_few_labels"
        );

        let engrave = RenderOptions { mode: RenderMode::FabricationEngrave, ..Default::default() };
        assert_eq!(board_name(&engrave), "pijersi_laser_board_with_few_labels");

        let negative = RenderOptions { mode: RenderMode::FabricationNegative, large: true, ..Default::default() };
        assert_eq!(board_name(&negative), "pijersi_large_laser_negative_board_with_few_labels");
    }

    #[test]
    fn piece_sheet_names() {
        let names: Vec<String> = RenderMode::ALL
            .iter()
            .map(|&mode| pieces_name(&RenderOptions { mode, ..Default::default() }))
            .collect();
        assert_eq!(
            names,
            [
                "pijersi_cubes",
                "pijersi_laser_cubes_support",
                "pijersi_laser_cubes_decorations",
                "pijersi_laser_cubes_negative",
            ]
        );

        let large = RenderOptions { large: true, scale_factor: 2.0, ..Default::default() };
        assert_eq!(pieces_name(&large), "scale_2_pijersi_large_cubes");
    }
}
