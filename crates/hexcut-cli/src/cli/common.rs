//! Flags shared by the board and pieces commands.

use clap::Args;
use serde::de::DeserializeOwned;

use hexcut::RenderMode;
use hexcut::compose::{ColorOverrides, RenderOptions};

/// Parse a flag value with the same spelling as the YAML files
/// (`fabrication-cut`, `sparse`, ...).
pub fn parse_keyword<T: DeserializeOwned>(value: &str) -> Result<T, String> {
    serde_yaml::from_str(value).map_err(|_| format!("unknown value `{value}`"))
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// display, fabrication-cut, fabrication-engrave or fabrication-negative
    #[arg(long, default_value = "display", value_parser = parse_keyword::<RenderMode>)]
    pub mode: RenderMode,

    /// Use the 1.2 cm cube profile
    #[arg(long)]
    pub tiny: bool,

    /// Use the 2.0 cm cube profile
    #[arg(long)]
    pub large: bool,

    /// Multiply every physical length except line widths
    #[arg(long, default_value_t = 1.0)]
    pub scale: f64,

    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    #[arg(long)]
    pub board_color: Option<String>,

    #[arg(long)]
    pub support_color: Option<String>,

    #[arg(long)]
    pub light_color: Option<String>,

    #[arg(long)]
    pub dark_color: Option<String>,
}

impl RenderArgs {
    /// Options with these flags applied on top of the defaults.
    pub fn to_options(&self) -> RenderOptions {
        RenderOptions {
            mode: self.mode,
            tiny: self.tiny,
            large: self.large,
            scale_factor: self.scale,
            seed: self.seed,
            colors: ColorOverrides {
                board: self.board_color.clone(),
                support: self.support_color.clone(),
                light: self.light_color.clone(),
                dark: self.dark_color.clone(),
            },
            ..Default::default()
        }
    }
}
