//! `hexcut board`

use clap::Args;
use tracing::info;

use hexcut::compose::{LabelMode, Ornament, RenderOptions, RingOptions};
use hexcut::{OutputTarget, TextureStyle, render_board};

use super::common::{RenderArgs, parse_keyword};

#[derive(Args, Debug, Clone)]
pub struct BoardArgs {
    #[command(flatten)]
    pub render: RenderArgs,

    /// none, all or sparse (west and east edge cells)
    #[arg(long, default_value = "sparse", value_parser = parse_keyword::<LabelMode>)]
    pub labels: LabelMode,

    /// Texture odd rings and ornament even rings
    #[arg(long)]
    pub decoration: bool,

    /// Flat cell fill instead of the radial gradient
    #[arg(long)]
    pub no_gradient: bool,

    /// Transparent cells when the gradient is off
    #[arg(long)]
    pub no_opacity: bool,

    /// uniform, concentrated or gradient
    #[arg(long, default_value = "uniform", value_parser = parse_keyword::<TextureStyle>)]
    pub texture: TextureStyle,

    /// rosette or rings
    #[arg(long, default_value = "rosette", value_parser = parse_keyword::<Ornament>)]
    pub ornament: Ornament,

    /// Nested outlines drawn by the rings ornament, minus one
    #[arg(long, default_value_t = RingOptions::default().count)]
    pub ring_count: usize,

    /// Texture marks per odd-ring cell
    #[arg(long, default_value_t = 500)]
    pub marks: usize,

    /// Keep marks out of this fraction of the cell inradius
    #[arg(long, default_value_t = 0.0)]
    pub mask: f64,
}

impl BoardArgs {
    pub fn to_options(&self) -> RenderOptions {
        RenderOptions {
            labels: self.labels,
            decoration: self.decoration,
            gradient: !self.no_gradient,
            opacity: !self.no_opacity,
            texture: self.texture,
            ornament: self.ornament,
            rings: RingOptions { count: self.ring_count, ..Default::default() },
            mark_count: self.marks,
            mask_ratio: self.mask,
            ..self.render.to_options()
        }
    }
}

pub fn cmd_board(args: &BoardArgs, target: &OutputTarget) -> hexcut::Result<()> {
    let files = render_board(&args.to_options(), target)?;
    info!(svg = %files.svg.display(), "board done");
    Ok(())
}
