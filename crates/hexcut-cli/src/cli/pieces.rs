//! `hexcut pieces`

use clap::Args;
use tracing::info;

use hexcut::compose::RenderOptions;
use hexcut::{OutputTarget, PlacementTable, render_pieces};

use super::common::RenderArgs;

#[derive(Args, Debug, Clone)]
pub struct PiecesArgs {
    #[command(flatten)]
    pub render: RenderArgs,

    /// Draw white pieces dark and black pieces light
    #[arg(long)]
    pub invert_colors: bool,
}

impl PiecesArgs {
    pub fn to_options(&self) -> RenderOptions {
        RenderOptions {
            invert_colors: self.invert_colors,
            ..self.render.to_options()
        }
    }
}

pub fn cmd_pieces(args: &PiecesArgs, target: &OutputTarget) -> hexcut::Result<()> {
    let files = render_pieces(&args.to_options(), &PlacementTable::standard(), target)?;
    info!(svg = %files.svg.display(), "piece sheet done");
    Ok(())
}
