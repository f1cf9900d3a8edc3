//! Composition of whole drawings: the board and the piece sheet.
//!
//! A run validates its [`RenderOptions`], builds its profile, owns one
//! seeded stream and one canvas, and writes its own pair of files. Runs
//! share nothing, so a batch can execute them in any order.

mod board;
pub mod naming;
mod options;
mod pieces;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::canvas::Canvas;
use crate::error::{RenderError, Result};

pub use board::{board_canvas, compose_board, render_board};
pub use crate::mode::{Palette, RenderMode};
pub use options::{ColorOverrides, LabelMode, Ornament, RenderOptions, RingOptions};
pub use pieces::{compose_pieces, pieces_canvas, render_pieces};

/// Where and how a run writes its files.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputTarget {
    pub dir: PathBuf,
    /// Also write the PNG preview.
    pub raster: bool,
    /// Raster pixels per device unit.
    pub raster_scale: f64,
}

impl OutputTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), raster: true, raster_scale: 1.0 }
    }

    pub fn vector_only(mut self) -> Self {
        self.raster = false;
        self
    }

    pub fn with_raster_scale(mut self, scale: f64) -> Self {
        self.raster_scale = scale;
        self
    }
}

/// Files written by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFiles {
    pub name: String,
    pub svg: PathBuf,
    pub png: Option<PathBuf>,
}

pub(crate) fn save(canvas: &Canvas, target: &OutputTarget, name: &str) -> Result<RenderedFiles> {
    ensure_dir(&target.dir)?;

    let svg = target.dir.join(format!("{name}.svg"));
    canvas.save_vector(&svg)?;

    let png = if target.raster {
        let path = target.dir.join(format!("{name}.png"));
        canvas.clone().with_raster_scale(target.raster_scale).save_raster(&path)?;
        Some(path)
    } else {
        None
    };

    info!(name, "rendered");
    Ok(RenderedFiles { name: name.to_string(), svg, png })
}

fn ensure_dir(dir: &Path) -> std::result::Result<(), RenderError> {
    fs::create_dir_all(dir).map_err(|source| RenderError::Io { path: dir.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PlacementTable;

    fn scratch(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hexcut-compose-{tag}-{}", std::process::id()))
    }

    #[test]
    fn render_board_writes_named_svg() {
        let dir = scratch("board");
        let options = RenderOptions { labels: LabelMode::All, ..Default::default() };
        let files = render_board(&options, &OutputTarget::new(&dir).vector_only()).unwrap();

        assert_eq!(files.name, "pijersi_board_with_all_labels");
        assert_eq!(files.svg, dir.join("pijersi_board_with_all_labels.svg"));
        assert!(files.png.is_none());
        let svg = fs::read_to_string(&files.svg).unwrap();
        assert!(svg.contains("<radialGradient"));
        assert!(svg.contains(">d4</text>"));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn render_pieces_writes_png_preview() {
        let dir = scratch("pieces");
        let target = OutputTarget::new(&dir).with_raster_scale(0.25);
        let files = render_pieces(&RenderOptions::default(), &PlacementTable::standard(), &target).unwrap();

        assert_eq!(files.name, "pijersi_cubes");
        let png = files.png.unwrap();
        assert!(fs::metadata(&png).unwrap().len() > 0);
        fs::remove_dir_all(&dir).ok();
    }
}
