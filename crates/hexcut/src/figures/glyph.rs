//! Piece face glyphs.
//!
//! Each glyph is laid out from the cube's top-left corner with the
//! decoration side `ds`, half the cube side.

use std::f64::consts::TAU;

use crate::geometry::Vector2;
use crate::mode::{Palette, RenderMode};
use crate::piece::{PieceColor, PieceKind};
use crate::shape::{Color, LineCap, LineJoin, Shape, Style};

/// Samples along the closed lemniscate of the wise glyph.
pub const WISE_SAMPLES: usize = 100;

/// Glyph stroke for a piece of `color` in `mode`, `None` when the mode
/// draws no glyphs.
pub fn glyph_color(mode: RenderMode, color: PieceColor, palette: &Palette) -> Option<Color> {
    match mode {
        RenderMode::Display => Some(face_color(color.opposite(), palette)),
        RenderMode::FabricationEngrave => Some(Color::ENGRAVE),
        // bare wood shows through the engraved face
        RenderMode::FabricationNegative => Some(Color::WHITE),
        RenderMode::FabricationCut => None,
    }
}

pub fn face_color(color: PieceColor, palette: &Palette) -> Color {
    match color {
        PieceColor::White => palette.light,
        PieceColor::Black => palette.dark,
    }
}

/// Glyph strokes for one cube.
pub fn piece_glyph(
    kind: PieceKind,
    corner: Vector2,
    cube_side: f64,
    decoration_side: f64,
    stroke: Color,
    line_width: f64,
) -> Vec<Shape> {
    let ds = decoration_side;
    let center = corner + Vector2::new(cube_side / 2.0, cube_side / 2.0);
    let style = Style::stroked(stroke, line_width);

    match kind {
        PieceKind::Rock => vec![Shape::Circle { center, radius: ds / 2.0, style }],
        PieceKind::Paper => vec![Shape::Rectangle {
            corner: corner + Vector2::new(ds / 2.0, ds / 2.0),
            width: ds,
            height: ds,
            style: style.with_join(LineJoin::Miter),
        }],
        PieceKind::Scissors => {
            let near = ds / 2.0;
            let far = ds * 3.0 / 2.0;
            let style = style.with_cap(LineCap::Butt);
            vec![
                Shape::Line {
                    from: corner + Vector2::new(near, near),
                    to: corner + Vector2::new(far, far),
                    style,
                },
                Shape::Line {
                    from: corner + Vector2::new(far, near),
                    to: corner + Vector2::new(near, far),
                    style,
                },
            ]
        }
        PieceKind::Wise => vec![Shape::polygon(lemniscate(center, ds), style)],
    }
}

/// Closed figure-eight, `ds` wide.
fn lemniscate(center: Vector2, ds: f64) -> Vec<Vector2> {
    (0..WISE_SAMPLES)
        .map(|i| {
            let (sin, cos) = (i as f64 * TAU / WISE_SAMPLES as f64).sin_cos();
            let denom = 1.0 + sin * sin;
            center + Vector2::new(ds / 2.0 * cos / denom, ds * cos * sin / denom)
        })
        .collect()
}
