//! Piece sheet composition: the support frame and one face per cube.

use tracing::debug;

use super::options::RenderOptions;
use super::{OutputTarget, RenderedFiles, naming, save};
use crate::canvas::Canvas;
use crate::error::Result;
use crate::figures::{face_color, glyph_color, piece_glyph};
use crate::geometry::Vector2;
use crate::mode::{Palette, RenderMode};
use crate::piece::PlacementTable;
use crate::profile::{CUT_LINE_WIDTH, PieceSheetProfile};
use crate::shape::{Color, Shape, ShapeSink, Style};

/// Validate `options`, then compose the sheet for `table` on a fresh canvas.
pub fn pieces_canvas(options: &RenderOptions, table: &PlacementTable) -> Result<Canvas> {
    options.validate()?;
    let palette = options.palette()?;
    let profile = PieceSheetProfile::new(options.cube_side_cm(), table)?;

    let mut canvas = Canvas::new(
        profile.support_width,
        profile.support_height,
        Vector2::ZERO,
        (profile.support_width_cm, profile.support_height_cm),
    );
    compose_pieces(&mut canvas, &profile, table, options.mode, &palette);

    debug!(
        mode = options.mode.name(),
        pieces = table.piece_count(),
        shapes = canvas.shapes().len(),
        "composed piece sheet"
    );
    Ok(canvas)
}

pub fn render_pieces(
    options: &RenderOptions,
    table: &PlacementTable,
    target: &OutputTarget,
) -> Result<RenderedFiles> {
    let canvas = pieces_canvas(options, table)?;
    save(&canvas, target, &naming::pieces_name(options))
}

/// Append the support frame and every cube of `table` to `sink`.
pub fn compose_pieces(
    sink: &mut impl ShapeSink,
    profile: &PieceSheetProfile,
    table: &PlacementTable,
    mode: RenderMode,
    palette: &Palette,
) {
    let (width, height) = (profile.support_width, profile.support_height);
    match mode {
        RenderMode::Display => sink.append(Shape::Rectangle {
            corner: Vector2::ZERO,
            width,
            height,
            style: Style::filled(palette.support),
        }),
        RenderMode::FabricationCut => {
            let margin = profile.support_cut_margin;
            sink.append(Shape::Rectangle {
                corner: Vector2::new(margin, margin),
                width: width - 2.0 * margin,
                height: height - 2.0 * margin,
                style: Style::filled(Color::WHITE).with_stroke(Color::CUT_2, CUT_LINE_WIDTH),
            });
        }
        RenderMode::FabricationEngrave | RenderMode::FabricationNegative => {
            sink.append(Shape::Rectangle {
                corner: Vector2::ZERO,
                width,
                height,
                style: Style::filled(Color::WHITE).with_stroke(Color::ENGRAVE, profile.cube_line_width),
            });
        }
    }

    let side = profile.cube_side;
    for ((row, col), piece) in table.pieces() {
        let corner = profile.cube_origin(row, col);

        match mode {
            RenderMode::FabricationCut => {
                let margin = profile.cube_cut_margin;
                sink.append(Shape::Rectangle {
                    corner: corner - margin / 2.0,
                    width: side + margin,
                    height: side + margin,
                    style: Style::filled(Color::WHITE).with_stroke(Color::CUT_1, CUT_LINE_WIDTH),
                });
            }
            RenderMode::Display | RenderMode::FabricationNegative => {
                let face = if mode == RenderMode::Display {
                    face_color(piece.color, palette)
                } else {
                    Color::ENGRAVE
                };
                sink.append(Shape::Rectangle {
                    corner,
                    width: side,
                    height: side,
                    style: Style::filled(face),
                });
            }
            RenderMode::FabricationEngrave => {}
        }

        if let Some(stroke) = glyph_color(mode, piece.color, palette) {
            sink.extend_shapes(piece_glyph(
                piece.kind,
                corner,
                side,
                profile.decoration_side,
                stroke,
                profile.decoration_line_width,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{PieceColor, PieceKind, PieceSpec};
    use crate::scale::DEVICE_WIDTH;
    use crate::shape::{Fill, ShapeKind};

    fn rectangles(canvas: &Canvas) -> Vec<(Vector2, f64, Style)> {
        canvas
            .shapes()
            .iter()
            .filter_map(|s| match s {
                Shape::Rectangle { corner, width, style, .. } => Some((*corner, *width, *style)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn cube_side_scales_with_profile() {
        let table = PlacementTable::standard();
        let standard = pieces_canvas(&RenderOptions::default(), &table).unwrap();
        let large = pieces_canvas(&RenderOptions { large: true, ..Default::default() }, &table).unwrap();

        assert_eq!(standard.width(), DEVICE_WIDTH);
        assert_eq!(large.width(), DEVICE_WIDTH);

        let profile_std = PieceSheetProfile::new(1.6, &table).unwrap();
        let profile_large = PieceSheetProfile::new(2.0, &table).unwrap();

        // the faces drawn on the canvas carry the profile's cube side
        let face_std = rectangles(&standard)[1].1;
        let face_large = rectangles(&large)[1].1;
        assert_eq!(face_std, profile_std.cube_side);
        assert_eq!(face_large, profile_large.cube_side);
        assert!((face_std / standard.width() - 1.6 / profile_std.support_width_cm).abs() < 1e-12);
        assert!((face_large / large.width() - 2.0 / profile_large.support_width_cm).abs() < 1e-12);

        // the physical size is carried by the cm dimensions of the document
        let (std_cm, large_cm) = (standard.render_size_cm().0, large.render_size_cm().0);
        assert_eq!(std_cm, profile_std.support_width_cm);
        assert_eq!(large_cm, profile_large.support_width_cm);
        assert!((std_cm / large_cm - 0.8).abs() < 0.01);
    }

    #[test]
    fn display_faces_and_glyphs() {
        let table = PlacementTable::standard();
        let canvas = pieces_canvas(&RenderOptions::default(), &table).unwrap();
        // support + one face per piece
        assert_eq!(rectangles(&canvas).len() - table.piece_count(), 1 + papers(&table));

        let first = table.pieces().next().unwrap();
        let (_, _, style) = rectangles(&canvas)[1];
        let expected = match first.1.color {
            PieceColor::White => Color::WHITE,
            PieceColor::Black => Color::BLACK,
        };
        assert_eq!(style.fill, Fill::Solid(expected));
    }

    fn papers(table: &PlacementTable) -> usize {
        table.pieces().filter(|(_, p)| p.kind == PieceKind::Paper).count()
    }

    #[test]
    fn invert_swaps_faces() {
        let table = PlacementTable::new([((0, 0), PieceSpec::new(PieceKind::Rock, PieceColor::White))]).unwrap();
        let canvas = pieces_canvas(&RenderOptions { invert_colors: true, ..Default::default() }, &table).unwrap();
        let (_, _, face) = rectangles(&canvas)[1];
        assert_eq!(face.fill, Fill::Solid(Color::BLACK));
        let Shape::Circle { style, .. } = &canvas.shapes()[2] else {
            panic!("rock glyph expected");
        };
        assert_eq!(style.stroke_color(), Some(Color::WHITE));
    }

    #[test]
    fn cut_sheet_has_one_square_per_piece() {
        let table = PlacementTable::standard();
        let options = RenderOptions { mode: RenderMode::FabricationCut, ..Default::default() };
        let canvas = pieces_canvas(&options, &table).unwrap();
        let rects = rectangles(&canvas);

        assert_eq!(canvas.shapes().len(), 1 + table.piece_count());
        assert_eq!(rects[0].2.stroke_color(), Some(Color::CUT_2));
        let profile = PieceSheetProfile::new(1.6, &table).unwrap();
        for (corner, width, style) in &rects[1..] {
            assert_eq!(style.stroke_color(), Some(Color::CUT_1));
            assert_eq!(style.stroke.unwrap().width, CUT_LINE_WIDTH);
            assert!((width - (profile.cube_side + profile.cube_cut_margin)).abs() < 1e-9);
            assert!(corner.x > 0.0 && corner.y > 0.0);
        }
    }

    #[test]
    fn engrave_sheet_is_frame_and_glyphs() {
        let table = PlacementTable::standard();
        let options = RenderOptions { mode: RenderMode::FabricationEngrave, ..Default::default() };
        let canvas = pieces_canvas(&options, &table).unwrap();
        assert_eq!(rectangles(&canvas).len(), 1 + papers(&table));
        for shape in &canvas.shapes()[1..] {
            assert_eq!(shape.style().unwrap().stroke_color(), Some(Color::ENGRAVE));
        }
    }

    #[test]
    fn negative_sheet_engraves_faces() {
        let table = PlacementTable::new([
            ((0, 0), PieceSpec::new(PieceKind::Wise, PieceColor::Black)),
            ((0, 1), PieceSpec::new(PieceKind::Scissors, PieceColor::White)),
        ])
        .unwrap();
        let options = RenderOptions { mode: RenderMode::FabricationNegative, ..Default::default() };
        let canvas = pieces_canvas(&options, &table).unwrap();

        let kinds: Vec<ShapeKind> = canvas.shapes().iter().map(Shape::kind).collect();
        assert_eq!(
            kinds,
            [
                ShapeKind::Rectangle,
                ShapeKind::Rectangle,
                ShapeKind::Polyline,
                ShapeKind::Rectangle,
                ShapeKind::Line,
                ShapeKind::Line,
            ]
        );
        let (_, _, face) = rectangles(&canvas)[1];
        assert_eq!(face.fill, Fill::Solid(Color::ENGRAVE));
        assert_eq!(canvas.shapes()[2].style().unwrap().stroke_color(), Some(Color::WHITE));
    }
}
