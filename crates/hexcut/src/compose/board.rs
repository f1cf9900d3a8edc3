//! Board composition.
//!
//! Draw order is the outer frame, then per cell (in name order) the cell
//! polygon, its decoration and its label. Later shapes paint over earlier
//! ones, so the order is part of the output.

use tracing::debug;

use super::options::{LabelMode, Ornament, RenderOptions};
use super::{OutputTarget, RenderedFiles, naming, save};
use crate::canvas::Canvas;
use crate::error::{GeometryError, Result};
use crate::figures::{TextureSampler, concentric_rings, rosette};
use crate::geometry::Vector2;
use crate::grid::{Grid, GridLayout, HexCell, Side};
use crate::mode::{Palette, RenderMode};
use crate::profile::{BoardProfile, CUT_LINE_WIDTH};
use crate::rng::SeedStream;
use crate::shape::{Color, Fill, GradientStop, RadialGradient, Shape, ShapeSink, Style};

/// Validate `options`, then compose the standard board on a fresh canvas.
pub fn board_canvas(options: &RenderOptions) -> Result<Canvas> {
    options.validate()?;
    let palette = options.palette()?;
    let profile = BoardProfile::new(options.cube_side_cm())?;
    let grid = Grid::build(&GridLayout::standard(), profile.hexagon)?;

    let mut canvas = Canvas::new(
        profile.board_width,
        profile.board_height,
        Vector2::new(-profile.board_width / 2.0, -profile.board_height / 2.0),
        (profile.board_width_cm, profile.board_height_cm),
    );
    let mut stream = SeedStream::new(options.seed);
    compose_board(&mut canvas, &profile, &grid, options, &palette, &mut stream)?;

    debug!(
        mode = options.mode.name(),
        shapes = canvas.shapes().len(),
        "composed board"
    );
    Ok(canvas)
}

/// Compose the board and write `<name>.svg` (and `<name>.png`).
pub fn render_board(options: &RenderOptions, target: &OutputTarget) -> Result<RenderedFiles> {
    let canvas = board_canvas(options)?;
    save(&canvas, target, &naming::board_name(options))
}

/// Append every board shape for `options` to `sink`.
///
/// The board is centered on the device origin.
pub fn compose_board(
    sink: &mut impl ShapeSink,
    profile: &BoardProfile,
    grid: &Grid,
    options: &RenderOptions,
    palette: &Palette,
    stream: &mut SeedStream,
) -> std::result::Result<(), GeometryError> {
    sink.append(outer_frame(profile, options.mode, palette));
    if options.mode == RenderMode::FabricationCut {
        return Ok(());
    }

    let negative = options.mode == RenderMode::FabricationNegative;
    let ink = if negative { Color::WHITE } else { profile.hexagon_line_color };
    let line = Style::stroked(ink, profile.hexagon_line_width);

    let inset = profile.hexagon_inset();
    let sampler = if options.decoration {
        let inradius = inset * profile.hexagon.side * 3f64.sqrt() / 2.0;
        Some(TextureSampler::preset(options.texture)?.with_mask_radius(options.mask_ratio * inradius))
    } else {
        None
    };

    for cell in grid.cells() {
        let vertices = grid.vertices(cell, inset)?.to_vec();
        sink.append(cell_shape(profile, options, cell, vertices.clone(), inset));

        if let Some(sampler) = &sampler {
            if cell.ring % 2 == 1 {
                let marks = sampler.sample(cell.center, &vertices, options.mark_count, stream)?;
                sink.extend_shapes(
                    marks
                        .into_iter()
                        .map(|mark| Shape::Line { from: mark.from, to: mark.to, style: line }),
                );
            } else {
                for polygon in ornament(profile, options, cell)? {
                    sink.append(Shape::polygon(polygon, line));
                }
            }
        }

        if let Some(position) = label_position(profile, options.labels, cell) {
            sink.append(Shape::Text {
                text: cell.name.clone(),
                position,
                font_size: profile.label_font_size as f64,
                font_family: profile.label_font_family.to_string(),
                fill: if negative { Color::WHITE } else { profile.label_color },
            });
        }
    }
    Ok(())
}

fn outer_frame(profile: &BoardProfile, mode: RenderMode, palette: &Palette) -> Shape {
    let corner = Vector2::new(-profile.board_width / 2.0, -profile.board_height / 2.0);
    if mode.is_fabrication() {
        let margin = profile.board_cut_margin;
        Shape::Rectangle {
            corner: corner + margin,
            width: profile.board_width - 2.0 * margin,
            height: profile.board_height - 2.0 * margin,
            style: Style::filled(Color::WHITE).with_stroke(Color::CUT_1, CUT_LINE_WIDTH),
        }
    } else {
        Shape::Rectangle {
            corner,
            width: profile.board_width,
            height: profile.board_height,
            style: Style::filled(palette.board),
        }
    }
}

fn cell_shape(
    profile: &BoardProfile,
    options: &RenderOptions,
    cell: &HexCell,
    vertices: Vec<Vector2>,
    inset: f64,
) -> Shape {
    let outline = Style::stroked(profile.hexagon_line_color, profile.hexagon_line_width);

    if options.mode == RenderMode::FabricationNegative {
        return Shape::polygon(vertices, outline.with_fill(Fill::Solid(Color::ENGRAVE), 1.0));
    }

    // odd rings are half as dark
    let opacity = profile.hexagon_opacity * if cell.ring % 2 == 0 { 1.0 } else { 0.5 };

    if options.gradient {
        Shape::GradientPolygon {
            points: vertices,
            gradient: RadialGradient {
                center: cell.center,
                radius: inset * profile.hexagon.side,
                stops: vec![
                    GradientStop { offset: 0.0, color: Color::ENGRAVE, opacity: 0.0 },
                    GradientStop { offset: 1.0, color: Color::ENGRAVE, opacity },
                ],
            },
            style: outline,
        }
    } else {
        let fill_opacity = if options.opacity { opacity * 0.5 } else { 0.0 };
        Shape::polygon(vertices, outline.with_fill(Fill::Solid(Color::ENGRAVE), fill_opacity))
    }
}

fn ornament(
    profile: &BoardProfile,
    options: &RenderOptions,
    cell: &HexCell,
) -> std::result::Result<Vec<Vec<Vector2>>, GeometryError> {
    let side = profile.hexagon.side;
    match options.ornament {
        Ornament::Rosette => Ok(rosette(cell.center, side)),
        Ornament::Rings => {
            let rings = options.rings;
            concentric_rings(cell.center, side, rings.count, rings.min, rings.max)
        }
    }
}

fn label_position(profile: &BoardProfile, labels: LabelMode, cell: &HexCell) -> Option<Vector2> {
    match labels {
        LabelMode::None => None,
        LabelMode::All => Some(cell.center + profile.label_vertical_shift),
        LabelMode::Sparse => match cell.side? {
            Side::West => Some(cell.center - profile.label_horizontal_shift),
            Side::East => Some(cell.center + profile.label_horizontal_shift),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::RingOptions;
    use crate::error::{ConfigError, Error};
    use crate::figures::TextureStyle;
    use crate::shape::ShapeKind;

    fn texts(canvas: &Canvas) -> Vec<(String, Vector2)> {
        canvas
            .shapes()
            .iter()
            .filter_map(|s| match s {
                Shape::Text { text, position, .. } => Some((text.clone(), *position)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn sparse_labels_without_decoration() {
        let options = RenderOptions {
            labels: LabelMode::Sparse,
            decoration: false,
            ..Default::default()
        };
        let canvas = board_canvas(&options).unwrap();

        // frame + 45 cells + 14 labels
        assert_eq!(canvas.count(ShapeKind::Rectangle), 1);
        assert_eq!(canvas.count(ShapeKind::GradientPolygon), 45);
        assert_eq!(canvas.count(ShapeKind::Line), 0);
        assert_eq!(canvas.shapes().len(), 1 + 45 + 14);

        let labels = texts(&canvas);
        assert_eq!(labels.len(), 14);
        let profile = BoardProfile::new(1.6).unwrap();
        let grid = Grid::build(&GridLayout::standard(), profile.hexagon).unwrap();
        for (name, position) in labels {
            let cell = grid.cell(&name).unwrap();
            let expected = match cell.side.unwrap() {
                Side::West => cell.center - profile.label_horizontal_shift,
                Side::East => cell.center + profile.label_horizontal_shift,
            };
            assert_eq!(position, expected);
        }
    }

    #[test]
    fn all_labels_sit_below_centers() {
        let options = RenderOptions { labels: LabelMode::All, ..Default::default() };
        let canvas = board_canvas(&options).unwrap();
        let labels = texts(&canvas);
        assert_eq!(labels.len(), 45);
        let d4 = labels.iter().find(|(name, _)| name == "d4").unwrap();
        // d4 is the board center; device y grows downward
        assert!(d4.1.x.abs() < 1e-9);
        assert!(d4.1.y > 0.0);
    }

    #[test]
    fn no_labels() {
        let options = RenderOptions { labels: LabelMode::None, ..Default::default() };
        assert!(texts(&board_canvas(&options).unwrap()).is_empty());
    }

    #[test]
    fn flat_fill_opacity_by_ring() {
        let options = RenderOptions { gradient: false, labels: LabelMode::None, ..Default::default() };
        let canvas = board_canvas(&options).unwrap();
        let opacities: Vec<f64> = canvas
            .shapes()
            .iter()
            .filter(|s| s.kind() == ShapeKind::Polyline)
            .map(|s| s.style().unwrap().fill_opacity)
            .collect();
        assert_eq!(opacities.len(), 45);
        assert!(opacities.iter().any(|o| (o - 0.45 * 0.5).abs() < 1e-12));
        assert!(opacities.iter().any(|o| (o - 0.45 * 0.25).abs() < 1e-12));

        let transparent = RenderOptions { opacity: false, ..options };
        let canvas = board_canvas(&transparent).unwrap();
        assert!(canvas
            .shapes()
            .iter()
            .filter(|s| s.kind() == ShapeKind::Polyline)
            .all(|s| s.style().unwrap().fill_opacity == 0.0));
    }

    #[test]
    fn decoration_splits_by_ring_parity() {
        let options = RenderOptions {
            decoration: true,
            labels: LabelMode::None,
            mark_count: 20,
            ..Default::default()
        };
        let canvas = board_canvas(&options).unwrap();
        let grid = Grid::build(&GridLayout::standard(), BoardProfile::new(1.6).unwrap().hexagon).unwrap();
        let odd = grid.cells().iter().filter(|c| c.ring % 2 == 1).count();
        let even = grid.len() - odd;

        assert_eq!(canvas.count(ShapeKind::Line), odd * 20);
        // each even cell: a 12-gon plus 12 hexagons
        assert_eq!(canvas.count(ShapeKind::Polyline), even * 13);
    }

    #[test]
    fn ring_ornament() {
        let options = RenderOptions {
            decoration: true,
            ornament: Ornament::Rings,
            labels: LabelMode::None,
            mark_count: 1,
            ..Default::default()
        };
        let canvas = board_canvas(&options).unwrap();
        let grid = Grid::build(&GridLayout::standard(), BoardProfile::new(1.6).unwrap().hexagon).unwrap();
        let even = grid.cells().iter().filter(|c| c.ring % 2 == 0).count();
        assert_eq!(canvas.count(ShapeKind::Polyline), even * (options.rings.count + 1));
    }

    #[test]
    fn same_seed_same_board() {
        let options = RenderOptions {
            decoration: true,
            texture: TextureStyle::Gradient,
            mark_count: 30,
            seed: 11,
            ..Default::default()
        };
        let a = board_canvas(&options).unwrap();
        let b = board_canvas(&options).unwrap();
        assert_eq!(a.shapes(), b.shapes());

        let c = board_canvas(&RenderOptions { seed: 12, ..options }).unwrap();
        assert_ne!(a.shapes(), c.shapes());
    }

    #[test]
    fn cut_mode_is_frame_only() {
        let options = RenderOptions { mode: RenderMode::FabricationCut, ..Default::default() };
        let canvas = board_canvas(&options).unwrap();
        assert_eq!(canvas.shapes().len(), 1);
        let style = canvas.shapes()[0].style().unwrap();
        assert_eq!(style.stroke_color(), Some(Color::CUT_1));
        assert_eq!(style.stroke.unwrap().width, CUT_LINE_WIDTH);
        assert_eq!(style.fill, Fill::Solid(Color::WHITE));
    }

    #[test]
    fn negative_mode_inverts_ink() {
        let options = RenderOptions {
            mode: RenderMode::FabricationNegative,
            decoration: true,
            mark_count: 5,
            ..Default::default()
        };
        let canvas = board_canvas(&options).unwrap();
        for shape in canvas.shapes() {
            match shape {
                Shape::Line { style, .. } => assert_eq!(style.stroke_color(), Some(Color::WHITE)),
                Shape::Text { fill, .. } => assert_eq!(*fill, Color::WHITE),
                _ => {}
            }
        }
        assert_eq!(canvas.count(ShapeKind::GradientPolygon), 0);
    }

    #[test]
    fn masked_board_texture() {
        let options = RenderOptions {
            decoration: true,
            mask_ratio: 0.5,
            mark_count: 50,
            labels: LabelMode::None,
            ..Default::default()
        };
        let profile = BoardProfile::new(1.6).unwrap();
        let grid = Grid::build(&GridLayout::standard(), profile.hexagon).unwrap();
        let radius = 0.5 * profile.hexagon_inset() * profile.hexagon.side * 3f64.sqrt() / 2.0;

        let canvas = board_canvas(&options).unwrap();
        for shape in canvas.shapes() {
            if let Shape::Line { from, to, .. } = shape {
                let nearest = grid
                    .cells()
                    .iter()
                    .map(|c| c.center)
                    .min_by(|a, b| a.distance(*from).total_cmp(&b.distance(*from)))
                    .unwrap();
                assert!(from.distance(nearest) >= radius - 1e-9);
                assert!(to.distance(nearest) >= radius - 1e-9);
            }
        }
    }

    #[test]
    fn invalid_options_stop_before_geometry() {
        let options = RenderOptions { tiny: true, large: true, ..Default::default() };
        assert!(matches!(
            board_canvas(&options),
            Err(Error::Config(ConfigError::ConflictingProfiles))
        ));
    }

    #[test]
    fn bad_rings_fail_as_config() {
        let options = RenderOptions {
            decoration: true,
            ornament: Ornament::Rings,
            rings: RingOptions { count: 0, min: 0.9, max: 0.2 },
            ..Default::default()
        };
        assert!(matches!(
            board_canvas(&options),
            Err(Error::Config(ConfigError::InvalidRings { count: 0, .. }))
        ));
    }

    #[test]
    fn board_frame_is_centered() {
        let canvas = board_canvas(&RenderOptions::default()).unwrap();
        assert_eq!(canvas.width(), 4096.0);
        assert_eq!(canvas.origin(), Vector2::new(-canvas.width() / 2.0, -canvas.height() / 2.0));
        match &canvas.shapes()[0] {
            Shape::Rectangle { style, .. } => assert_eq!(style.fill, Fill::Solid(Color::WOOD)),
            other => panic!("expected the board frame first, got {other:?}"),
        }
    }
}
